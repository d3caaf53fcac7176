use serde::{Deserialize, Serialize};

use super::{CardNumber, CheckOutError, ItemId, UserId};

/// 利用者
///
/// 保持中の資料はIDで参照する（資料のコピーは持たない）。
/// 不変条件：保持数は貸出上限以下。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    card_number: CardNumber,
    user_id: UserId,
    name: String,
    address: String,
    phone_number: String,
    checked_out_items: Vec<ItemId>,
}

impl User {
    pub fn new(
        card_number: CardNumber,
        user_id: UserId,
        name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            card_number,
            user_id,
            name: name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
            checked_out_items: Vec::new(),
        }
    }

    pub fn card_number(&self) -> &CardNumber {
        &self.card_number
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn checked_out_items(&self) -> &[ItemId] {
        &self.checked_out_items
    }

    pub fn can_check_out(&self, checkout_limit: usize) -> bool {
        self.checked_out_items.len() < checkout_limit
    }

    /// 保持中の資料に追加する
    ///
    /// # エラー
    /// 上限に達している場合は`CheckOutError::CheckoutLimitReached`を返す
    pub fn check_out(&mut self, item_id: ItemId, checkout_limit: usize) -> Result<(), CheckOutError> {
        if !self.can_check_out(checkout_limit) {
            return Err(CheckOutError::CheckoutLimitReached);
        }
        self.checked_out_items.push(item_id);
        Ok(())
    }

    /// 保持中の資料から外す。保持していなければ何もしない。
    pub fn return_item(&mut self, item_id: &ItemId) -> bool {
        match self.checked_out_items.iter().position(|id| id == item_id) {
            Some(index) => {
                self.checked_out_items.remove(index);
                true
            }
            None => false,
        }
    }

    /// 同一人物とみなすか（氏名・住所は大文字小文字を無視、電話番号は完全一致）
    pub fn has_same_details(&self, name: &str, address: &str, phone_number: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
            && self.address.to_lowercase() == address.to_lowercase()
            && self.phone_number == phone_number
    }
}
