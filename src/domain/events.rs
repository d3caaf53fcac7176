use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CardNumber, ItemId, UserId};

/// イベント：資料が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCheckedOut {
    pub item_id: ItemId,
    pub card_number: CardNumber,
    pub checked_out_on: NaiveDate,
    pub due_date: NaiveDate,
}

/// イベント：資料が返却された
///
/// 貸出中でない資料の返却も受け付けるため、実際に状態が変わったかを保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemReturned {
    pub item_id: ItemId,
    pub card_number: CardNumber,
    /// 資料が貸出中だったか
    pub was_checked_out: bool,
    /// 利用者の保持リストに含まれていたか
    pub was_held_by_user: bool,
}

/// イベント：貸出が延長された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRenewed {
    pub item_id: ItemId,
    pub card_number: CardNumber,
    pub renewed_on: NaiveDate,
    /// 新しい返却期限（貸出中でなかった場合はNone）
    pub new_due_date: Option<NaiveDate>,
}

/// イベント：資料が予約された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequested {
    pub item_id: ItemId,
    pub card_number: CardNumber,
}

/// イベント：資料の予約がまとめて処理された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestsFulfilled {
    pub item_id: ItemId,
    pub fulfilled_count: usize,
}

/// イベント：利用者が登録された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRegistered {
    pub card_number: CardNumber,
    pub user_id: UserId,
    pub name: String,
}
