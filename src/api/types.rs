use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{CardNumber, Item, ItemCategory, ItemId, Money, commands::RegisterUser};

/// 貸出・返却・延長・予約リクエスト（POST /checkouts 等）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LendingRequest {
    pub card_number: CardNumber,
    pub item_id: ItemId,
}

/// 利用者登録リクエスト（POST /users）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub address: String,
    pub phone_number: String,
}

impl RegisterUserRequest {
    pub fn to_command(&self) -> RegisterUser {
        RegisterUser {
            name: self.name.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
        }
    }
}

/// 資料レスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item_id: ItemId,
    pub title: String,
    pub creator: String,
    pub category: ItemCategory,
    pub renewable: bool,
    pub value_cents: u64,
    pub available: bool,
    pub due_date: Option<NaiveDate>,
    pub summary: String,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            item_id: item.id().clone(),
            title: item.title().to_string(),
            creator: item.creator().to_string(),
            category: item.category(),
            renewable: item.is_renewable(),
            value_cents: item.value().cents(),
            available: item.is_available(),
            due_date: item.due_date(),
            summary: item.to_string(),
        }
    }
}

/// 延滞料金レスポンス（GET /users/:card/fines）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinesResponse {
    pub card_number: CardNumber,
    pub as_of: NaiveDate,
    pub total_cents: u64,
    pub total: String,
}

impl FinesResponse {
    pub fn new(card_number: CardNumber, as_of: NaiveDate, total: Money) -> Self {
        Self {
            card_number,
            as_of,
            total_cents: total.cents(),
            total: total.to_string(),
        }
    }
}

/// 予約一覧レスポンス（GET /users/:card/requests）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRequestsResponse {
    pub card_number: CardNumber,
    pub item_ids: Vec<ItemId>,
}

/// エラーレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
