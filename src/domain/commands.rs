use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CardNumber, ItemId};

/// コマンド：資料を貸し出す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutItem {
    pub card_number: CardNumber,
    pub item_id: ItemId,
    pub checked_out_on: NaiveDate,
}

/// コマンド：資料を返却する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnItem {
    pub card_number: CardNumber,
    pub item_id: ItemId,
}

/// コマンド：貸出を延長する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewItem {
    pub card_number: CardNumber,
    pub item_id: ItemId,
    pub renewed_on: NaiveDate,
}

/// コマンド：資料を予約する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestItem {
    pub card_number: CardNumber,
    pub item_id: ItemId,
}

/// コマンド：利用者を登録する
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub address: String,
    pub phone_number: String,
}
