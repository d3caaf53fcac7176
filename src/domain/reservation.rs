use serde::{Deserialize, Serialize};

use super::{CardNumber, Item, ItemId, RequestError};

/// 予約 - 貸出中の資料に対する1件の取り置き依頼
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub item_id: ItemId,
    pub card_number: CardNumber,
}

/// 予約キュー
///
/// 挿入順に予約を保持する。重複は排除しない。
/// 貸出・延長の可否判定には「予約が存在するか」だけを使い、
/// 順番待ちの先頭は管理しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationQueue {
    requests: Vec<Request>,
}

impl ReservationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 予約を末尾に追加する（存在確認・重複排除なし）
    pub fn submit(&mut self, item_id: ItemId, card_number: CardNumber) {
        self.requests.push(Request {
            item_id,
            card_number,
        });
    }

    /// 資料に未処理の予約が1件以上あるか
    pub fn has_outstanding(&self, item_id: &ItemId) -> bool {
        self.requests.iter().any(|r| &r.item_id == item_id)
    }

    /// 資料に対する予約をすべて取り消す
    ///
    /// 先頭1件だけではなく全件を削除する。戻り値は削除件数。
    pub fn fulfill_all(&mut self, item_id: &ItemId) -> usize {
        let before = self.requests.len();
        self.requests.retain(|r| &r.item_id != item_id);
        before - self.requests.len()
    }

    /// 利用者の予約中資料IDを挿入順で返す
    pub fn list_for_user(&self, card_number: &CardNumber) -> Vec<ItemId> {
        self.requests
            .iter()
            .filter(|r| &r.card_number == card_number)
            .map(|r| r.item_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

/// 純粋関数：資料を予約する
///
/// ビジネスルール：
/// - 貸出可能な資料は予約不要
/// - 同じ利用者による重複予約は妨げない
pub fn request_item(
    queue: &mut ReservationQueue,
    item: &Item,
    card_number: CardNumber,
) -> Result<(), RequestError> {
    if item.is_available() {
        return Err(RequestError::RequestUnnecessary);
    }
    queue.submit(item.id().clone(), card_number);
    Ok(())
}
