use crate::domain::{CardNumber, Item, ItemId};

use super::errors::{LendingError, Result};
use super::fines::resolve_held_items;
use super::lending_service::ServiceDependencies;

/// 貸出可能な資料の一覧（ID順）
///
/// 貸出中の資料と、未処理の予約がある資料は含めない。
pub fn available_items(deps: &ServiceDependencies) -> Vec<&Item> {
    let mut items: Vec<&Item> = deps
        .catalog
        .items()
        .into_iter()
        .filter(|item| item.is_available() && !deps.reservations.has_outstanding(item.id()))
        .collect();
    items.sort_by(|a, b| a.id().cmp(b.id()));
    items
}

/// 利用者が保持中の資料
pub fn held_items<'a>(deps: &'a ServiceDependencies, card_number: &CardNumber) -> Result<Vec<&'a Item>> {
    resolve_held_items(deps, card_number)
}

/// 利用者の予約中資料ID（予約順）
pub fn requests_for_user(deps: &ServiceDependencies, card_number: &CardNumber) -> Result<Vec<ItemId>> {
    if deps.registry.get_user(card_number).is_none() {
        return Err(LendingError::user_not_found(card_number));
    }
    Ok(deps.reservations.list_for_user(card_number))
}
