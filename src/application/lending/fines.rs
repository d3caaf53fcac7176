use chrono::NaiveDate;

use crate::domain::{CardNumber, Item, Money, fine};

use super::errors::{LendingError, Result};
use super::lending_service::ServiceDependencies;

/// 利用者が保持中の資料を解決するヘルパー関数
///
/// 保持リストにあるのにカタログに存在しない資料は内部状態の破損とみなす。
pub(super) fn resolve_held_items<'a>(
    deps: &'a ServiceDependencies,
    card_number: &CardNumber,
) -> Result<Vec<&'a Item>> {
    let user = deps
        .registry
        .get_user(card_number)
        .ok_or_else(|| LendingError::user_not_found(card_number))?;

    user.checked_out_items()
        .iter()
        .map(|item_id| {
            deps.catalog.get_item(item_id).ok_or_else(|| {
                tracing::error!(%card_number, %item_id, "Held item missing from catalog");
                LendingError::Inconsistency(format!(
                    "user {} holds unknown item {}",
                    card_number, item_id
                ))
            })
        })
        .collect()
}

/// 延滞料金を計算する
///
/// 状態は一切変更しない。利用者が存在しない場合は0ではなく
/// `EntityNotFound`を返し、正当な0円と区別できるようにする。
///
/// # 引数
/// * `deps` - サービスの依存関係
/// * `card_number` - 利用者カード番号
/// * `today` - 計算基準日
pub fn calculate_fines(
    deps: &ServiceDependencies,
    card_number: &CardNumber,
    today: NaiveDate,
) -> Result<Money> {
    let held_items = resolve_held_items(deps, card_number)?;
    let total = fine::calculate_fines(held_items, today, deps.policy.fine_per_day);

    tracing::debug!(%card_number, %today, %total, "Fines calculated");
    Ok(total)
}
