use crate::domain::{commands::*, reservation, *};
use crate::ports::*;

use super::errors::{LendingError, Result};

/// サービスの依存関係
///
/// 関数型DDDの原則に従い、データ構造として定義。
/// 振る舞いは持たず、ユースケース関数に明示的に渡す。
///
/// 予約キューもプロセス全体のグローバル状態ではなく、
/// ここに所有される1コンポーネントとして扱う。
pub struct ServiceDependencies {
    pub catalog: Box<dyn Catalog>,
    pub registry: Box<dyn Registry>,
    pub card_numbers: Box<dyn CardNumberGenerator>,
    pub reservations: ReservationQueue,
    pub policy: LendingPolicy,
}

/// 利用者と資料を変更可能な参照として同時に取得するヘルパー関数
///
/// 利用者を先に確認するため、両方存在しない場合は利用者のエラーを返す。
fn resolve_mut<'a>(
    registry: &'a mut dyn Registry,
    catalog: &'a mut dyn Catalog,
    card_number: &CardNumber,
    item_id: &ItemId,
) -> Result<(&'a mut User, &'a mut Item)> {
    let user = registry
        .get_user_mut(card_number)
        .ok_or_else(|| LendingError::user_not_found(card_number))?;
    let item = catalog
        .get_item_mut(item_id)
        .ok_or_else(|| LendingError::item_not_found(item_id))?;
    Ok((user, item))
}

/// 資料を貸し出す
///
/// ビジネスルール（すべて満たす必要がある）：
/// - 利用者と資料が存在すること
/// - 資料に未処理の予約がないこと（予約者本人であっても不可）
/// - 資料が貸出可能であること
/// - 利用者の保持数が上限未満であること
///
/// 予約による拒否は他の理由と区別できるよう、存在確認の直後に判定する。
/// すべての判定を終えてから資料、利用者の順に状態を変更するため、
/// 失敗時にはどちらも変更されない。
pub fn check_out_item(
    deps: &mut ServiceDependencies,
    cmd: CheckOutItem,
) -> Result<ItemCheckedOut> {
    match apply_check_out(deps, &cmd) {
        Ok(event) => {
            tracing::info!(
                card_number = %event.card_number,
                item_id = %event.item_id,
                due_date = %event.due_date,
                "Item checked out"
            );
            Ok(event)
        }
        Err(e) => {
            tracing::warn!(
                card_number = %cmd.card_number,
                item_id = %cmd.item_id,
                error = %e,
                "Checkout refused"
            );
            Err(e)
        }
    }
}

fn apply_check_out(deps: &mut ServiceDependencies, cmd: &CheckOutItem) -> Result<ItemCheckedOut> {
    let policy = deps.policy;
    let (user, item) = resolve_mut(
        &mut *deps.registry,
        &mut *deps.catalog,
        &cmd.card_number,
        &cmd.item_id,
    )?;

    if deps.reservations.has_outstanding(&cmd.item_id) {
        return Err(LendingError::OutstandingRequestExists(cmd.item_id.clone()));
    }
    if !item.is_available() {
        return Err(LendingError::ItemUnavailable(cmd.item_id.clone()));
    }

    if !user.can_check_out(policy.checkout_limit) {
        return Err(LendingError::CheckoutLimitReached {
            card_number: cmd.card_number.clone(),
            limit: policy.checkout_limit,
        });
    }

    let to_error = |e| LendingError::from_check_out(e, &cmd.card_number, &cmd.item_id, policy);

    let due_date = item
        .check_out(cmd.checked_out_on, policy.loan_period_days)
        .map_err(to_error)?;
    user.check_out(cmd.item_id.clone(), policy.checkout_limit)
        .map_err(to_error)?;

    Ok(ItemCheckedOut {
        item_id: cmd.item_id.clone(),
        card_number: cmd.card_number.clone(),
        checked_out_on: cmd.checked_out_on,
        due_date,
    })
}

/// 資料を返却する
///
/// ビジネスルール：
/// - 利用者と資料が存在すること
/// - 利用者が実際に保持しているかは確認しない
/// - 貸出中でない資料の返却も受け付け、何も変更しない
pub fn return_item(deps: &mut ServiceDependencies, cmd: ReturnItem) -> Result<ItemReturned> {
    let (user, item) = resolve_mut(
        &mut *deps.registry,
        &mut *deps.catalog,
        &cmd.card_number,
        &cmd.item_id,
    )
    .inspect_err(|e| {
        tracing::warn!(
            card_number = %cmd.card_number,
            item_id = %cmd.item_id,
            error = %e,
            "Return refused"
        );
    })?;

    let was_held_by_user = user.return_item(&cmd.item_id);
    let was_checked_out = item.return_item();

    if !was_held_by_user {
        tracing::warn!(
            card_number = %cmd.card_number,
            item_id = %cmd.item_id,
            was_checked_out,
            "Item returned by a user who did not hold it"
        );
    }
    tracing::info!(card_number = %cmd.card_number, item_id = %cmd.item_id, "Item returned");

    Ok(ItemReturned {
        item_id: cmd.item_id,
        card_number: cmd.card_number,
        was_checked_out,
        was_held_by_user,
    })
}

/// 貸出を延長する
///
/// ビジネスルール：
/// - 利用者と資料が存在すること
/// - 資料が延長可能であること
/// - 資料に未処理の予約がないこと
/// - 新しい返却期限は延長日 + 貸出期間（元の期限からではない）
///
/// 利用者がその資料を保持しているかは確認しない。
pub fn renew_item(deps: &mut ServiceDependencies, cmd: RenewItem) -> Result<ItemRenewed> {
    match apply_renew(deps, &cmd) {
        Ok(event) => {
            match event.new_due_date {
                Some(due_date) => tracing::info!(
                    card_number = %cmd.card_number,
                    item_id = %cmd.item_id,
                    %due_date,
                    "Item renewed"
                ),
                None => tracing::warn!(
                    card_number = %cmd.card_number,
                    item_id = %cmd.item_id,
                    "Renewed an item that is not checked out"
                ),
            }
            Ok(event)
        }
        Err(e) => {
            tracing::warn!(
                card_number = %cmd.card_number,
                item_id = %cmd.item_id,
                error = %e,
                "Renewal refused"
            );
            Err(e)
        }
    }
}

fn apply_renew(deps: &mut ServiceDependencies, cmd: &RenewItem) -> Result<ItemRenewed> {
    let loan_period_days = deps.policy.loan_period_days;
    let (_, item) = resolve_mut(
        &mut *deps.registry,
        &mut *deps.catalog,
        &cmd.card_number,
        &cmd.item_id,
    )?;

    if !item.is_renewable() {
        return Err(LendingError::NotRenewable(cmd.item_id.clone()));
    }
    if deps.reservations.has_outstanding(&cmd.item_id) {
        return Err(LendingError::OutstandingRequestExists(cmd.item_id.clone()));
    }

    let new_due_date = item
        .renew(cmd.renewed_on, loan_period_days)
        .map_err(|e| LendingError::from_renew(e, &cmd.item_id, loan_period_days))?;

    Ok(ItemRenewed {
        item_id: cmd.item_id.clone(),
        card_number: cmd.card_number.clone(),
        renewed_on: cmd.renewed_on,
        new_due_date,
    })
}

/// 資料を予約する
///
/// ビジネスルール：
/// - 利用者と資料が存在すること
/// - 資料が貸出中であること
/// - 重複予約は妨げない
pub fn request_item(deps: &mut ServiceDependencies, cmd: RequestItem) -> Result<ItemRequested> {
    match apply_request(deps, &cmd) {
        Ok(()) => {
            tracing::info!(card_number = %cmd.card_number, item_id = %cmd.item_id, "Item requested");
            Ok(ItemRequested {
                item_id: cmd.item_id,
                card_number: cmd.card_number,
            })
        }
        Err(e) => {
            tracing::warn!(
                card_number = %cmd.card_number,
                item_id = %cmd.item_id,
                error = %e,
                "Request refused"
            );
            Err(e)
        }
    }
}

fn apply_request(deps: &mut ServiceDependencies, cmd: &RequestItem) -> Result<()> {
    if deps.registry.get_user(&cmd.card_number).is_none() {
        return Err(LendingError::user_not_found(&cmd.card_number));
    }
    let item = deps
        .catalog
        .get_item(&cmd.item_id)
        .ok_or_else(|| LendingError::item_not_found(&cmd.item_id))?;

    reservation::request_item(&mut deps.reservations, item, cmd.card_number.clone())
        .map_err(|e| LendingError::from_request(e, &cmd.item_id))
}

/// 資料の予約をまとめて処理する
///
/// その資料に対する予約はすべて取り除かれる（先頭1件ではない）。
pub fn fulfill_requests(
    deps: &mut ServiceDependencies,
    item_id: &ItemId,
) -> Result<RequestsFulfilled> {
    if deps.catalog.get_item(item_id).is_none() {
        tracing::warn!(%item_id, "Fulfillment refused: item not found");
        return Err(LendingError::item_not_found(item_id));
    }

    let fulfilled_count = deps.reservations.fulfill_all(item_id);
    tracing::info!(%item_id, fulfilled_count, "Requests fulfilled");

    Ok(RequestsFulfilled {
        item_id: item_id.clone(),
        fulfilled_count,
    })
}
