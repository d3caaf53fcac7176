use crate::application::lending::{self, LendingError, ServiceDependencies};
use crate::domain::{
    CardNumber, ItemCheckedOut, ItemId, ItemRenewed, ItemRequested, ItemReturned,
    RequestsFulfilled, UserRegistered, commands::*,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::NaiveDate;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{
    error::ApiError,
    types::{FinesResponse, ItemResponse, LendingRequest, RegisterUserRequest, UserRequestsResponse},
};

// ============================================================================
// State
// ============================================================================

/// 操作日を返す時計
pub type Clock = fn() -> NaiveDate;

/// システム時計（ローカル日付）
pub fn system_clock() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// ハンドラー間で共有されるアプリケーション状態
///
/// 1操作の間は依存関係全体（資料・利用者・予約キュー）をロックする。
pub struct AppState {
    pub deps: Mutex<ServiceDependencies>,
    pub clock: Clock,
}

impl AppState {
    pub fn new(deps: ServiceDependencies) -> Self {
        Self {
            deps: Mutex::new(deps),
            clock: system_clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ServiceDependencies>, ApiError> {
        self.deps
            .lock()
            .map_err(|_| ApiError::from(LendingError::Inconsistency("state lock poisoned".into())))
    }

    fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}

// ============================================================================
// Command handlers (POST)
// ============================================================================

/// POST /users - 利用者を登録
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserRegistered>), ApiError> {
    let mut deps = state.lock()?;
    let event = lending::register_user(&mut deps, req.to_command())?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// POST /checkouts - 資料を貸し出す
///
/// 強制されるビジネスルール:
/// - 利用者と資料が存在すること
/// - 資料に未処理の予約がないこと
/// - 資料が貸出可能であること
/// - 利用者の保持数が上限未満であること
pub async fn check_out_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LendingRequest>,
) -> Result<(StatusCode, Json<ItemCheckedOut>), ApiError> {
    let cmd = CheckOutItem {
        card_number: req.card_number,
        item_id: req.item_id,
        checked_out_on: state.today(),
    };
    let mut deps = state.lock()?;
    let event = lending::check_out_item(&mut deps, cmd)?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// POST /returns - 資料を返却
///
/// 保持者の確認は行わない。貸出中でない資料の返却も200を返す。
pub async fn return_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LendingRequest>,
) -> Result<Json<ItemReturned>, ApiError> {
    let cmd = ReturnItem {
        card_number: req.card_number,
        item_id: req.item_id,
    };
    let mut deps = state.lock()?;
    let event = lending::return_item(&mut deps, cmd)?;
    Ok(Json(event))
}

/// POST /renewals - 貸出を延長
pub async fn renew_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LendingRequest>,
) -> Result<Json<ItemRenewed>, ApiError> {
    let cmd = RenewItem {
        card_number: req.card_number,
        item_id: req.item_id,
        renewed_on: state.today(),
    };
    let mut deps = state.lock()?;
    let event = lending::renew_item(&mut deps, cmd)?;
    Ok(Json(event))
}

/// POST /requests - 資料を予約
pub async fn request_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LendingRequest>,
) -> Result<(StatusCode, Json<ItemRequested>), ApiError> {
    let cmd = RequestItem {
        card_number: req.card_number,
        item_id: req.item_id,
    };
    let mut deps = state.lock()?;
    let event = lending::request_item(&mut deps, cmd)?;
    Ok((StatusCode::CREATED, Json(event)))
}

/// POST /items/:id/fulfill - 資料の予約をすべて処理済みにする
pub async fn fulfill_requests(
    State(state): State<Arc<AppState>>,
    Path(item_id): Path<String>,
) -> Result<Json<RequestsFulfilled>, ApiError> {
    let mut deps = state.lock()?;
    let event = lending::fulfill_requests(&mut deps, &ItemId::new(item_id))?;
    Ok(Json(event))
}

// ============================================================================
// Query handlers (GET)
// ============================================================================

/// GET /items/available - 貸出可能な資料の一覧
///
/// 未処理の予約がある資料は含めない。
pub async fn list_available_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let deps = state.lock()?;
    let items: Vec<ItemResponse> = lending::available_items(&deps)
        .into_iter()
        .map(ItemResponse::from)
        .collect();
    Ok(Json(items))
}

/// GET /users/:card/items - 利用者が保持中の資料
pub async fn list_held_items(
    State(state): State<Arc<AppState>>,
    Path(card_number): Path<String>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let deps = state.lock()?;
    let items: Vec<ItemResponse> = lending::held_items(&deps, &CardNumber::new(card_number))?
        .into_iter()
        .map(ItemResponse::from)
        .collect();
    Ok(Json(items))
}

/// GET /users/:card/requests - 利用者の予約一覧
pub async fn list_user_requests(
    State(state): State<Arc<AppState>>,
    Path(card_number): Path<String>,
) -> Result<Json<UserRequestsResponse>, ApiError> {
    let card_number = CardNumber::new(card_number);
    let deps = state.lock()?;
    let item_ids = lending::requests_for_user(&deps, &card_number)?;
    Ok(Json(UserRequestsResponse {
        card_number,
        item_ids,
    }))
}

/// GET /users/:card/fines - 延滞料金の合計
///
/// 利用者が存在しない場合は0ではなく404を返す。
pub async fn get_fines(
    State(state): State<Arc<AppState>>,
    Path(card_number): Path<String>,
) -> Result<Json<FinesResponse>, ApiError> {
    let card_number = CardNumber::new(card_number);
    let today = state.today();
    let deps = state.lock()?;
    let total = lending::calculate_fines(&deps, &card_number, today)?;
    Ok(Json(FinesResponse::new(card_number, today, total)))
}
