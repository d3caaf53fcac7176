use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, check_out_item, fulfill_requests, get_fines, list_available_items, list_held_items,
    list_user_requests, register_user, renew_item, request_item, return_item,
};

/// 貸出管理APIのルーターを作成する
///
/// Command endpoints:
/// - POST /users - 利用者登録
/// - POST /checkouts, /returns, /renewals, /requests - 貸出状態の遷移
/// - POST /items/:id/fulfill - 予約の一括処理
///
/// Query endpoints:
/// - GET /items/available
/// - GET /users/:card/items, /users/:card/requests, /users/:card/fines
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/users", post(register_user))
        .route("/users/:card/items", get(list_held_items))
        .route("/users/:card/requests", get(list_user_requests))
        .route("/users/:card/fines", get(get_fines))
        .route("/items/available", get(list_available_items))
        .route("/items/:id/fulfill", post(fulfill_requests))
        .route("/checkouts", post(check_out_item))
        .route("/returns", post(return_item))
        .route("/renewals", post(renew_item))
        .route("/requests", post(request_item))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
