use crate::application::lending::LendingError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub struct ApiError(LendingError);

impl From<LendingError> for ApiError {
    fn from(err: LendingError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self.0 {
            // 404 Not Found - 利用者または資料が存在しない
            LendingError::EntityNotFound(_) => (StatusCode::NOT_FOUND, "ENTITY_NOT_FOUND"),

            // 422 Unprocessable Entity - ビジネスルール違反
            LendingError::ItemUnavailable(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "ITEM_UNAVAILABLE")
            }
            LendingError::CheckoutLimitReached { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "CHECKOUT_LIMIT_REACHED")
            }
            LendingError::OutstandingRequestExists(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "OUTSTANDING_REQUEST_EXISTS")
            }
            LendingError::NotRenewable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "NOT_RENEWABLE"),
            LendingError::RequestUnnecessary(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "REQUEST_UNNECESSARY")
            }

            // 409 Conflict - 登録済みの利用者
            LendingError::DuplicateUser => (StatusCode::CONFLICT, "DUPLICATE_USER"),

            // 500 Internal Server Error - 貸出ポリシーの設定不備
            LendingError::InvalidLoanPeriod(days) => {
                tracing::error!(loan_period_days = *days, "Invalid loan period configured");
                let body = Json(ErrorResponse::new(
                    "INTERNAL_ERROR",
                    "An unexpected error occurred",
                ));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }

            // 500 Internal Server Error - 内部状態の破損
            // 詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            LendingError::Inconsistency(msg) => {
                tracing::error!(detail = %msg, "Internal inconsistency");
                let body = Json(ErrorResponse::new(
                    "INTERNAL_ERROR",
                    "An unexpected error occurred",
                ));
                return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
            }
        };

        let body = Json(ErrorResponse::new(error_type, self.0.to_string()));
        (status, body).into_response()
    }
}
