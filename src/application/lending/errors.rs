use std::fmt;
use thiserror::Error;

use crate::domain::{CardNumber, CheckOutError, ItemId, LendingPolicy, RenewError, RequestError};

/// 見つからなかったエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    User(CardNumber),
    Item(ItemId),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::User(card_number) => write!(f, "User {}", card_number),
            Entity::Item(item_id) => write!(f, "Item {}", item_id),
        }
    }
}

/// 貸出管理アプリケーション層のエラー
///
/// いずれも呼び出し側で回復可能。`Inconsistency`のみ内部状態の破損を表す。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// 利用者または資料が存在しない
    #[error("{0} not found")]
    EntityNotFound(Entity),

    /// 資料が貸出中
    #[error("Item {0} is not available")]
    ItemUnavailable(ItemId),

    /// 同時貸出上限に達している
    #[error("Checkout limit reached (max {limit} items)")]
    CheckoutLimitReached { card_number: CardNumber, limit: usize },

    /// 未処理の予約がある
    #[error("Item {0} has an outstanding request")]
    OutstandingRequestExists(ItemId),

    /// 延長不可の資料
    #[error("Item {0} cannot be renewed")]
    NotRenewable(ItemId),

    /// 貸出可能な資料への予約
    #[error("Item {0} is available and does not need to be requested")]
    RequestUnnecessary(ItemId),

    /// 同じ氏名・住所・電話番号の利用者が既に存在する
    #[error("A user with the same details already exists")]
    DuplicateUser,

    /// 設定された貸出期間では返却期限を計算できない
    #[error("Loan period of {0} days cannot produce a due date")]
    InvalidLoanPeriod(i64),

    /// 利用者の保持リストとカタログの不整合
    #[error("Internal inconsistency: {0}")]
    Inconsistency(String),
}

impl LendingError {
    pub(super) fn user_not_found(card_number: &CardNumber) -> Self {
        LendingError::EntityNotFound(Entity::User(card_number.clone()))
    }

    pub(super) fn item_not_found(item_id: &ItemId) -> Self {
        LendingError::EntityNotFound(Entity::Item(item_id.clone()))
    }

    pub(super) fn from_check_out(
        err: CheckOutError,
        card_number: &CardNumber,
        item_id: &ItemId,
        policy: LendingPolicy,
    ) -> Self {
        match err {
            CheckOutError::ItemUnavailable => LendingError::ItemUnavailable(item_id.clone()),
            CheckOutError::CheckoutLimitReached => LendingError::CheckoutLimitReached {
                card_number: card_number.clone(),
                limit: policy.checkout_limit,
            },
            CheckOutError::InvalidLoanPeriod => {
                LendingError::InvalidLoanPeriod(policy.loan_period_days)
            }
        }
    }

    pub(super) fn from_renew(err: RenewError, item_id: &ItemId, loan_period_days: i64) -> Self {
        match err {
            RenewError::NotRenewable => LendingError::NotRenewable(item_id.clone()),
            RenewError::InvalidLoanPeriod => LendingError::InvalidLoanPeriod(loan_period_days),
        }
    }

    pub(super) fn from_request(err: RequestError, item_id: &ItemId) -> Self {
        match err {
            RequestError::RequestUnnecessary => LendingError::RequestUnnecessary(item_id.clone()),
        }
    }
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LendingError>;
