/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutError {
    /// 既に貸出中
    ItemUnavailable,
    /// 同時貸出上限に達している
    CheckoutLimitReached,
    /// 貸出期間から返却期限を計算できない
    InvalidLoanPeriod,
}

/// 延長のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenewError {
    /// 延長不可の資料
    NotRenewable,
    /// 貸出期間から返却期限を計算できない
    InvalidLoanPeriod,
}

/// 予約のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// 貸出可能な資料は予約する必要がない
    RequestUnnecessary,
}

/// 貸出ポリシーのエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// 貸出期間が1日から上限日数の範囲外
    LoanPeriodOutOfRange(i64),
    /// 同時貸出上限が0
    ZeroCheckoutLimit,
}
