use serde::{Deserialize, Serialize};
use std::fmt;

use super::PolicyError;

/// 資料ID - カタログ上の資料を一意に識別する（例: "BK001"）
///
/// 大文字小文字を区別した完全一致で比較する。中身は解釈しない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 利用者カード番号 - 利用者を一意に識別する（例: "1000"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 利用者向け表示ID（ゼロ埋め4桁、例: "0001"）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 金額（セント単位）
///
/// 不変条件：負の値を持たない（型で保証）。
/// 浮動小数点の丸め誤差を避けるため整数で保持する。
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// ドルとセントから生成する（例: `Money::new(2, 50)` は $2.50）
    pub fn new(dollars: u64, cents: u64) -> Self {
        Self(dollars.saturating_mul(100).saturating_add(cents))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// 日数分の金額（上限で飽和する）
    pub fn times(self, count: u64) -> Self {
        Self(self.0.saturating_mul(count))
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// 資料の種別
///
/// 種別が影響するのは生成時の延長可否フラグのみで、
/// 状態遷移や貸出期間の計算には関与しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Book,
    AudioVideo,
    Reference,
}

impl ItemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Book => "book",
            ItemCategory::AudioVideo => "audio_video",
            ItemCategory::Reference => "reference",
        }
    }
}

/// 貸出期間のデフォルト（日数）
pub const DEFAULT_LOAN_PERIOD_DAYS: i64 = 14;

/// 貸出期間の上限（日数）
pub const MAX_LOAN_PERIOD_DAYS: i64 = 365;

/// 利用者1人あたりの同時貸出上限のデフォルト
pub const DEFAULT_CHECKOUT_LIMIT: usize = 5;

/// 1日あたりの延滞料金（セント）
pub const FINE_PER_DAY_CENTS: u64 = 10;

/// 貸出ポリシー
///
/// 貸出期間と延長期間は同じ値を使う。資料の種別によらず一律。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LendingPolicy {
    pub loan_period_days: i64,
    pub checkout_limit: usize,
    pub fine_per_day: Money,
}

impl LendingPolicy {
    /// 検証済みのポリシーを生成する
    ///
    /// # エラー
    /// - 貸出期間が1日未満または`MAX_LOAN_PERIOD_DAYS`を超える場合
    /// - 同時貸出上限が0の場合
    pub fn new(
        loan_period_days: i64,
        checkout_limit: usize,
        fine_per_day: Money,
    ) -> Result<Self, PolicyError> {
        if !(1..=MAX_LOAN_PERIOD_DAYS).contains(&loan_period_days) {
            return Err(PolicyError::LoanPeriodOutOfRange(loan_period_days));
        }
        if checkout_limit == 0 {
            return Err(PolicyError::ZeroCheckoutLimit);
        }
        Ok(Self {
            loan_period_days,
            checkout_limit,
            fine_per_day,
        })
    }
}

impl Default for LendingPolicy {
    fn default() -> Self {
        Self {
            loan_period_days: DEFAULT_LOAN_PERIOD_DAYS,
            checkout_limit: DEFAULT_CHECKOUT_LIMIT,
            fine_per_day: Money::from_cents(FINE_PER_DAY_CENTS),
        }
    }
}
