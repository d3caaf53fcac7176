use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CheckOutError, ItemCategory, ItemId, Money, RenewError};

/// 資料の貸出状態
///
/// 「貸出可能 ⇔ 返却期限なし」を型で保証する。
/// 返却期限は貸出中状態にのみ存在する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemState {
    Available,
    CheckedOut { due_date: NaiveDate },
}

/// 資料 - 貸出の単位
///
/// 識別子・書誌情報・延長可否・弁償額は生成後に変わらない。
/// 変化するのは貸出状態のみ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    title: String,
    creator: String,
    category: ItemCategory,
    renewable: bool,
    value: Money,
    state: ItemState,
}

impl Item {
    /// 図書を生成する。延長可否は生成時に指定する。
    pub fn book(
        id: ItemId,
        title: impl Into<String>,
        creator: impl Into<String>,
        renewable: bool,
        value: Money,
    ) -> Self {
        Self::new(id, title, creator, ItemCategory::Book, renewable, value)
    }

    /// 視聴覚資料を生成する（常に延長可）
    pub fn audio_video(
        id: ItemId,
        title: impl Into<String>,
        creator: impl Into<String>,
        value: Money,
    ) -> Self {
        Self::new(id, title, creator, ItemCategory::AudioVideo, true, value)
    }

    /// 参考図書を生成する（常に延長不可）
    pub fn reference(
        id: ItemId,
        title: impl Into<String>,
        creator: impl Into<String>,
        value: Money,
    ) -> Self {
        Self::new(id, title, creator, ItemCategory::Reference, false, value)
    }

    fn new(
        id: ItemId,
        title: impl Into<String>,
        creator: impl Into<String>,
        category: ItemCategory,
        renewable: bool,
        value: Money,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            creator: creator.into(),
            category,
            renewable,
            value,
            state: ItemState::Available,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn is_renewable(&self) -> bool {
        self.renewable
    }

    pub fn value(&self) -> Money {
        self.value
    }

    pub fn state(&self) -> ItemState {
        self.state
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, ItemState::Available)
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        match self.state {
            ItemState::Available => None,
            ItemState::CheckedOut { due_date } => Some(due_date),
        }
    }

    /// 貸し出す
    ///
    /// 返却期限は `on + loan_period_days`。
    ///
    /// # エラー
    /// - 既に貸出中の場合は`CheckOutError::ItemUnavailable`を返す
    /// - 貸出期間が1日未満、または返却期限が日付の範囲を超える場合は
    ///   `CheckOutError::InvalidLoanPeriod`を返す（状態は変わらない）
    pub fn check_out(
        &mut self,
        on: NaiveDate,
        loan_period_days: i64,
    ) -> Result<NaiveDate, CheckOutError> {
        if !self.is_available() {
            return Err(CheckOutError::ItemUnavailable);
        }
        let due_date =
            due_date_after(on, loan_period_days).ok_or(CheckOutError::InvalidLoanPeriod)?;
        self.state = ItemState::CheckedOut { due_date };
        Ok(due_date)
    }

    /// 返却する
    ///
    /// 貸出中でなくても受け付ける。戻り値は貸出中だったかどうか。
    pub fn return_item(&mut self) -> bool {
        let was_checked_out = !self.is_available();
        self.state = ItemState::Available;
        was_checked_out
    }

    /// 延長する
    ///
    /// 新しい返却期限は元の期限ではなく `on` から数える。
    /// 貸出中でない資料は状態を変えず`Ok(None)`を返す。
    /// 返却期限を計算できない場合は元の期限のまま`RenewError::InvalidLoanPeriod`を返す。
    pub fn renew(
        &mut self,
        on: NaiveDate,
        loan_period_days: i64,
    ) -> Result<Option<NaiveDate>, RenewError> {
        if !self.renewable {
            return Err(RenewError::NotRenewable);
        }
        match self.state {
            ItemState::Available => Ok(None),
            ItemState::CheckedOut { .. } => {
                let due_date =
                    due_date_after(on, loan_period_days).ok_or(RenewError::InvalidLoanPeriod)?;
                self.state = ItemState::CheckedOut { due_date };
                Ok(Some(due_date))
            }
        }
    }
}

/// `on`から`loan_period_days`日後。1日未満や日付の範囲外は`None`。
fn due_date_after(on: NaiveDate, loan_period_days: i64) -> Option<NaiveDate> {
    let days = u64::try_from(loan_period_days).ok().filter(|days| *days >= 1)?;
    on.checked_add_days(Days::new(days))
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | value {}",
            self.id,
            self.title,
            self.creator,
            self.category.as_str(),
            self.value
        )?;
        match self.state {
            ItemState::Available => write!(f, " | available"),
            ItemState::CheckedOut { due_date } => write!(f, " | due {}", due_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_book(renewable: bool) -> Item {
        Item::book(
            ItemId::new("BK001"),
            "Book1",
            "John Doe",
            renewable,
            Money::new(5, 0),
        )
    }

    #[test]
    fn test_new_item_is_available_without_due_date() {
        let item = sample_book(true);
        assert!(item.is_available());
        assert_eq!(item.due_date(), None);
    }

    #[test]
    fn test_check_out_sets_due_date() {
        let mut item = sample_book(true);
        let today = date(2024, 3, 1);

        let due = item.check_out(today, 14).unwrap();

        assert_eq!(due, date(2024, 3, 15));
        assert!(!item.is_available());
        assert_eq!(item.due_date(), Some(due));
    }

    #[test]
    fn test_check_out_fails_when_already_checked_out() {
        let mut item = sample_book(true);
        let today = date(2024, 3, 1);
        item.check_out(today, 14).unwrap();

        let result = item.check_out(today, 14);
        assert_eq!(result.unwrap_err(), CheckOutError::ItemUnavailable);
        // 元の期限は変わらない
        assert_eq!(item.due_date(), Some(date(2024, 3, 15)));
    }

    #[test]
    fn test_check_out_rejects_out_of_range_loan_period() {
        let mut item = sample_book(true);
        let today = date(2024, 6, 1);

        assert_eq!(
            item.check_out(today, 1_000_000_000).unwrap_err(),
            CheckOutError::InvalidLoanPeriod
        );
        assert_eq!(
            item.check_out(today, -30).unwrap_err(),
            CheckOutError::InvalidLoanPeriod
        );
        assert_eq!(
            item.check_out(today, 0).unwrap_err(),
            CheckOutError::InvalidLoanPeriod
        );
        assert!(item.is_available());
        assert_eq!(item.due_date(), None);
    }

    #[test]
    fn test_renew_with_invalid_loan_period_keeps_due_date() {
        let mut item = sample_book(true);
        item.check_out(date(2024, 3, 1), 14).unwrap();

        let result = item.renew(date(2024, 3, 10), i64::MAX);
        assert_eq!(result.unwrap_err(), RenewError::InvalidLoanPeriod);
        assert_eq!(item.due_date(), Some(date(2024, 3, 15)));
    }

    #[test]
    fn test_return_clears_due_date() {
        let mut item = sample_book(true);
        item.check_out(date(2024, 3, 1), 14).unwrap();

        assert!(item.return_item());
        assert!(item.is_available());
        assert_eq!(item.due_date(), None);
    }

    #[test]
    fn test_return_of_available_item_is_noop() {
        let mut item = sample_book(true);
        assert!(!item.return_item());
        assert_eq!(item.state(), ItemState::Available);
    }

    #[test]
    fn test_renew_counts_from_renewal_date() {
        let mut item = sample_book(true);
        item.check_out(date(2024, 3, 1), 14).unwrap();

        // 元の期限（3/15）ではなく延長日（3/10）から14日
        let due = item.renew(date(2024, 3, 10), 14).unwrap();
        assert_eq!(due, Some(date(2024, 3, 24)));
        assert_eq!(item.due_date(), Some(date(2024, 3, 24)));
    }

    #[test]
    fn test_renew_fails_when_not_renewable() {
        let mut item = sample_book(false);
        item.check_out(date(2024, 3, 1), 14).unwrap();

        let result = item.renew(date(2024, 3, 10), 14);
        assert_eq!(result.unwrap_err(), RenewError::NotRenewable);
        assert_eq!(item.due_date(), Some(date(2024, 3, 15)));
    }

    #[test]
    fn test_renew_available_item_keeps_it_available() {
        let mut item = sample_book(true);
        let result = item.renew(date(2024, 3, 10), 14).unwrap();
        assert_eq!(result, None);
        assert!(item.is_available());
        assert_eq!(item.due_date(), None);
    }

    #[test]
    fn test_category_policies() {
        let av = Item::audio_video(ItemId::new("AV001"), "AV1", "John Doe", Money::new(15, 0));
        let rb = Item::reference(ItemId::new("RB001"), "Ref1", "John Doe", Money::new(2, 0));
        assert!(av.is_renewable());
        assert!(!rb.is_renewable());
        assert_eq!(rb.category(), ItemCategory::Reference);
    }

    #[test]
    fn test_display_summary() {
        let mut item = sample_book(true);
        assert_eq!(
            item.to_string(),
            "BK001 | Book1 | John Doe | book | value $5.00 | available"
        );
        item.check_out(date(2024, 3, 1), 14).unwrap();
        assert!(item.to_string().ends_with("due 2024-03-15"));
    }
}
