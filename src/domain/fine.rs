use chrono::NaiveDate;

use super::{Item, Money};

/// 純粋関数：資料1点あたりの延滞料金
///
/// ビジネスルール：
/// - 返却期限が `today` より前の場合のみ延滞
/// - 延滞料金 = 1日あたり料金 × 延滞日数
/// - 資料の弁償額を上限とする
///
/// 貸出中でない資料は0。
pub fn item_fine(item: &Item, today: NaiveDate, fine_per_day: Money) -> Money {
    match item.due_date() {
        Some(due_date) if due_date < today => {
            let overdue_days = (today - due_date).num_days().unsigned_abs();
            fine_per_day.times(overdue_days).min(item.value())
        }
        _ => Money::ZERO,
    }
}

/// 純粋関数：保持中資料の延滞料金合計
///
/// 上限は資料ごとに適用し、合計には上限を設けない。
pub fn calculate_fines<'a>(
    held_items: impl IntoIterator<Item = &'a Item>,
    today: NaiveDate,
    fine_per_day: Money,
) -> Money {
    held_items
        .into_iter()
        .map(|item| item_fine(item, today, fine_per_day))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemId;
    use chrono::Duration;

    const ZERO_RATE: Money = Money::ZERO;

    fn per_day() -> Money {
        Money::from_cents(10)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// `today` の `overdue_days` 日前が返却期限になるよう貸し出した資料
    fn overdue_item(id: &str, value: Money, today: NaiveDate, overdue_days: i64) -> Item {
        let mut item = Item::book(ItemId::new(id), "Title", "Author", true, value);
        item.check_out(today - Duration::days(14 + overdue_days), 14)
            .unwrap();
        item
    }

    #[test]
    fn test_item_fine_five_days_overdue() {
        let today = date(2024, 6, 1);
        let item = overdue_item("RB001", Money::new(2, 0), today, 5);
        assert_eq!(item_fine(&item, today, per_day()), Money::from_cents(50));
    }

    #[test]
    fn test_item_fine_capped_at_value() {
        let today = date(2024, 6, 1);
        let item = overdue_item("RB001", Money::new(2, 0), today, 25);
        assert_eq!(item_fine(&item, today, per_day()), Money::new(2, 0));
    }

    #[test]
    fn test_item_due_today_is_not_overdue() {
        let today = date(2024, 6, 1);
        let item = overdue_item("BK001", Money::new(5, 0), today, 0);
        assert_eq!(item.due_date(), Some(today));
        assert_eq!(item_fine(&item, today, per_day()), Money::ZERO);
    }

    #[test]
    fn test_available_item_has_no_fine() {
        let item = Item::book(ItemId::new("BK001"), "T", "A", true, Money::new(5, 0));
        assert_eq!(item_fine(&item, date(2024, 6, 1), per_day()), Money::ZERO);
    }

    #[test]
    fn test_calculate_fines_sums_without_aggregate_cap() {
        let today = date(2024, 6, 1);
        let items = [
            overdue_item("RB001", Money::new(2, 0), today, 5),   // $0.50
            overdue_item("RB002", Money::new(2, 0), today, 25),  // $2.00（上限）
            overdue_item("BK003", Money::new(5, 0), today, -3),  // 期限前
            overdue_item("BK005", Money::new(9, 50), today, 40), // $4.00
        ];

        let total = calculate_fines(&items, today, per_day());
        assert_eq!(total, Money::from_cents(650));
    }

    #[test]
    fn test_calculate_fines_zero_rate() {
        let today = date(2024, 6, 1);
        let items = [overdue_item("RB001", Money::new(2, 0), today, 5)];
        assert_eq!(calculate_fines(&items, today, ZERO_RATE), Money::ZERO);
    }
}
