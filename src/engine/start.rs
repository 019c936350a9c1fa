//! Effective start date resolution ("adaptive smart start")
//!
//! Determines the calendar day on which rollover accounting begins for a
//! month, so a user who starts tracking mid-month is not credited with
//! "unspent" budget for days before they began.

use chrono::NaiveDate;

use crate::models::{MonthKey, Transaction};

/// Resolve the day rollover accounting starts for `month`
///
/// - Transactions exist in the month: the calendar day of the earliest one.
///   Only the date component matters; same-day ties need no tie-break.
/// - No transactions and `month` is today's month: today.
/// - Otherwise (past or future month with no transactions): the 1st.
///
/// The monthly ledger and the dashboard adjustment both anchor on this one
/// rule, which keeps the two views consistent.
pub fn effective_start_date(
    month: MonthKey,
    transactions: &[Transaction],
    today: NaiveDate,
) -> NaiveDate {
    let earliest = transactions
        .iter()
        .filter(|t| month.contains(t.day()))
        .map(|t| t.day())
        .min();

    match earliest {
        Some(day) => day,
        None if month.contains(today) => today,
        None => month.first_day(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(12, 0, 0).unwrap()
    }

    fn tx(y: i32, m: u32, d: u32, cents: i64) -> Transaction {
        Transaction::new(noon(y, m, d), Money::from_cents(cents), "test-cat")
    }

    #[test]
    fn test_earliest_transaction_wins() {
        let feb = MonthKey::new(2026, 2).unwrap();
        let txns = vec![
            tx(2026, 2, 18, 500),
            tx(2026, 2, 9, 300),
            tx(2026, 2, 24, 100),
            // Neighboring months must not influence the result
            tx(2026, 1, 2, 900),
            tx(2026, 3, 1, 900),
        ];

        let start = effective_start_date(feb, &txns, date(2026, 2, 20));
        assert_eq!(start, date(2026, 2, 9));
    }

    #[test]
    fn test_current_month_without_transactions_starts_today() {
        let feb = MonthKey::new(2026, 2).unwrap();
        let start = effective_start_date(feb, &[], date(2026, 2, 15));
        assert_eq!(start, date(2026, 2, 15));
    }

    #[test]
    fn test_other_month_without_transactions_starts_on_the_first() {
        let jan = MonthKey::new(2026, 1).unwrap();
        // Past month, viewed from February
        let start = effective_start_date(jan, &[], date(2026, 2, 15));
        assert_eq!(start, date(2026, 1, 1));

        // Future month too
        let apr = MonthKey::new(2026, 4).unwrap();
        let start = effective_start_date(apr, &[], date(2026, 2, 15));
        assert_eq!(start, date(2026, 4, 1));
    }

    #[test]
    fn test_same_day_transactions_need_no_tie_break() {
        let feb = MonthKey::new(2026, 2).unwrap();
        let mut early = tx(2026, 2, 9, 500);
        early.date = date(2026, 2, 9).and_hms_opt(8, 0, 0).unwrap();
        let late = tx(2026, 2, 9, 300);

        let start = effective_start_date(feb, &[late, early], date(2026, 2, 20));
        assert_eq!(start, date(2026, 2, 9));
    }
}
