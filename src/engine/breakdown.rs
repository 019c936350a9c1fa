//! Monthly breakdown: the per-day rollover ledger
//!
//! Produces one entry per calendar day of the target month showing the
//! cumulative rollover-based available budget alongside a single-day balance.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Money, MonthKey, Transaction};

use super::rollover::rollover_balance;
use super::start::effective_start_date;

/// One day of the rollover ledger
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyBreakdownEntry {
    /// The calendar day
    pub date: NaiveDate,

    /// Canonical "YYYY-MM-DD" key for the day
    pub key: String,

    /// Raw net amount for the day (expenses minus income), recorded even on
    /// skipped days
    pub spent: Money,

    /// Positive (expense) amounts only, ignoring income
    pub expenses_only: Money,

    /// Cumulative rollover balance through this day; negative means
    /// cumulative overspend
    pub available: f64,

    /// Single-day balance (the day's allowance minus the day's net spend),
    /// independent of rollover
    pub daily_balance: f64,

    /// True for days before the effective start date; skipped days carry
    /// zero balances and do not advance the cumulative spent total
    pub is_skipped: bool,
}

/// The full rollover ledger for one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyBreakdown {
    /// The month covered
    pub month: MonthKey,

    /// The resolved effective start date for rollover accounting
    pub start_date: NaiveDate,

    /// The effective monthly budget the ledger was computed against
    pub monthly_budget: Money,

    /// Daily allowance: `monthly_budget / days_in_month`
    pub avg_daily: f64,

    /// One entry per calendar day, ascending, no gaps
    pub daily_breakdown: Vec<DailyBreakdownEntry>,
}

/// Compute the rollover ledger for the month containing `target`
///
/// `transactions` may be in any order and may span any number of months;
/// only those falling in the target month participate. `today` anchors the
/// adaptive start for the current month and must be the local calendar day.
pub fn monthly_breakdown(
    target: NaiveDate,
    transactions: &[Transaction],
    monthly_budget: Money,
    today: NaiveDate,
) -> MonthlyBreakdown {
    let month = MonthKey::from_date(target);
    let days = month.days();

    let avg_daily = if monthly_budget.is_zero() {
        0.0
    } else {
        monthly_budget.to_major() / days as f64
    };

    // Per-day net and expense-only sums for the target month
    let mut net_by_day: HashMap<u32, Money> = HashMap::new();
    let mut expenses_by_day: HashMap<u32, Money> = HashMap::new();
    for txn in transactions.iter().filter(|t| month.contains(t.day())) {
        let day = txn.day().day();
        *net_by_day.entry(day).or_default() += txn.amount;
        if txn.amount.is_positive() {
            *expenses_by_day.entry(day).or_default() += txn.amount;
        }
    }

    let start_date = effective_start_date(month, transactions, today);

    let mut daily_breakdown = Vec::with_capacity(days as usize);
    let mut total_spent = Money::zero();

    for day in 1..=days {
        let date = month
            .date_of_day(day)
            .expect("day index is within the month length");
        let spent = net_by_day.get(&day).copied().unwrap_or_default();
        let expenses_only = expenses_by_day.get(&day).copied().unwrap_or_default();

        let entry = if date < start_date {
            DailyBreakdownEntry {
                date,
                key: date.format("%Y-%m-%d").to_string(),
                spent,
                expenses_only,
                available: 0.0,
                daily_balance: 0.0,
                is_skipped: true,
            }
        } else {
            let days_active = (date - start_date).num_days() as u32 + 1;
            total_spent += spent;

            DailyBreakdownEntry {
                date,
                key: date.format("%Y-%m-%d").to_string(),
                spent,
                expenses_only,
                available: rollover_balance(days_active, avg_daily, total_spent),
                daily_balance: avg_daily - spent.to_major(),
                is_skipped: false,
            }
        };

        daily_breakdown.push(entry);
    }

    MonthlyBreakdown {
        month,
        start_date,
        monthly_budget,
        avg_daily,
        daily_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(12, 0, 0).unwrap()
    }

    /// Transaction on a day within February 2026
    fn tx(day: u32, cents: i64) -> Transaction {
        Transaction::new(noon(2026, 2, day), Money::from_cents(cents), "test-cat")
    }

    const FEB_TARGET: (i32, u32, u32) = (2026, 2, 15);

    fn feb_breakdown(txns: &[Transaction], budget_cents: i64) -> MonthlyBreakdown {
        let (y, m, d) = FEB_TARGET;
        monthly_breakdown(
            date(y, m, d),
            txns,
            Money::from_cents(budget_cents),
            date(y, m, d),
        )
    }

    #[test]
    fn test_rollover_accumulates() {
        // 280 over 28 days = 10/day; spends [5, 3, 0] on days 1-3
        let txns = vec![tx(1, 500), tx(2, 300)];
        let result = feb_breakdown(&txns, 28000);
        let days = &result.daily_breakdown;

        assert_eq!(result.avg_daily, 10.0);

        assert_eq!(days[0].available, 5.0);
        assert_eq!(days[0].daily_balance, 5.0);

        assert_eq!(days[1].available, 12.0);
        assert_eq!(days[1].daily_balance, 7.0);

        assert_eq!(days[2].available, 22.0);
        assert_eq!(days[2].daily_balance, 10.0);
    }

    #[test]
    fn test_overspending_goes_negative() {
        let txns = vec![tx(1, 1500), tx(2, 500)];
        let result = feb_breakdown(&txns, 28000);
        let days = &result.daily_breakdown;

        assert_eq!(days[0].available, -5.0);
        assert_eq!(days[1].available, 0.0);
    }

    #[test]
    fn test_income_increases_available() {
        // expense 5 and income 20 on day 1 net to -15
        let txns = vec![tx(1, 500), tx(1, -2000)];
        let result = feb_breakdown(&txns, 28000);
        let days = &result.daily_breakdown;

        assert_eq!(days[0].spent, Money::from_cents(-1500));
        assert_eq!(days[0].expenses_only, Money::from_cents(500));
        assert_eq!(days[0].available, 25.0);
    }

    #[test]
    fn test_income_only_day_rolls_forward() {
        let txns = vec![tx(1, -5000)];
        let result = feb_breakdown(&txns, 28000);
        let days = &result.daily_breakdown;

        assert_eq!(days[0].available, 60.0);
        assert_eq!(days[0].expenses_only, Money::zero());
        assert_eq!(days[1].available, 70.0);
    }

    #[test]
    fn test_mixed_day_aggregates_by_sum() {
        let txns = vec![tx(1, 1000), tx(1, -300), tx(1, 500)];
        let result = feb_breakdown(&txns, 28000);
        let days = &result.daily_breakdown;

        assert_eq!(days[0].spent, Money::from_cents(1200));
        assert_eq!(days[0].expenses_only, Money::from_cents(1500));
        assert_eq!(days[0].available, -2.0);
    }

    #[test]
    fn test_no_transaction_past_month_counts_every_day() {
        // January 2026 viewed from February: start falls back to the 1st
        let result = monthly_breakdown(
            date(2026, 1, 15),
            &[],
            Money::from_cents(31000),
            date(2026, 2, 15),
        );
        let days = &result.daily_breakdown;

        assert_eq!(result.start_date, date(2026, 1, 1));
        assert_eq!(days.len(), 31);
        assert_eq!(days[0].available, 10.0);
        assert_eq!(days[29].available, 300.0);
        assert_eq!(days[30].available, 310.0);
        assert!(days.iter().all(|d| !d.is_skipped));
    }

    #[test]
    fn test_current_month_without_transactions_skips_days_before_today() {
        let result = feb_breakdown(&[], 28000);
        let days = &result.daily_breakdown;

        assert_eq!(result.start_date, date(2026, 2, 15));
        for day in &days[..14] {
            assert!(day.is_skipped);
            assert_eq!(day.available, 0.0);
            assert_eq!(day.daily_balance, 0.0);
        }
        // Today is day 1 of rollover accounting
        assert!(!days[14].is_skipped);
        assert_eq!(days[14].available, 10.0);
        assert_eq!(days[27].available, 140.0);
    }

    #[test]
    fn test_skip_flag_matches_start_date() {
        let txns = vec![tx(9, 500)];
        let result = feb_breakdown(&txns, 28000);

        assert_eq!(result.start_date, date(2026, 2, 9));
        for entry in &result.daily_breakdown {
            assert_eq!(entry.is_skipped, entry.date < result.start_date);
        }
    }

    #[test]
    fn test_zero_budget() {
        let txns = vec![tx(1, 500)];
        let result = feb_breakdown(&txns, 0);

        assert_eq!(result.avg_daily, 0.0);
        assert_eq!(result.daily_breakdown[0].available, -5.0);
        assert_eq!(result.daily_breakdown[27].available, -5.0);
    }

    #[test]
    fn test_avg_daily_is_exact_division() {
        let result = feb_breakdown(&[], 30000);
        assert!((result.avg_daily - 300.0 / 28.0).abs() < 1e-12);
    }

    #[test]
    fn test_every_day_emitted_for_each_month_length() {
        for (y, m, expected) in [(2026, 1, 31), (2026, 2, 28), (2028, 2, 29), (2026, 4, 30)] {
            let result = monthly_breakdown(
                date(y, m, 15),
                &[],
                Money::from_cents(31000),
                date(2026, 6, 1),
            );
            assert_eq!(result.daily_breakdown.len(), expected);

            // Ascending, one per day, no gaps
            for (i, entry) in result.daily_breakdown.iter().enumerate() {
                assert_eq!(entry.date, date(y, m, i as u32 + 1));
            }
        }
    }

    #[test]
    fn test_transaction_order_is_irrelevant() {
        let forward = vec![tx(1, 500), tx(2, 300), tx(9, 100)];
        let backward = vec![tx(9, 100), tx(2, 300), tx(1, 500)];

        assert_eq!(feb_breakdown(&forward, 28000), feb_breakdown(&backward, 28000));
    }

    #[test]
    fn test_idempotent() {
        let txns = vec![tx(1, 500), tx(2, 300), tx(15, -2000)];
        let first = feb_breakdown(&txns, 28000);
        let second = feb_breakdown(&txns, 28000);
        assert_eq!(first, second);
    }
}
