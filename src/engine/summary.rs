//! Daily dashboard summary
//!
//! A single real-time snapshot of "how much can I spend today", as opposed
//! to the per-day ledger in [`super::breakdown`]. Drives the live indicator
//! on the report surface.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::{Money, MonthKey, Transaction};

use super::rollover::rollover_balance;
use super::start::effective_start_date;

/// Snapshot of the month's spending state as of today
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// The date the summary was computed for
    pub target_date: NaiveDate,

    /// The month covered
    pub month: MonthKey,

    /// Whether the target month is today's month
    pub is_current_month: bool,

    /// Days in the target month
    pub days_in_month: u32,

    /// Today's day-of-month for the current month; the last day otherwise
    pub current_day: u32,

    /// Days left including today (1 for non-current months)
    pub days_remaining: u32,

    /// The resolved effective start date for the month
    pub start_date: NaiveDate,

    /// The effective monthly budget
    pub monthly_budget: Money,

    /// Signed net of all transactions in the month
    pub total_spent_month: Money,

    /// Budget minus net spend for the whole month
    pub remaining_monthly: Money,

    /// Net spend recorded today (zero for non-current months)
    pub spent_today: Money,

    /// Daily allowance: `monthly_budget / days_in_month`
    pub avg_daily: f64,

    /// Flat target for today and each remaining day
    pub daily_target: f64,

    /// What is still spendable today: `daily_target - spent_today`
    pub remaining_today: f64,

    /// True when today's spending already exceeds the daily target
    pub is_over_budget: bool,

    /// Rollover surplus/deficit accrued strictly before today; only present
    /// for the current month once at least one tracked day has passed
    pub total_saved: Option<f64>,
}

/// Compute the dashboard snapshot for the month containing `target`
///
/// For non-current months the month is treated as fully elapsed: the query
/// collapses to a single "remaining day" carrying the whole remaining
/// budget, and there is no meaningful "today" to attribute spending to.
pub fn dashboard_summary(
    target: NaiveDate,
    transactions: &[Transaction],
    monthly_budget: Money,
    today: NaiveDate,
) -> DashboardSummary {
    let month = MonthKey::from_date(target);
    let days_in_month = month.days();
    let is_current_month = month.contains(today);

    let current_day = if is_current_month {
        today.day()
    } else {
        days_in_month
    };
    let days_remaining = if is_current_month {
        days_in_month - current_day + 1
    } else {
        1
    };

    let month_transactions: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| month.contains(t.day()))
        .collect();

    let total_spent_month: Money = month_transactions.iter().map(|t| t.amount).sum();
    let remaining_monthly = monthly_budget - total_spent_month;

    let spent_today: Money = if is_current_month {
        month_transactions
            .iter()
            .filter(|t| t.day().day() == current_day)
            .map(|t| t.amount)
            .sum()
    } else {
        Money::zero()
    };

    let avg_daily = if monthly_budget.is_zero() {
        0.0
    } else {
        monthly_budget.to_major() / days_in_month as f64
    };

    let start_date = effective_start_date(month, transactions, today);

    // Adaptive smart start: when tracking began mid-month, assume the
    // skipped days were spent at exactly the average rate so they don't
    // inflate the daily target. Floored at zero: no negative carry-in.
    let mut effective_remaining = remaining_monthly.to_major();
    if is_current_month {
        let start_day = start_date.day();
        if start_day > 1 {
            let skipped_days = start_day - 1;
            let assumed_past_spending = skipped_days as f64 * avg_daily;
            effective_remaining = (remaining_monthly.to_major() - assumed_past_spending).max(0.0);
        }
    }

    // Add today's spend back so it doesn't shrink today's own target; it is
    // subtracted again via remaining_today.
    let budget_available = effective_remaining + spent_today.to_major();
    let daily_target = budget_available / days_remaining as f64;
    let remaining_today = daily_target - spent_today.to_major();
    let is_over_budget = remaining_today < 0.0;

    let total_saved = if is_current_month && current_day > start_date.day() {
        let days_passed = current_day - start_date.day();
        let spent_before_today: Money = month_transactions
            .iter()
            .filter(|t| t.day().day() < current_day)
            .map(|t| t.amount)
            .sum();
        Some(rollover_balance(days_passed, avg_daily, spent_before_today))
    } else {
        None
    };

    DashboardSummary {
        target_date: target,
        month,
        is_current_month,
        days_in_month,
        current_day,
        days_remaining,
        start_date,
        monthly_budget,
        total_spent_month,
        remaining_monthly,
        spent_today,
        avg_daily,
        daily_target,
        remaining_today,
        is_over_budget,
        total_saved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::monthly_breakdown;
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

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "expected {} ~ {}", a, b);
    }

    #[test]
    fn test_overspending_today() {
        // 280 over 28 days; 15 spent on day 1, queried on day 1
        let txns = vec![tx(1, 1500)];
        let summary =
            dashboard_summary(date(2026, 2, 1), &txns, Money::from_cents(28000), date(2026, 2, 1));

        assert_eq!(summary.current_day, 1);
        assert_eq!(summary.days_remaining, 28);
        assert_eq!(summary.total_spent_month, Money::from_cents(1500));
        assert_eq!(summary.remaining_monthly, Money::from_cents(26500));
        assert_eq!(summary.spent_today, Money::from_cents(1500));
        assert_close(summary.daily_target, 10.0);
        assert_close(summary.remaining_today, -5.0);
        assert!(summary.is_over_budget);
        assert_eq!(summary.total_saved, None);
    }

    #[test]
    fn test_smart_start_assumes_average_spend_for_skipped_days() {
        // No transactions, queried on Feb 20: start = today, 19 skipped days
        // assumed spent at 10/day leaves 90 for the 9 remaining days.
        let summary =
            dashboard_summary(date(2026, 2, 20), &[], Money::from_cents(28000), date(2026, 2, 20));

        assert_eq!(summary.start_date, date(2026, 2, 20));
        assert_eq!(summary.days_remaining, 9);
        assert_close(summary.daily_target, 10.0);
        assert_close(summary.remaining_today, 10.0);
        assert!(!summary.is_over_budget);
        assert_eq!(summary.total_saved, None);
    }

    #[test]
    fn test_no_adjustment_when_tracking_started_on_the_first() {
        let txns = vec![tx(1, 500)];
        let summary =
            dashboard_summary(date(2026, 2, 2), &txns, Money::from_cents(28000), date(2026, 2, 2));

        assert_eq!(summary.start_date, date(2026, 2, 1));
        // remaining 275 over 27 remaining days, nothing assumed
        assert_close(summary.daily_target, 275.0 / 27.0);
    }

    #[test]
    fn test_adjustment_floors_at_zero() {
        // Budget 100 over 28 days; 95 spent on day 27, queried on day 28.
        // remaining (5) minus assumed past spending (26 days worth) is deep
        // negative; the effective remaining must clamp to zero.
        let txns = vec![tx(27, 9500)];
        let summary =
            dashboard_summary(date(2026, 2, 28), &txns, Money::from_cents(10000), date(2026, 2, 28));

        assert_eq!(summary.days_remaining, 1);
        assert_close(summary.daily_target, 0.0);
        assert_close(summary.remaining_today, 0.0);
        assert!(!summary.is_over_budget);
    }

    #[test]
    fn test_todays_spend_does_not_shrink_todays_target() {
        // Start on day 1, queried on day 1 with 4 spent: the 4 is added back
        // before division, so the target equals the plain daily allowance.
        let txns = vec![tx(1, 400)];
        let summary =
            dashboard_summary(date(2026, 2, 1), &txns, Money::from_cents(28000), date(2026, 2, 1));

        assert_close(summary.daily_target, 10.0);
        assert_close(summary.remaining_today, 6.0);
    }

    #[test]
    fn test_past_month_collapses_to_one_remaining_day() {
        let txns = vec![tx(10, 5000)];
        // Queried from March
        let summary =
            dashboard_summary(date(2026, 2, 15), &txns, Money::from_cents(28000), date(2026, 3, 5));

        assert!(!summary.is_current_month);
        assert_eq!(summary.current_day, 28);
        assert_eq!(summary.days_remaining, 1);
        assert_eq!(summary.spent_today, Money::zero());
        assert_close(summary.daily_target, 230.0);
        assert_eq!(summary.total_saved, None);
    }

    #[test]
    fn test_zero_budget() {
        let txns = vec![tx(1, 500)];
        let summary =
            dashboard_summary(date(2026, 2, 1), &txns, Money::zero(), date(2026, 2, 1));

        assert_eq!(summary.avg_daily, 0.0);
        assert_close(summary.daily_target, 0.0);
        assert_close(summary.remaining_today, -5.0);
        assert!(summary.is_over_budget);
    }

    #[test]
    fn test_total_saved_accrues_before_today() {
        // Spends [5, 3, 0] on days 1-3, queried on day 4 at 10/day:
        // three tracked days passed, 8 spent, 22 saved.
        let txns = vec![tx(1, 500), tx(2, 300)];
        let summary =
            dashboard_summary(date(2026, 2, 4), &txns, Money::from_cents(28000), date(2026, 2, 4));

        let saved = summary.total_saved.expect("tracked days have passed");
        assert_close(saved, 22.0);
    }

    #[test]
    fn test_total_saved_agrees_with_ledger_at_the_boundary() {
        // The dashboard's saved-so-far figure and the ledger's cumulative
        // available must match on the day before today, across a spread of
        // query days, since both come from the same rollover primitive.
        let txns = vec![tx(3, 700), tx(5, 300), tx(5, -2000), tx(9, 1500)];

        for query_day in [4u32, 6, 10, 20, 28] {
            let today = date(2026, 2, query_day);
            let summary =
                dashboard_summary(today, &txns, Money::from_cents(28000), today);
            let ledger = monthly_breakdown(today, &txns, Money::from_cents(28000), today);

            let yesterday = &ledger.daily_breakdown[(query_day - 2) as usize];
            let saved = summary.total_saved.expect("start precedes query day");
            assert_close(saved, yesterday.available);
        }
    }

    #[test]
    fn test_idempotent() {
        let txns = vec![tx(1, 500), tx(15, -2000)];
        let a = dashboard_summary(date(2026, 2, 15), &txns, Money::from_cents(28000), date(2026, 2, 15));
        let b = dashboard_summary(date(2026, 2, 15), &txns, Money::from_cents(28000), date(2026, 2, 15));
        assert_eq!(a, b);
    }
}
