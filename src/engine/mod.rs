//! Budget allocation and rollover engine
//!
//! Pure, deterministic calculations over an in-memory transaction snapshot
//! and a resolved monthly budget. Nothing in this module performs I/O or
//! reads the clock: "today" is always an explicit argument, so every
//! function is trivially testable and safe to call from any thread.
//!
//! The engine consists of:
//!
//! - calendar utilities ([`days_in_month`], [`month_key`])
//! - effective start date resolution ([`effective_start_date`])
//! - the per-day rollover ledger ([`monthly_breakdown`])
//! - the live dashboard snapshot ([`dashboard_summary`])
//!
//! Both the ledger and the dashboard express cumulative balances through the
//! single [`rollover_balance`] primitive, so the two views agree at the
//! current-day boundary.

mod breakdown;
mod rollover;
mod start;
mod summary;

pub use breakdown::{monthly_breakdown, DailyBreakdownEntry, MonthlyBreakdown};
pub use rollover::rollover_balance;
pub use start::effective_start_date;
pub use summary::{dashboard_summary, DashboardSummary};

use chrono::NaiveDate;

use crate::models::MonthKey;

/// Number of days in the date's month (28-31, Gregorian, leap years honored)
pub fn days_in_month(date: NaiveDate) -> u32 {
    MonthKey::from_date(date).days()
}

/// Canonical "YYYY-MM" grouping key for the date's month
pub fn month_key(date: NaiveDate) -> MonthKey {
    MonthKey::from_date(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2026, 1, 15)), 31);
        assert_eq!(days_in_month(date(2026, 2, 1)), 28);
        assert_eq!(days_in_month(date(2028, 2, 1)), 29);
        assert_eq!(days_in_month(date(2026, 4, 30)), 30);
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key(date(2026, 2, 15)).to_string(), "2026-02");
    }
}
