//! Dashboard summary display formatting
//!
//! Renders the "how much can I spend today" snapshot.

use crate::engine::DashboardSummary;

use super::format_float_amount;

/// Format the dashboard summary for terminal display
pub fn format_summary(summary: &DashboardSummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Budget summary for {}\n", summary.month));
    output.push_str(&format!(
        "  Monthly budget:    {}\n",
        summary.monthly_budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Spent this month:  {}\n",
        summary.total_spent_month.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Remaining:         {}\n",
        summary.remaining_monthly.format_with_symbol(symbol)
    ));

    if summary.is_current_month {
        output.push_str(&format!(
            "  Day {} of {}, {} day(s) left\n",
            summary.current_day, summary.days_in_month, summary.days_remaining
        ));
        output.push_str(&format!(
            "  Tracking since:    {}\n",
            summary.start_date.format("%Y-%m-%d")
        ));
        output.push('\n');
        output.push_str(&format!(
            "  Spent today:       {}\n",
            summary.spent_today.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "  Daily target:      {}\n",
            format_float_amount(summary.daily_target, symbol)
        ));
        output.push_str(&format!(
            "  Left for today:    {}\n",
            format_float_amount(summary.remaining_today, symbol)
        ));

        if let Some(saved) = summary.total_saved {
            if saved >= 0.0 {
                output.push_str(&format!(
                    "  Saved so far:      {}\n",
                    format_float_amount(saved, symbol)
                ));
            } else {
                output.push_str(&format!(
                    "  Behind by:         {}\n",
                    format_float_amount(-saved, symbol)
                ));
            }
        }

        if summary.is_over_budget {
            output.push_str("\n  ⚠ Over budget for today.\n");
        }
    } else {
        output.push_str(&format!(
            "  (whole month view, {} days)\n",
            summary.days_in_month
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::dashboard_summary;
    use crate::models::{Money, Transaction};
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_format_current_month_summary() {
        let txns = vec![Transaction::new(
            noon(2026, 2, 1),
            Money::from_cents(1500),
            "food",
        )];
        let today = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
        let summary = dashboard_summary(today, &txns, Money::from_cents(28000), today);

        let output = format_summary(&summary, "$");
        assert!(output.contains("2026-02"));
        assert!(output.contains("Spent today:       $15.00"));
        assert!(output.contains("Daily target:      $10.00"));
        assert!(output.contains("Left for today:    -$5.00"));
        assert!(output.contains("Over budget"));
    }

    #[test]
    fn test_format_past_month_summary() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).unwrap();
        let target = NaiveDate::from_ymd_opt(2026, 2, 15).unwrap();
        let summary = dashboard_summary(target, &[], Money::from_cents(28000), today);

        let output = format_summary(&summary, "$");
        assert!(output.contains("whole month view"));
        assert!(!output.contains("Spent today"));
    }
}
