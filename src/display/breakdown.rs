//! Monthly breakdown display formatting
//!
//! Renders the rollover ledger as a day-by-day table.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::engine::MonthlyBreakdown;

use super::format_float_amount;

#[derive(Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Daily balance")]
    daily_balance: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "")]
    marker: String,
}

/// Format the full monthly breakdown for terminal display
pub fn format_breakdown(breakdown: &MonthlyBreakdown, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Daily budget ledger: {}\n", breakdown.month));
    output.push_str(&format!(
        "Budget {} over {} days ({} per day), tracking since {}\n\n",
        breakdown.monthly_budget.format_with_symbol(symbol),
        breakdown.daily_breakdown.len(),
        format_float_amount(breakdown.avg_daily, symbol),
        breakdown.start_date.format("%Y-%m-%d"),
    ));

    let rows: Vec<BreakdownRow> = breakdown
        .daily_breakdown
        .iter()
        .map(|entry| {
            if entry.is_skipped {
                BreakdownRow {
                    day: entry.key.clone(),
                    spent: entry.spent.format_with_symbol(symbol),
                    daily_balance: "-".to_string(),
                    available: "-".to_string(),
                    marker: "skipped".to_string(),
                }
            } else {
                BreakdownRow {
                    day: entry.key.clone(),
                    spent: entry.spent.format_with_symbol(symbol),
                    daily_balance: format_float_amount(entry.daily_balance, symbol),
                    available: format_float_amount(entry.available, symbol),
                    marker: if entry.available < 0.0 {
                        "over".to_string()
                    } else {
                        String::new()
                    },
                }
            }
        })
        .collect();

    output.push_str(&Table::new(rows).with(Style::sharp()).to_string());
    output.push('\n');
    output
}
