//! Category spending display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::MonthKey;
use crate::services::CategorySpend;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Net")]
    net: String,
    #[tabled(rename = "Transactions")]
    count: usize,
}

/// Format per-category net spending for a month
pub fn format_category_spending(month: MonthKey, spends: &[CategorySpend], symbol: &str) -> String {
    if spends.is_empty() {
        return format!("No transactions recorded for {}.\n", month);
    }

    let rows: Vec<CategoryRow> = spends
        .iter()
        .map(|s| CategoryRow {
            category: s.category.clone(),
            net: s.net.format_with_symbol(symbol),
            count: s.count,
        })
        .collect();

    let mut output = format!("Spending by category: {}\n\n", month);
    output.push_str(&Table::new(rows).with(Style::sharp()).to_string());
    output.push('\n');
    output
}
