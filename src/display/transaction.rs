//! Transaction display formatting
//!
//! Register-style listing of transactions.

use crate::models::Transaction;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction, symbol: &str) -> String {
    let kind = if txn.is_income() { "income " } else { "expense" };

    format!(
        "{} {} {} {:14} {:>12} {}",
        txn.id,
        txn.day().format("%Y-%m-%d"),
        kind,
        truncate(&txn.category, 14),
        txn.amount.format_with_symbol(symbol),
        truncate(&txn.note, 24),
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:7} {:14} {:>12} {}\n",
        "Id", "Date", "Kind", "Category", "Amount", "Note"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, symbol));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
