//! Default category keys
//!
//! Categories are free-form strings on transactions; these are the defaults
//! offered at init time. The engine itself never looks at categories.

/// Default expense category keys
pub const DEFAULT_EXPENSE_CATEGORIES: &[&str] = &[
    "shopping",
    "food",
    "transport",
    "entertainment",
    "coffee",
    "utilities",
];

/// Default income category keys
pub const DEFAULT_INCOME_CATEGORIES: &[&str] = &["salary", "gift", "refund", "sale"];

/// Fallback category for transactions recorded without one
pub const UNCATEGORIZED: &str = "other";
