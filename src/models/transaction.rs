//! Transaction model
//!
//! A dated, signed monetary record. The sign convention is load-bearing for
//! the whole engine: positive amounts are expenses, negative amounts are
//! income. Nothing ever infers sign from the category string.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::month::MonthKey;

/// A single budget transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// When the transaction happened, in local wall-clock time.
    /// Only the date component participates in day bucketing.
    pub date: NaiveDateTime,

    /// Amount (positive for expense, negative for income)
    pub amount: Money,

    /// Category key (free-form; opaque to the engine)
    #[serde(default)]
    pub category: String,

    /// Memo/notes
    #[serde(default)]
    pub note: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDateTime, amount: Money, category: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            date,
            amount,
            category: category.into(),
            note: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a transaction with a note
    pub fn with_note(
        date: NaiveDateTime,
        amount: Money,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(date, amount, category);
        txn.note = note.into();
        txn
    }

    /// The local calendar day this transaction falls on
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// The calendar month this transaction falls in
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.day())
    }

    /// Check if this is an expense (positive amount)
    pub fn is_expense(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is income (negative amount)
    pub fn is_income(&self) -> bool {
        self.amount.is_negative()
    }

    /// Mark the record as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day().format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(noon(2026, 2, 15), Money::from_cents(500), "food");
        assert_eq!(txn.amount.cents(), 500);
        assert_eq!(txn.category, "food");
        assert_eq!(txn.day(), NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
    }

    #[test]
    fn test_sign_convention() {
        let expense = Transaction::new(noon(2026, 2, 1), Money::from_cents(500), "food");
        assert!(expense.is_expense());
        assert!(!expense.is_income());

        let income = Transaction::new(noon(2026, 2, 1), Money::from_cents(-2000), "salary");
        assert!(income.is_income());
        assert!(!income.is_expense());
    }

    #[test]
    fn test_month_key() {
        let txn = Transaction::new(noon(2026, 2, 15), Money::from_cents(500), "food");
        assert_eq!(txn.month_key(), MonthKey::new(2026, 2).unwrap());
    }

    #[test]
    fn test_day_ignores_time_of_day() {
        let late = NaiveDate::from_ymd_opt(2026, 2, 15)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let txn = Transaction::new(late, Money::from_cents(100), "coffee");
        assert_eq!(txn.day(), NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::with_note(noon(2026, 2, 15), Money::from_cents(-500), "gift", "bday");
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(noon(2026, 2, 15), Money::from_cents(-5000), "salary");
        assert_eq!(format!("{}", txn), "2026-02-15 salary -$50.00");
    }
}
