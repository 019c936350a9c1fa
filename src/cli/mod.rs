//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_tx_command, TxCommands};

use chrono::NaiveDate;

use crate::error::{DayspendError, DayspendResult};
use crate::models::MonthKey;

/// Parse a user-supplied date in YYYY-MM-DD form
pub(crate) fn parse_date(s: &str) -> DayspendResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| DayspendError::Parse(format!("Invalid date (expected YYYY-MM-DD): {}", s)))
}

/// Parse a user-supplied month in YYYY-MM form
pub(crate) fn parse_month(s: &str) -> DayspendResult<MonthKey> {
    s.parse()
        .map_err(|e: crate::models::MonthKeyParseError| DayspendError::Parse(e.to_string()))
}
