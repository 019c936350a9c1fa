//! Transaction CLI commands

use chrono::{Local, NaiveDateTime};
use clap::Subcommand;

use crate::display::transaction::format_transaction_register;
use crate::error::{DayspendError, DayspendResult};
use crate::models::category::UNCATEGORIZED;
use crate::services::{TransactionPatch, TransactionService};
use crate::storage::Storage;
use crate::validate::parse_positive_amount;

use super::{parse_date, parse_month};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TxCommands {
    /// Record a transaction (expense by default)
    Add {
        /// Amount, e.g. "12.50" (always entered positive)
        amount: String,
        /// Record as income instead of expense
        #[arg(long)]
        income: bool,
        /// Category key
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Memo
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List transactions, newest first
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Edit an existing transaction
    Edit {
        /// Transaction ID (or unique prefix)
        id: String,
        /// New amount (always entered positive)
        #[arg(long)]
        amount: Option<String>,
        /// Together with --amount: record as income
        #[arg(long)]
        income: bool,
        /// New date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// New category key
        #[arg(long)]
        category: Option<String>,
        /// New memo
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete a transaction
    Remove {
        /// Transaction ID (or unique prefix)
        id: String,
    },

    /// Delete all transactions
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
}

/// Handle a transaction command
pub fn handle_tx_command(storage: &Storage, cmd: TxCommands) -> DayspendResult<()> {
    let service = TransactionService::new(storage);
    let symbol = storage.profile.get()?.currency_symbol;

    match cmd {
        TxCommands::Add {
            amount,
            income,
            category,
            date,
            note,
        } => {
            let amount = signed_amount(&amount, income)?;
            let date = resolve_datetime(date.as_deref())?;
            let category = category.unwrap_or_else(|| UNCATEGORIZED.to_string());

            let txn = service.add(date, amount, category, note.unwrap_or_default())?;

            let kind = if income { "income" } else { "expense" };
            println!(
                "Recorded {} {} on {} in '{}' ({})",
                kind,
                txn.amount.abs().format_with_symbol(&symbol),
                txn.day(),
                txn.category,
                txn.id
            );
        }

        TxCommands::List { month, limit } => {
            let transactions = match month {
                Some(month) => storage.transactions.get_by_month(parse_month(&month)?)?,
                None => storage.transactions.get_all()?,
            };

            let shown: Vec<_> = transactions.iter().take(limit).cloned().collect();
            print!("{}", format_transaction_register(&shown, &symbol));

            if transactions.len() > shown.len() {
                println!("... and {} more", transactions.len() - shown.len());
            }
        }

        TxCommands::Edit {
            id,
            amount,
            income,
            date,
            category,
            note,
        } => {
            if income && amount.is_none() {
                return Err(DayspendError::Parse(
                    "--income only makes sense together with --amount".into(),
                ));
            }

            let existing = service.find(&id)?;
            let patch = TransactionPatch {
                amount: amount.as_deref().map(|a| signed_amount(a, income)).transpose()?,
                date: date
                    .as_deref()
                    .map(|d| parse_date(d).map(to_midday))
                    .transpose()?,
                category,
                note,
            };

            let updated = service.update(existing.id, patch)?;
            println!("Updated {}: {}", updated.id, updated);
        }

        TxCommands::Remove { id } => {
            let txn = service.find(&id)?;
            let removed = service.remove(txn.id)?;
            println!("Removed {}: {}", removed.id, removed);
        }

        TxCommands::Clear { yes } => {
            if !yes {
                println!("This deletes every transaction. Re-run with --yes to confirm.");
                return Ok(());
            }
            let removed = service.clear()?;
            println!("Removed {} transaction(s).", removed);
        }
    }

    Ok(())
}

/// Validate a user-entered amount and apply the sign convention:
/// expenses are stored positive, income negative.
fn signed_amount(input: &str, income: bool) -> DayspendResult<crate::models::Money> {
    let amount = parse_positive_amount(input)?;
    Ok(if income { -amount } else { amount })
}

fn resolve_datetime(date: Option<&str>) -> DayspendResult<NaiveDateTime> {
    match date {
        Some(s) => Ok(to_midday(parse_date(s)?)),
        None => Ok(Local::now().naive_local()),
    }
}

fn to_midday(date: chrono::NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(12, 0, 0)
        .expect("midday exists on every calendar day")
}
