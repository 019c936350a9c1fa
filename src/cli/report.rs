//! Report CLI commands
//!
//! The rollover ledger, the live dashboard, and category totals.

use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::display::breakdown::format_breakdown;
use crate::display::category::format_category_spending;
use crate::display::summary::format_summary;
use crate::error::DayspendResult;
use crate::export;
use crate::models::MonthKey;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_date, parse_month};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Day-by-day rollover ledger for a month
    Breakdown {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
        /// Write the ledger to a CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// How much can I spend today?
    Today {
        /// Compute as of this date (YYYY-MM-DD) instead of today
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Net spending per category for a month
    Categories {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> DayspendResult<()> {
    let service = BudgetService::new(storage);
    let symbol = storage.profile.get()?.currency_symbol;
    let today = Local::now().date_naive();

    match cmd {
        ReportCommands::Breakdown { month, csv } => {
            let target = match month {
                Some(month) => parse_month(&month)?.first_day(),
                None => today,
            };

            let breakdown = service.breakdown(target, today)?;

            match csv {
                Some(path) => {
                    export::export_breakdown(&breakdown, &path)?;
                    println!(
                        "Exported {} days to {}",
                        breakdown.daily_breakdown.len(),
                        path.display()
                    );
                }
                None => print!("{}", format_breakdown(&breakdown, &symbol)),
            }
        }

        ReportCommands::Today { date } => {
            let target = match date {
                Some(date) => parse_date(&date)?,
                None => today,
            };

            // An explicit --date acts as "today" for the computation, so
            // past days can be replayed exactly as they looked.
            let summary = service.dashboard(target, target)?;
            print!("{}", format_summary(&summary, &symbol));
        }

        ReportCommands::Categories { month } => {
            let key = match month {
                Some(month) => parse_month(&month)?,
                None => MonthKey::from_date(today),
            };

            let spends = service.spending_by_category(key)?;
            print!("{}", format_category_spending(key, &spends, &symbol));
        }
    }

    Ok(())
}
