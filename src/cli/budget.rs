//! Budget CLI commands
//!
//! Global monthly limit, per-month overrides, and resolved configuration.

use chrono::Local;
use clap::Subcommand;

use crate::error::DayspendResult;
use crate::models::MonthOverride;
use crate::services::{MonthService, ProfileService};
use crate::storage::Storage;
use crate::validate::parse_budget;

use super::parse_month;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show or set the global monthly spending limit
    Limit {
        /// New limit, e.g. "280" (omit to show the current one)
        amount: Option<String>,
    },

    /// Show or set the expected monthly income
    Income {
        /// New income (omit to show the current one)
        amount: Option<String>,
    },

    /// Set the display currency symbol
    Currency {
        /// Symbol, e.g. "$" or "€"
        symbol: String,
    },

    /// Set per-month overrides
    Month {
        /// Month (YYYY-MM)
        month: String,
        /// Month-specific budget
        #[arg(long)]
        budget: Option<String>,
        /// Month-specific income
        #[arg(long)]
        income: Option<String>,
    },

    /// Show the resolved configuration for a month
    Show {
        /// Month (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> DayspendResult<()> {
    let profile_service = ProfileService::new(storage);
    let month_service = MonthService::new(storage);
    let symbol = storage.profile.get()?.currency_symbol;

    match cmd {
        BudgetCommands::Limit { amount } => match amount {
            Some(amount) => {
                let limit = parse_budget(&amount)?;
                profile_service.set_monthly_limit(limit)?;
                println!("Monthly limit set to {}", limit.format_with_symbol(&symbol));
            }
            None => {
                let config = profile_service.config()?;
                println!(
                    "Monthly limit: {}",
                    config.monthly_limit.format_with_symbol(&symbol)
                );
            }
        },

        BudgetCommands::Income { amount } => match amount {
            Some(amount) => {
                let income = parse_budget(&amount)?;
                profile_service.set_income(income)?;
                println!("Monthly income set to {}", income.format_with_symbol(&symbol));
            }
            None => {
                let config = profile_service.config()?;
                println!("Monthly income: {}", config.income.format_with_symbol(&symbol));
            }
        },

        BudgetCommands::Currency { symbol } => {
            let config = profile_service.set_currency_symbol(symbol)?;
            println!("Currency symbol set to {}", config.currency_symbol);
        }

        BudgetCommands::Month {
            month,
            budget,
            income,
        } => {
            let key = parse_month(&month)?;
            let patch = MonthOverride {
                budget: budget.as_deref().map(parse_budget).transpose()?,
                income: income.as_deref().map(parse_budget).transpose()?,
                ..Default::default()
            };

            if patch.is_empty() {
                // No flags: just show what's stored
                match storage.months.get(key)? {
                    Some(over) => {
                        println!("Override for {}:", key);
                        match over.budget {
                            Some(b) => println!("  Budget: {}", b.format_with_symbol(&symbol)),
                            None => println!("  Budget: (global limit)"),
                        }
                        match over.income {
                            Some(i) => println!("  Income: {}", i.format_with_symbol(&symbol)),
                            None => println!("  Income: (none)"),
                        }
                    }
                    None => println!("No override for {}.", key),
                }
                return Ok(());
            }

            month_service.set_month(key, patch)?;
            let config = month_service.month_config_for(key)?;
            println!(
                "{}: budget {} income {}",
                key,
                config.budget.format_with_symbol(&symbol),
                config.income.format_with_symbol(&symbol)
            );
        }

        BudgetCommands::Show { month } => {
            let key = match month {
                Some(month) => parse_month(&month)?,
                None => crate::models::MonthKey::from_date(Local::now().date_naive()),
            };

            let config = month_service.month_config_for(key)?;
            let overridden = storage.months.get(key)?.map(|o| o.budget.is_some()) == Some(true);

            println!("Month {}", config.key);
            println!(
                "  Budget: {}{}",
                config.budget.format_with_symbol(&symbol),
                if overridden { " (override)" } else { "" }
            );
            println!("  Income: {}", config.income.format_with_symbol(&symbol));

            let months = month_service.overridden_months()?;
            if !months.is_empty() {
                let list: Vec<String> = months.iter().map(|m| m.to_string()).collect();
                println!("  Months with overrides: {}", list.join(", "));
            }
        }
    }

    Ok(())
}
