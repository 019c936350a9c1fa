//! Budget query service
//!
//! Bridges the storage layer into the pure engine: takes a stable snapshot
//! of the transaction collection, resolves the month's effective budget, and
//! hands both to the engine. The clock stays out of the engine; callers pass
//! "today" in.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::engine::{dashboard_summary, monthly_breakdown, DashboardSummary, MonthlyBreakdown};
use crate::error::DayspendResult;
use crate::models::{Money, MonthKey};
use crate::storage::Storage;

use super::months::MonthService;

/// Net spending aggregated for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpend {
    /// Category key
    pub category: String,
    /// Signed net amount across the month
    pub net: Money,
    /// Number of transactions
    pub count: usize,
}

/// Service for budget queries
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The rollover ledger for the month containing `target`
    pub fn breakdown(&self, target: NaiveDate, today: NaiveDate) -> DayspendResult<MonthlyBreakdown> {
        let config = MonthService::new(self.storage).month_config(target)?;
        let transactions = self.storage.transactions.get_all()?;
        Ok(monthly_breakdown(target, &transactions, config.budget, today))
    }

    /// The live dashboard snapshot for the month containing `target`
    pub fn dashboard(&self, target: NaiveDate, today: NaiveDate) -> DayspendResult<DashboardSummary> {
        let config = MonthService::new(self.storage).month_config(target)?;
        let transactions = self.storage.transactions.get_all()?;
        Ok(dashboard_summary(target, &transactions, config.budget, today))
    }

    /// Net spend per category for a month, largest net spend first
    pub fn spending_by_category(&self, month: MonthKey) -> DayspendResult<Vec<CategorySpend>> {
        let transactions = self.storage.transactions.get_by_month(month)?;

        let mut by_category: HashMap<String, (Money, usize)> = HashMap::new();
        for txn in &transactions {
            let entry = by_category
                .entry(txn.category.clone())
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
        }

        let mut spends: Vec<CategorySpend> = by_category
            .into_iter()
            .map(|(category, (net, count))| CategorySpend {
                category,
                net,
                count,
            })
            .collect();
        spends.sort_by(|a, b| b.net.cmp(&a.net).then_with(|| a.category.cmp(&b.category)));
        Ok(spends)
    }
}
