//! Month configuration service
//!
//! Resolves the effective budget for a month: the month's own override when
//! present, the global monthly limit otherwise. The engine only ever sees
//! the single resolved number this service produces.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::DayspendResult;
use crate::models::{MonthConfig, MonthKey, MonthOverride};
use crate::storage::Storage;

/// Service for month override management and resolution
pub struct MonthService<'a> {
    storage: &'a Storage,
}

impl<'a> MonthService<'a> {
    /// Create a new month service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Resolve the effective configuration for the month containing `date`
    pub fn month_config(&self, date: NaiveDate) -> DayspendResult<MonthConfig> {
        self.month_config_for(MonthKey::from_date(date))
    }

    /// Resolve the effective configuration for a month key
    pub fn month_config_for(&self, key: MonthKey) -> DayspendResult<MonthConfig> {
        let over = self.storage.months.get(key)?;
        let profile = self.storage.profile.get()?;
        Ok(MonthConfig::resolve(key, over.as_ref(), &profile))
    }

    /// Merge override fields into a month, persist, and audit the change
    pub fn set_month(&self, key: MonthKey, patch: MonthOverride) -> DayspendResult<MonthOverride> {
        let before = self.storage.months.get(key)?.unwrap_or_default();
        let after = self.storage.months.upsert(key, patch)?;
        self.storage.months.save()?;

        self.storage.log_update(
            EntityType::Month,
            key.to_string(),
            None,
            &before,
            &after,
            Some(summarize_change(&before, &after)),
        )?;

        Ok(after)
    }

    /// Months that carry an override, in chronological order
    pub fn overridden_months(&self) -> DayspendResult<Vec<MonthKey>> {
        self.storage.months.keys()
    }
}

fn summarize_change(before: &MonthOverride, after: &MonthOverride) -> String {
    let mut parts = Vec::new();
    if before.budget != after.budget {
        parts.push(format!("budget: {:?} -> {:?}", before.budget, after.budget));
    }
    if before.income != after.income {
        parts.push(format!("income: {:?} -> {:?}", before.income, after.income));
    }
    if parts.is_empty() {
        "no change".to_string()
    } else {
        parts.join(", ")
    }
}
