//! Profile service
//!
//! Updates to the global budget configuration, persisted and audited.

use crate::audit::EntityType;
use crate::error::DayspendResult;
use crate::models::{BudgetConfig, Money};
use crate::storage::Storage;

/// Service for the global budget profile
pub struct ProfileService<'a> {
    storage: &'a Storage,
}

impl<'a> ProfileService<'a> {
    /// Create a new profile service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The current configuration
    pub fn config(&self) -> DayspendResult<BudgetConfig> {
        self.storage.profile.get()
    }

    /// Set the global monthly spending limit
    pub fn set_monthly_limit(&self, limit: Money) -> DayspendResult<BudgetConfig> {
        self.update(|config| config.monthly_limit = limit)
    }

    /// Set the expected monthly income
    pub fn set_income(&self, income: Money) -> DayspendResult<BudgetConfig> {
        self.update(|config| config.income = income)
    }

    /// Set the display currency symbol
    pub fn set_currency_symbol(&self, symbol: impl Into<String>) -> DayspendResult<BudgetConfig> {
        let symbol = symbol.into();
        self.update(|config| config.currency_symbol = symbol)
    }

    fn update(&self, apply: impl FnOnce(&mut BudgetConfig)) -> DayspendResult<BudgetConfig> {
        let before = self.storage.profile.get()?;
        let mut after = before.clone();
        apply(&mut after);

        if after == before {
            return Ok(after);
        }

        self.storage.profile.set(after.clone())?;
        self.storage.profile.save()?;

        self.storage.log_update(
            EntityType::Profile,
            "profile",
            None,
            &before,
            &after,
            Some(summarize_change(&before, &after)),
        )?;

        Ok(after)
    }
}

fn summarize_change(before: &BudgetConfig, after: &BudgetConfig) -> String {
    let mut parts = Vec::new();
    if before.monthly_limit != after.monthly_limit {
        parts.push(format!(
            "monthly_limit: {} -> {}",
            before.monthly_limit, after.monthly_limit
        ));
    }
    if before.income != after.income {
        parts.push(format!("income: {} -> {}", before.income, after.income));
    }
    if before.currency_symbol != after.currency_symbol {
        parts.push(format!(
            "currency: {} -> {}",
            before.currency_symbol, after.currency_symbol
        ));
    }
    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DayspendPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = DayspendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_set_monthly_limit() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        let config = service.set_monthly_limit(Money::from_cents(28000)).unwrap();
        assert_eq!(config.monthly_limit, Money::from_cents(28000));
        assert_eq!(
            storage.profile.get().unwrap().monthly_limit,
            Money::from_cents(28000)
        );

        let audit = storage.audit().read_all().unwrap();
        assert_eq!(audit.len(), 1);
        assert!(audit[0]
            .diff_summary
            .as_deref()
            .unwrap()
            .contains("monthly_limit"));
    }

    #[test]
    fn test_noop_update_is_not_audited() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ProfileService::new(&storage);

        service.set_monthly_limit(Money::zero()).unwrap();
        assert_eq!(storage.audit().entry_count().unwrap(), 0);
    }
}
