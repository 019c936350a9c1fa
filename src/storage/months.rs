//! Month override repository for JSON storage
//!
//! Per-month budget/income overrides keyed by "YYYY-MM", loaded from
//! months.json.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::DayspendError;
use crate::models::{MonthKey, MonthOverride};

use super::file_io::{read_json, write_json_atomic};

/// Serializable month override map
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct MonthData {
    months: HashMap<MonthKey, MonthOverride>,
}

/// Repository for per-month overrides
pub struct MonthRepository {
    path: PathBuf,
    data: RwLock<HashMap<MonthKey, MonthOverride>>,
}

impl MonthRepository {
    /// Create a new month repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load overrides from disk
    pub fn load(&self) -> Result<(), DayspendError> {
        let file_data: MonthData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = file_data.months;
        Ok(())
    }

    /// Save overrides to disk
    pub fn save(&self) -> Result<(), DayspendError> {
        let data = self
            .data
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = MonthData {
            months: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get the override for a month, if any
    pub fn get(&self, key: MonthKey) -> Result<Option<MonthOverride>, DayspendError> {
        let data = self
            .data
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.get(&key).cloned())
    }

    /// Merge the given fields into a month's override, creating it if needed
    ///
    /// Returns the override as stored after the merge.
    pub fn upsert(&self, key: MonthKey, patch: MonthOverride) -> Result<MonthOverride, DayspendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let entry = data.entry(key).or_default();
        entry.merge(patch);
        Ok(entry.clone())
    }

    /// List all months that carry an override, in chronological order
    pub fn keys(&self) -> Result<Vec<MonthKey>, DayspendError> {
        let data = self
            .data
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut keys: Vec<_> = data.keys().copied().collect();
        keys.sort();
        Ok(keys)
    }
}
