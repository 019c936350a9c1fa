//! Profile repository for JSON storage
//!
//! Holds the global budget configuration loaded from profile.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::DayspendError;
use crate::models::BudgetConfig;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the global budget profile
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<BudgetConfig>,
}

impl ProfileRepository {
    /// Create a new profile repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BudgetConfig::default()),
        }
    }

    /// Load the profile from disk (defaults if the file doesn't exist)
    pub fn load(&self) -> Result<(), DayspendError> {
        let config: BudgetConfig = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = config;
        Ok(())
    }

    /// Save the profile to disk
    pub fn save(&self) -> Result<(), DayspendError> {
        let data = self
            .data
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get a copy of the current configuration
    pub fn get(&self) -> Result<BudgetConfig, DayspendError> {
        let data = self
            .data
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Replace the current configuration
    pub fn set(&self, config: BudgetConfig) -> Result<(), DayspendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = config;
        Ok(())
    }
}
