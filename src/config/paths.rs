//! Path management for dayspend
//!
//! Platform-appropriate path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `DAYSPEND_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories`
//!    (Linux: `~/.config/dayspend`, macOS: `~/Library/Application
//!    Support/dayspend`, Windows: `%APPDATA%\dayspend`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::DayspendError;

/// Manages all paths used by dayspend
#[derive(Debug, Clone)]
pub struct DayspendPaths {
    /// Base directory for all dayspend data
    base_dir: PathBuf,
}

impl DayspendPaths {
    /// Create a new DayspendPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// `DAYSPEND_DATA_DIR` override is not set.
    pub fn new() -> Result<Self, DayspendError> {
        let base_dir = if let Ok(custom) = std::env::var("DAYSPEND_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "dayspend").ok_or_else(|| {
                DayspendError::Config("Could not determine a home directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create DayspendPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to profile.json (global budget configuration)
    pub fn profile_file(&self) -> PathBuf {
        self.data_dir().join("profile.json")
    }

    /// Get the path to months.json (per-month overrides)
    pub fn months_file(&self) -> PathBuf {
        self.data_dir().join("months.json")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), DayspendError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DayspendError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| DayspendError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if dayspend has been initialized (profile file exists)
    pub fn is_initialized(&self) -> bool {
        self.profile_file().exists()
    }
}
