//! Storage layer for dayspend
//!
//! JSON file storage with atomic writes and automatic directory creation.
//! The `Storage` coordinator is the explicit, request-scoped replacement for
//! hidden global session state: it is constructed once, loaded explicitly,
//! and passed by reference to whoever needs it.

pub mod file_io;
pub mod months;
pub mod profile;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use months::MonthRepository;
pub use profile::ProfileRepository;
pub use transactions::TransactionRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::DayspendPaths;
use crate::error::DayspendError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: DayspendPaths,
    audit: AuditLogger,
    pub profile: ProfileRepository,
    pub months: MonthRepository,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: DayspendPaths) -> Result<Self, DayspendError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            profile: ProfileRepository::new(paths.profile_file()),
            months: MonthRepository::new(paths.months_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &DayspendPaths {
        &self.paths
    }

    /// The audit log reader/writer
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), DayspendError> {
        self.profile.load()?;
        self.months.load()?;
        self.transactions.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), DayspendError> {
        self.profile.save()?;
        self.months.save()?;
        self.transactions.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), DayspendError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), DayspendError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), DayspendError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DayspendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_on_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DayspendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }
}
