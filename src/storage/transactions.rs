//! Transaction repository for JSON storage
//!
//! Manages loading and saving transactions to transactions.json, with an
//! in-memory month index for the engine's month-scoped queries.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::DayspendError;
use crate::models::{MonthKey, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence with a month index
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
    /// Index: month -> transaction_ids
    by_month: RwLock<HashMap<MonthKey, Vec<TransactionId>>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_month: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk and build the month index
    pub fn load(&self) -> Result<(), DayspendError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_month = self
            .by_month
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        by_month.clear();

        for txn in file_data.transactions {
            by_month.entry(txn.month_key()).or_default().push(txn.id);
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk
    pub fn save(&self) -> Result<(), DayspendError> {
        let data = self
            .data
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = TransactionData { transactions };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, DayspendError> {
        let data = self
            .data
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, newest first
    ///
    /// Returns an owned snapshot: the engine computes over a stable copy,
    /// never over the live collection.
    pub fn get_all(&self) -> Result<Vec<Transaction>, DayspendError> {
        let data = self
            .data
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Get transactions for a month, newest first
    pub fn get_by_month(&self, month: MonthKey) -> Result<Vec<Transaction>, DayspendError> {
        let data = self
            .data
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let by_month = self
            .by_month
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let ids = by_month.get(&month).map(|v| v.as_slice()).unwrap_or(&[]);
        let mut transactions: Vec<_> = ids.iter().filter_map(|id| data.get(id).cloned()).collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Insert or update a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), DayspendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_month = self
            .by_month
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        // Remove from the old month bucket if the date moved
        if let Some(old) = data.get(&txn.id) {
            if let Some(ids) = by_month.get_mut(&old.month_key()) {
                ids.retain(|&id| id != txn.id);
            }
        }

        by_month.entry(txn.month_key()).or_default().push(txn.id);
        data.insert(txn.id, txn);
        Ok(())
    }

    /// Delete a transaction
    pub fn delete(&self, id: TransactionId) -> Result<bool, DayspendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_month = self
            .by_month
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(txn) = data.remove(&id) {
            if let Some(ids) = by_month.get_mut(&txn.month_key()) {
                ids.retain(|&tid| tid != id);
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove all transactions
    pub fn clear(&self) -> Result<usize, DayspendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        let mut by_month = self
            .by_month
            .write()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let removed = data.len();
        data.clear();
        by_month.clear();
        Ok(removed)
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, DayspendError> {
        let data = self
            .data
            .read()
            .map_err(|e| DayspendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
