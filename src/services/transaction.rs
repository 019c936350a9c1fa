//! Transaction service
//!
//! CRUD over the transaction repository with persistence and audit logging.
//! Amount validation happens before this layer; everything arriving here is
//! already well-formed.

use chrono::NaiveDateTime;

use crate::audit::EntityType;
use crate::error::{DayspendError, DayspendResult};
use crate::models::{Money, Transaction, TransactionId};
use crate::storage::Storage;

/// Fields of a transaction that can be edited after the fact
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub date: Option<NaiveDateTime>,
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub note: Option<String>,
}

impl TransactionPatch {
    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.note.is_none()
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction, persist, and audit
    pub fn add(
        &self,
        date: NaiveDateTime,
        amount: Money,
        category: impl Into<String>,
        note: impl Into<String>,
    ) -> DayspendResult<Transaction> {
        let txn = Transaction::with_note(date, amount, category, note);

        self.storage.transactions.upsert(txn.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(txn.category.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    /// Apply a patch to an existing transaction, persist, and audit
    pub fn update(&self, id: TransactionId, patch: TransactionPatch) -> DayspendResult<Transaction> {
        let before = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| DayspendError::transaction_not_found(id.to_string()))?;

        if patch.is_empty() {
            return Ok(before);
        }

        let mut after = before.clone();
        if let Some(date) = patch.date {
            after.date = date;
        }
        if let Some(amount) = patch.amount {
            after.amount = amount;
        }
        if let Some(category) = patch.category {
            after.category = category;
        }
        if let Some(note) = patch.note {
            after.note = note;
        }
        after.touch();

        self.storage.transactions.upsert(after.clone())?;
        self.storage.transactions.save()?;

        self.storage.log_update(
            EntityType::Transaction,
            id.to_string(),
            Some(after.category.clone()),
            &before,
            &after,
            Some(summarize_change(&before, &after)),
        )?;

        Ok(after)
    }

    /// Delete a transaction, persist, and audit
    pub fn remove(&self, id: TransactionId) -> DayspendResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| DayspendError::transaction_not_found(id.to_string()))?;

        self.storage.transactions.delete(id)?;
        self.storage.transactions.save()?;

        self.storage.log_delete(
            EntityType::Transaction,
            id.to_string(),
            Some(txn.category.clone()),
            &txn,
        )?;

        Ok(txn)
    }

    /// Remove every transaction, persist, and audit
    pub fn clear(&self) -> DayspendResult<usize> {
        let removed = self.storage.transactions.clear()?;
        self.storage.transactions.save()?;

        if removed > 0 {
            self.storage.log_delete(
                EntityType::Transaction,
                "all",
                None,
                &serde_json::json!({ "removed": removed }),
            )?;
        }

        Ok(removed)
    }

    /// Find a transaction by its ID prefix as shown in listings
    ///
    /// Accepts a full UUID, a "txn-" display form, or a unique prefix of
    /// the UUID.
    pub fn find(&self, needle: &str) -> DayspendResult<Transaction> {
        if let Ok(id) = needle.parse::<TransactionId>() {
            if let Some(txn) = self.storage.transactions.get(id)? {
                return Ok(txn);
            }
        }

        let stripped = needle.strip_prefix("txn-").unwrap_or(needle);
        let mut matches: Vec<Transaction> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.id.as_uuid().to_string().starts_with(stripped))
            .collect();

        if matches.len() == 1 {
            Ok(matches.remove(0))
        } else {
            Err(DayspendError::transaction_not_found(needle))
        }
    }
}

fn summarize_change(before: &Transaction, after: &Transaction) -> String {
    let mut parts = Vec::new();
    if before.amount != after.amount {
        parts.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.day() != after.day() {
        parts.push(format!("date: {} -> {}", before.day(), after.day()));
    }
    if before.category != after.category {
        parts.push(format!(
            "category: {} -> {}",
            before.category, after.category
        ));
    }
    if before.note != after.note {
        parts.push("note changed".to_string());
    }
    parts.join(", ")
}
