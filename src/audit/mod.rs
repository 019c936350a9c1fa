//! Audit logging system
//!
//! Append-only JSONL log of every create/update/delete that goes through the
//! storage layer, with before/after snapshots for change tracking.

pub mod entry;
pub mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
