//! Audit log CLI command

use crate::error::DayspendResult;
use crate::storage::Storage;

/// Show recent audit log entries
pub fn handle_audit_command(storage: &Storage, limit: usize) -> DayspendResult<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("Audit log is empty.");
        return Ok(());
    }

    println!(
        "Showing {} of {} audit entries:",
        entries.len(),
        storage.audit().entry_count()?
    );
    println!();

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
