//! CSV export for the monthly breakdown

use std::io::Write;
use std::path::Path;

use crate::engine::MonthlyBreakdown;
use crate::error::{DayspendError, DayspendResult};

/// Export a monthly breakdown to a CSV file
pub fn export_breakdown(breakdown: &MonthlyBreakdown, path: &Path) -> DayspendResult<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| DayspendError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
    write_breakdown(breakdown, file)
}

/// Write a monthly breakdown as CSV to any writer
pub fn write_breakdown<W: Write>(breakdown: &MonthlyBreakdown, writer: W) -> DayspendResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "date",
            "spent",
            "expenses_only",
            "available",
            "daily_balance",
            "skipped",
        ])
        .map_err(|e| DayspendError::Export(format!("Failed to write CSV header: {}", e)))?;

    for entry in &breakdown.daily_breakdown {
        csv_writer
            .write_record([
                entry.key.clone(),
                format!("{:.2}", entry.spent.to_major()),
                format!("{:.2}", entry.expenses_only.to_major()),
                format!("{:.2}", entry.available),
                format!("{:.2}", entry.daily_balance),
                entry.is_skipped.to_string(),
            ])
            .map_err(|e| DayspendError::Export(format!("Failed to write CSV row: {}", e)))?;
    }

    csv_writer
        .flush()
        .map_err(|e| DayspendError::Export(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}
