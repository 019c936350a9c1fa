//! Data export

pub mod csv;

pub use csv::export_breakdown;
