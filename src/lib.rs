//! dayspend - Terminal-based daily budget tracker
//!
//! This library provides the core functionality for the dayspend budgeting
//! application. It tracks dated, signed transactions against a monthly
//! spending limit and computes, for any given day, how much budget remains
//! available, including rollover of unspent daily allowance and an adaptive
//! start for months where tracking begins after the 1st.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types and validation reason keys
//! - `models`: Core data models (money, transactions, months, profile)
//! - `engine`: The pure budget allocation and rollover engine
//! - `validate`: Input-validation boundary
//! - `storage`: JSON file storage layer
//! - `audit`: Audit logging system
//! - `services`: Business logic layer
//! - `display`: Terminal rendering
//! - `export`: CSV export
//! - `cli`: CLI command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use dayspend::config::DayspendPaths;
//! use dayspend::storage::Storage;
//!
//! let paths = DayspendPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod validate;

pub use error::{DayspendError, DayspendResult};
