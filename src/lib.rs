//! Frequency tables and value-count reports for delimited data.
//!
//! The pipeline is linear: [`loader`] reads a delimited file into a polars
//! `DataFrame`, [`frequency`] counts distinct values per column, [`batch`]
//! runs the analyzer over many columns with skip-with-warning semantics,
//! [`report`] renders fixed-width console output, and [`export`] optionally
//! persists one frequency CSV per column.

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod frequency;
pub mod loader;
pub mod report;

pub use batch::{analyze_all, BatchResult, BatchWarning};
pub use error::{Error, Result};
pub use frequency::{analyze_column, validate_column, FrequencyResult, SortOrder};
pub use loader::{load_table, OpenOptions};
