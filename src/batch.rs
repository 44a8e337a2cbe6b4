//! Frequency analysis over a list of columns.
//!
//! A column that is absent from the table, or that fails to analyze, becomes
//! a [`BatchWarning`] instead of an error: one bad column never blocks the
//! rest of the batch.

use log::warn;
use polars::prelude::DataFrame;
use std::fmt;

use crate::error::Error;
use crate::frequency::{self, FrequencyResult, SortOrder};

/// Per-column frequency results, in the order the columns were requested.
#[derive(Clone, Debug, Default)]
pub struct BatchResult {
    results: Vec<FrequencyResult>,
}

impl BatchResult {
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyResult> {
        self.results.iter()
    }

    /// Look up the result for one column by name.
    pub fn get(&self, column: &str) -> Option<&FrequencyResult> {
        self.results.iter().find(|result| result.column == column)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    fn push(&mut self, result: FrequencyResult) {
        self.results.push(result);
    }
}

/// A column that was skipped during batch analysis, and why.
#[derive(Clone, Debug)]
pub struct BatchWarning {
    pub column: String,
    pub message: String,
}

impl fmt::Display for BatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Column '{}' {}", self.column, self.message)
    }
}

/// Analyze every requested column, skipping failures with a warning.
///
/// Never fails: absent columns and per-column analysis errors are recorded
/// in the returned warnings and logged as they occur.
pub fn analyze_all(
    df: &DataFrame,
    columns: &[String],
    order: SortOrder,
) -> (BatchResult, Vec<BatchWarning>) {
    let mut results = BatchResult::default();
    let mut warnings = Vec::new();

    for column in columns {
        match frequency::analyze_column(df, column, order) {
            Ok(result) => results.push(result),
            Err(Error::ColumnNotFound(_)) => {
                warn!("column '{column}' not found in dataset, skipping");
                warnings.push(BatchWarning {
                    column: column.clone(),
                    message: "not found in dataset, skipping".to_string(),
                });
            }
            Err(err) => {
                warn!("failed to analyze column '{column}': {err}");
                warnings.push(BatchWarning {
                    column: column.clone(),
                    message: format!("could not be analyzed: {err}"),
                });
            }
        }
    }

    (results, warnings)
}
