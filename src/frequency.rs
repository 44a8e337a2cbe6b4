//! Per-column value frequency analysis.
//!
//! Values are grouped by their rendered string (the same rendering used for
//! display), counted in first-encountered order, then stable-sorted by count
//! in the requested direction. The stable sort keeps equal counts in
//! encounter order, so output is deterministic across runs.

use polars::prelude::*;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Direction of the count ordering in a [`FrequencyResult`].
///
/// Always passed explicitly: the ranked analysis report uses `Descending`,
/// the plain value-counts listing uses `Ascending`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Descending,
    Ascending,
}

/// Ranked (value, count) statistics for one column.
#[derive(Clone, Debug)]
pub struct FrequencyResult {
    /// Column the counts were computed from.
    pub column: String,
    /// Unique values with their occurrence counts, sorted per `order`.
    pub pairs: Vec<(String, usize)>,
    /// Number of non-missing rows; equals the sum of all counts.
    pub total: usize,
    /// Number of null entries, tracked separately from the ranked pairs.
    pub missing: usize,
    /// Direction `pairs` is sorted in.
    pub order: SortOrder,
}

impl FrequencyResult {
    /// Number of unique non-missing values.
    pub fn distinct_count(&self) -> usize {
        self.pairs.len()
    }

    /// Share of the non-missing total for one count, in percent.
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }

    /// The highest-count pair, regardless of sort direction.
    pub fn most_common(&self) -> Option<&(String, usize)> {
        match self.order {
            SortOrder::Descending => self.pairs.first(),
            SortOrder::Ascending => self.pairs.last(),
        }
    }

    /// The lowest-count pair, regardless of sort direction.
    pub fn least_common(&self) -> Option<&(String, usize)> {
        match self.order {
            SortOrder::Descending => self.pairs.last(),
            SortOrder::Ascending => self.pairs.first(),
        }
    }
}

/// Confirm that `column` exists in the table schema.
pub fn validate_column(df: &DataFrame, column: &str) -> Result<()> {
    if df
        .get_column_names()
        .iter()
        .any(|name| name.as_str() == column)
    {
        Ok(())
    } else {
        Err(Error::ColumnNotFound(column.to_string()))
    }
}

/// Count occurrences of each distinct non-missing value in `column`.
///
/// Nulls are excluded from the pairs and reported via
/// [`FrequencyResult::missing`].
pub fn analyze_column(df: &DataFrame, column: &str, order: SortOrder) -> Result<FrequencyResult> {
    validate_column(df, column)?;
    let series = df.column(column)?.as_materialized_series();

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut pairs: Vec<(String, usize)> = Vec::new();
    let mut missing = 0usize;

    for value in series.iter() {
        match value {
            AnyValue::Null => missing += 1,
            value => {
                let rendered = value.str_value();
                if let Some(at) = positions.get(rendered.as_ref()).copied() {
                    pairs[at].1 += 1;
                } else {
                    positions.insert(rendered.to_string(), pairs.len());
                    pairs.push((rendered.into_owned(), 1));
                }
            }
        }
    }

    // sort_by is stable: ties keep first-encountered order
    match order {
        SortOrder::Descending => pairs.sort_by(|a, b| b.1.cmp(&a.1)),
        SortOrder::Ascending => pairs.sort_by(|a, b| a.1.cmp(&b.1)),
    }

    let total = pairs.iter().map(|(_, count)| count).sum();
    Ok(FrequencyResult {
        column: column.to_string(),
        pairs,
        total,
        missing,
        order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tie_table() -> DataFrame {
        df!("Status" => ["b", "a", "b", "a", "c"]).unwrap()
    }

    #[test]
    fn ties_keep_first_encountered_order() {
        let df = tie_table();
        let result = analyze_column(&df, "Status", SortOrder::Descending).unwrap();
        assert_eq!(
            result.pairs,
            vec![
                ("b".to_string(), 2),
                ("a".to_string(), 2),
                ("c".to_string(), 1)
            ]
        );
    }

    #[test]
    fn most_and_least_common_follow_counts_not_position() {
        let df = tie_table();
        let asc = analyze_column(&df, "Status", SortOrder::Ascending).unwrap();
        assert_eq!(asc.pairs[0], ("c".to_string(), 1));
        assert_eq!(asc.most_common().unwrap().1, 2);
        assert_eq!(asc.least_common().unwrap(), &("c".to_string(), 1));

        let desc = analyze_column(&df, "Status", SortOrder::Descending).unwrap();
        assert_eq!(desc.most_common().unwrap(), &("b".to_string(), 2));
        assert_eq!(desc.least_common().unwrap(), &("c".to_string(), 1));
    }

    #[test]
    fn percentage_of_empty_result_is_zero() {
        let result = FrequencyResult {
            column: "empty".to_string(),
            pairs: Vec::new(),
            total: 0,
            missing: 0,
            order: SortOrder::Descending,
        };
        assert_eq!(result.percentage(0), 0.0);
        assert!(result.most_common().is_none());
    }
}
