//! Fixed-width console rendering of frequency results.
//!
//! Purely presentational: these functions format existing results and never
//! alter them. Layout uses 80-character section rules, left-justified value
//! columns, and percentages to two decimal places.

use std::fmt::Write as _;

use crate::batch::BatchResult;
use crate::frequency::FrequencyResult;

const RULE_WIDTH: usize = 80;
const VALUE_WIDTH: usize = 50;
const SUMMARY_VALUE_WIDTH: usize = 30;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn divider() -> String {
    "-".repeat(RULE_WIDTH)
}

/// Truncate a display value to `width` characters, marking the cut with "...".
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let head: String = value.chars().take(width.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        value.to_string()
    }
}

/// Render one column's frequency table: totals header, up to `top_n` ranked
/// (value, count, percentage) rows, an "... and K more" footer when
/// truncated, and most/least-common highlights.
pub fn format_column_report(result: &FrequencyResult, top_n: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "ANALYSIS: {}", result.column.to_uppercase());
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "Total unique values: {}", result.distinct_count());
    let _ = writeln!(out, "Total items: {}", result.total);
    let _ = writeln!(out, "Null/Missing values: {}", result.missing);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", divider());
    let _ = writeln!(out, "{:<50} {:<15} {}", "Value", "Count", "Percentage");
    let _ = writeln!(out, "{}", divider());

    for (value, count) in result.pairs.iter().take(top_n) {
        let _ = writeln!(
            out,
            "{:<50} {:<15} {:>6.2}%",
            truncate(value, VALUE_WIDTH),
            count,
            result.percentage(*count)
        );
    }

    if result.distinct_count() > top_n {
        let remaining = result.distinct_count() - top_n;
        let _ = writeln!(out);
        let _ = writeln!(out, "... and {remaining} more unique values");
    }

    let _ = writeln!(out, "{}", divider());
    if let (Some(most), Some(least)) = (result.most_common(), result.least_common()) {
        let _ = writeln!(out, "Most common: {} ({} occurrences)", most.0, most.1);
        let _ = writeln!(out, "Least common: {} ({} occurrences)", least.0, least.1);
    }
    let _ = writeln!(out, "{}", rule());
    out
}

/// Render the cross-column summary: one row per analyzed column with its
/// distinct-value count and most-common value.
pub fn format_summary_report(results: &BatchResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out, "SUMMARY REPORT");
    let _ = writeln!(out, "{}", rule());
    let _ = writeln!(out);
    let _ = writeln!(out, "Total columns analyzed: {}", results.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", divider());
    let _ = writeln!(
        out,
        "{:<30} {:<20} {}",
        "Column", "Unique Values", "Most Common Value"
    );
    let _ = writeln!(out, "{}", divider());

    for result in results.iter() {
        if let Some((value, count)) = result.most_common() {
            let _ = writeln!(
                out,
                "{:<30} {:<20} {} ({})",
                result.column,
                result.distinct_count(),
                truncate(value, SUMMARY_VALUE_WIDTH),
                count
            );
        } else {
            let _ = writeln!(out, "{:<30} {:<20} -", result.column, result.distinct_count());
        }
    }

    let _ = writeln!(out, "{}", rule());
    out
}

/// Render the plain value-counts listing used by the `counts` report: every
/// pair in the result's stored order, no truncation.
pub fn format_value_counts(result: &FrequencyResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<50} {}", result.column, "count");
    let _ = writeln!(out, "{}", divider());
    for (value, count) in &result.pairs {
        let _ = writeln!(out, "{value:<50} {count}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", rule());
    out
}
