//! Persisting batch results as one CSV per analyzed column.

use log::info;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::batch::BatchResult;
use crate::error::{Error, Result};
use crate::frequency::FrequencyResult;

/// Directory used when no output directory is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "analysis_results";

/// Write each column's full (value, count) table to
/// `<output_dir>/<column>_counts.csv`, creating the directory if needed.
///
/// Aborts on the first directory or file failure; a partial export is never
/// reported as success. Returns the paths written.
pub fn save_results(results: &BatchResult, output_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output_dir).map_err(|err| {
        Error::Export(format!(
            "could not create directory {}: {err}",
            output_dir.display()
        ))
    })?;

    let mut written = Vec::with_capacity(results.len());
    for result in results.iter() {
        let path = output_dir.join(format!("{}_counts.csv", result.column));
        write_result(result, &path)
            .map_err(|err| Error::Export(format!("could not write {}: {err}", path.display())))?;
        info!("saved {} analysis to {}", result.column, path.display());
        written.push(path);
    }
    Ok(written)
}

fn write_result(result: &FrequencyResult, path: &Path) -> PolarsResult<()> {
    let values: Vec<String> = result.pairs.iter().map(|(value, _)| value.clone()).collect();
    let counts: Vec<u32> = result.pairs.iter().map(|(_, count)| *count as u32).collect();
    let mut df = DataFrame::new(vec![
        Series::new(result.column.as_str().into(), values).into(),
        Series::new("Count".into(), counts).into(),
    ])?;
    let file = File::create(path)?;
    CsvWriter::new(file).finish(&mut df)?;
    Ok(())
}
