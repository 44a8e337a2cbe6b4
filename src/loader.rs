//! CSV loading into an in-memory [`DataFrame`].
//!
//! The table is read once, eagerly, and treated as read-only by every later
//! stage. Column order follows the header; value types are whatever the
//! polars CSV reader infers (string, numeric, or null).

use log::info;
use polars::prelude::*;
use std::path::Path;

use crate::error::{Error, Result};

/// Options controlling how the input file is read.
#[derive(Clone, Debug, Default)]
pub struct OpenOptions {
    pub delimiter: Option<u8>,
    pub has_header: Option<bool>,
    pub skip_rows: Option<usize>,
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = Some(has_header);
        self
    }

    pub fn with_skip_rows(mut self, skip_rows: usize) -> Self {
        self.skip_rows = Some(skip_rows);
        self
    }
}

/// Load a delimited file into a [`DataFrame`].
///
/// Fails with [`Error::FileNotFound`] when the path does not exist and
/// [`Error::Load`] when the reader cannot parse the contents.
pub fn load_table(path: &Path, options: &OpenOptions) -> Result<DataFrame> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let mut read_options = CsvReadOptions::default();
    if let Some(skip_rows) = options.skip_rows {
        read_options.skip_rows = skip_rows;
    }
    if let Some(has_header) = options.has_header {
        read_options.has_header = has_header;
    }
    if let Some(delimiter) = options.delimiter {
        read_options = read_options.map_parse_options(|opts| opts.with_separator(delimiter));
    }

    let df = read_options
        .try_into_reader_with_file_path(Some(path.into()))?
        .finish()?;

    info!("loaded {} rows from {}", df.height(), path.display());
    info!("shape: {} rows x {} columns", df.height(), df.width());
    info!(
        "columns: [{}]",
        df.get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(df)
}
