//! Error types for freqtab operations.
//!
//! One enum covers the whole pipeline: loading, column validation, export,
//! and config parsing. Batch analysis downgrades per-column failures to
//! warnings (see [`crate::batch`]); everything else propagates to the
//! caller with `?` and is reported once at the top level.

use polars::error::PolarsError;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Input file does not exist.
    FileNotFound(PathBuf),

    /// Input file exists but could not be read or parsed.
    Load(String),

    /// Requested column is absent from the table schema.
    ColumnNotFound(String),

    /// Output directory or file could not be written.
    Export(String),

    /// Config file could not be located, read, or parsed.
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "file not found: {}", path.display()),
            Self::Load(msg) => write!(f, "error reading input file: {msg}"),
            Self::ColumnNotFound(column) => {
                write!(f, "column '{column}' not found in the dataset")
            }
            Self::Export(msg) => write!(f, "export failed: {msg}"),
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<PolarsError> for Error {
    fn from(err: PolarsError) -> Self {
        Self::Load(err.to_string())
    }
}

/// Result type alias for freqtab operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_missing_column() {
        let err = Error::ColumnNotFound("Category".to_string());
        assert_eq!(err.to_string(), "column 'Category' not found in the dataset");
    }

    #[test]
    fn polars_errors_convert_to_load() {
        let err: Error = PolarsError::NoData("empty CSV".into()).into();
        assert!(matches!(err, Error::Load(_)));
    }
}
