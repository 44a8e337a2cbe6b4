use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::loader::OpenOptions;

/// Command-line arguments for freqtab
#[derive(Parser, Debug)]
#[command(version, about = "freqtab - frequency tables for delimited data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(long = "debug", action, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Ranked frequency analysis per column, with a cross-column summary
    /// and optional CSV export of the full frequency tables
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Number of top values to display per column
        #[arg(long = "top-n")]
        top_n: Option<usize>,

        /// Save per-column frequency tables without prompting
        #[arg(long = "save", action)]
        save: bool,

        /// Directory to write exported frequency tables to
        #[arg(long = "output-dir")]
        output_dir: Option<PathBuf>,
    },

    /// Plain value-counts listing per column, least common first
    Counts {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Input file selection shared by both report types.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    pub path: PathBuf,

    /// Column to analyze (repeatable); defaults to the config file's
    /// columns, then to every column in the table
    #[arg(short = 'c', long = "column")]
    pub columns: Vec<String>,

    /// Specify the delimiter to use when reading the file
    #[arg(long = "delimiter")]
    pub delimiter: Option<u8>,

    /// Specify that the file has no header
    #[arg(long = "no-header", action)]
    pub no_header: bool,

    /// Skip this many rows when reading the file
    #[arg(long = "skip-rows")]
    pub skip_rows: Option<usize>,
}

impl From<&InputArgs> for OpenOptions {
    fn from(args: &InputArgs) -> Self {
        let mut opts = OpenOptions::new();
        if let Some(delimiter) = args.delimiter {
            opts = opts.with_delimiter(delimiter);
        }
        if args.no_header {
            opts = opts.with_has_header(false);
        }
        if let Some(skip_rows) = args.skip_rows {
            opts = opts.with_skip_rows(skip_rows);
        }
        opts
    }
}
