use clap::Parser;
use color_eyre::Result;
use freqtab::batch::{self, BatchWarning};
use freqtab::cli::{Cli, Command, InputArgs};
use freqtab::config::{AppConfig, ConfigManager};
use freqtab::frequency::SortOrder;
use freqtab::loader::{self, OpenOptions};
use freqtab::{error, export, report};
use log::LevelFilter;
use polars::prelude::DataFrame;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = if cli.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    // Errors are reported once here, not re-raised as a crash.
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
    }
    Ok(())
}

fn run(cli: &Cli) -> error::Result<()> {
    let config = ConfigManager::new("freqtab")?.load()?;
    match &cli.command {
        Command::Analyze {
            input,
            top_n,
            save,
            output_dir,
        } => run_analyze(input, &config, *top_n, *save, output_dir.as_deref()),
        Command::Counts { input } => run_counts(input, &config),
    }
}

/// Columns to analyze: CLI flags win, then config, then the whole table.
fn resolve_columns(input: &InputArgs, config: &AppConfig, table: &DataFrame) -> Vec<String> {
    if !input.columns.is_empty() {
        input.columns.clone()
    } else if !config.columns.is_empty() {
        config.columns.clone()
    } else {
        table
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }
}

fn run_analyze(
    input: &InputArgs,
    config: &AppConfig,
    top_n: Option<usize>,
    save: bool,
    output_dir: Option<&Path>,
) -> error::Result<()> {
    let table = loader::load_table(&input.path, &OpenOptions::from(input))?;
    let columns = resolve_columns(input, config, &table);
    println!("Analyzing {} columns...\n", columns.len());

    let (results, warnings) = batch::analyze_all(&table, &columns, SortOrder::Descending);
    print_warnings(&warnings);

    let top_n = top_n.unwrap_or(config.top_n);
    for result in results.iter() {
        println!("{}", report::format_column_report(result, top_n));
    }

    println!("\n{}", report::format_summary_report(&results));
    println!("{}", "=".repeat(80));
    println!("Analysis complete!");
    println!("{}", "=".repeat(80));

    if !results.is_empty() && should_save(save) {
        let dir = output_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&config.output_dir));
        export::save_results(&results, &dir)?;
        println!("\nAll results saved to directory: {}", dir.display());
    }
    Ok(())
}

fn run_counts(input: &InputArgs, config: &AppConfig) -> error::Result<()> {
    let table = loader::load_table(&input.path, &OpenOptions::from(input))?;
    let columns = resolve_columns(input, config, &table);

    let (results, warnings) = batch::analyze_all(&table, &columns, SortOrder::Ascending);
    print_warnings(&warnings);

    for result in results.iter() {
        println!("{}", report::format_value_counts(result));
    }
    println!("Analysis complete!");
    Ok(())
}

fn print_warnings(warnings: &[BatchWarning]) {
    for warning in warnings {
        println!("Warning: {warning}\n");
    }
}

/// Saving is confirmed by the `--save` flag, or interactively when stdin is
/// a terminal. Piped runs never block on the prompt and never save.
fn should_save(save_flag: bool) -> bool {
    if save_flag {
        return true;
    }
    if !io::stdin().is_terminal() {
        return false;
    }
    print!("\nWould you like to save detailed results to CSV files? (yes/no): ");
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_lowercase().as_str(), "yes" | "y")
}
