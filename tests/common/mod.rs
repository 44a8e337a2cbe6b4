#![allow(dead_code)]

use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Small supply-chain-shaped table used across the integration tests.
pub fn sample_table() -> DataFrame {
    df!(
        "Category" => ["Beauty", "Beauty", "Tech", "Outdoors", "Beauty", "Tech"],
        "SellerCountry" => ["China", "USA", "China", "India", "China", "USA"],
        "Quantity" => [1i32, 2, 3, 4, 5, 6],
    )
    .unwrap()
}

/// Single-column table with nulls for missing-value accounting tests.
pub fn table_with_missing() -> DataFrame {
    df!(
        "OrderStatus" => [Some("Shipped"), None, Some("Pending"), Some("Shipped"), None],
    )
    .unwrap()
}

/// Write the sample table as a CSV file under `dir` and return its path.
pub fn write_sample_csv(dir: &Path) -> PathBuf {
    let path = dir.join("sample.csv");
    let mut df = sample_table();
    let mut file = File::create(&path).unwrap();
    CsvWriter::new(&mut file).finish(&mut df).unwrap();
    path
}
