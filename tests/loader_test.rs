use color_eyre::Result;
use freqtab::loader::{load_table, OpenOptions};
use freqtab::Error;
use std::fs;
use std::path::Path;

mod common;

#[test]
fn loads_rows_and_preserves_header_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = common::write_sample_csv(dir.path());

    let df = load_table(&path, &OpenOptions::new())?;
    assert_eq!(df.height(), 6);
    assert_eq!(df.width(), 3);

    let columns: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
    assert_eq!(columns, vec!["Category", "SellerCountry", "Quantity"]);
    Ok(())
}

#[test]
fn missing_file_is_file_not_found() {
    let err = load_table(Path::new("no/such/file.csv"), &OpenOptions::new()).unwrap_err();
    assert!(matches!(err, Error::FileNotFound(_)));
}

#[test]
fn custom_delimiter_is_honored() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("semicolons.csv");
    fs::write(&path, "Category;Price\nBeauty;10\nTech;20\n")?;

    let df = load_table(&path, &OpenOptions::new().with_delimiter(b';'))?;
    assert_eq!(df.height(), 2);
    assert_eq!(df.width(), 2);
    Ok(())
}

#[test]
fn headerless_files_keep_the_first_row_as_data() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("headerless.csv");
    fs::write(&path, "Beauty,10\nTech,20\nOutdoors,30\n")?;

    let df = load_table(&path, &OpenOptions::new().with_has_header(false))?;
    assert_eq!(df.height(), 3);
    assert_eq!(df.width(), 2);
    Ok(())
}

#[test]
fn skip_rows_drops_leading_junk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("preamble.csv");
    fs::write(&path, "exported 2024-01-01\nCategory,Price\nBeauty,10\n")?;

    let df = load_table(&path, &OpenOptions::new().with_skip_rows(1))?;
    let columns: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
    assert_eq!(columns, vec!["Category", "Price"]);
    assert_eq!(df.height(), 1);
    Ok(())
}
