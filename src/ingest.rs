//! Reads the point-of-sale CSV exports into sale records.

use crate::model::SaleRecord;
use crate::{utils, Result};
use anyhow::Context;
use std::path::Path;
use tracing::{debug, info};

/// Reads every file in `dir` as a point-of-sale export, skipping one header row per file, and
/// concatenates the parsed records. Files are visited in directory-listing order, which is
/// unspecified. A malformed row anywhere aborts the whole run.
pub(crate) fn read_exports(dir: &Path) -> Result<Vec<SaleRecord>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Unable to read the input directory {}", dir.display()))?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Unable to list the input directory {}", dir.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_records = read_export_file(&path)?;
        debug!(
            "Parsed {} records from {}",
            file_records.len(),
            path.display()
        );
        records.extend(file_records);
    }

    // Full listing for operator review.
    let listing: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            vec![
                r.sale_date_text(),
                r.item_title().to_string(),
                r.item_quantity().to_string(),
                r.item_price().to_string(),
                r.transaction_id().to_string(),
            ]
        })
        .collect();
    info!(
        "Transaction data from reading csv files:\n\n{}",
        utils::render_table(
            &["sale date", "item title", "quantity", "price", "transaction id"],
            &listing
        )
    );
    Ok(records)
}

/// Parses one export file. The first row is a header and is skipped.
fn read_export_file(path: &Path) -> Result<Vec<SaleRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Unable to open export file {}", path.display()))?;
    let mut records = Vec::new();
    for (ix, result) in reader.records().enumerate() {
        let row =
            result.with_context(|| format!("Malformed CSV row in {}", path.display()))?;
        let record = SaleRecord::from_export_row(&row)
            .with_context(|| format!("Row {} of {}", ix + 2, path.display()))?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const HEADER: &str = "Sale Date,Item Name,Buyer,Quantity,Price,Coupon Code,Coupon Details,\
Discount Amount,Shipping Discount,Order Shipping,Order Sales Tax,Item Total,Currency,\
Transaction ID";

    fn write_export(dir: &Path, name: &str, rows: &[&str]) {
        let mut content = String::from(HEADER);
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn test_record_count_is_rows_minus_headers() {
        let dir = TempDir::new().unwrap();
        write_export(
            dir.path(),
            "a.csv",
            &[
                "11/02/24,Rose Soap,someone,1,4.99,,,,,,,4.99,USD,tx1",
                "11/03/24,Lavender Candle,someone,2,9.99,,,,,,,19.98,USD,tx2",
            ],
        );
        write_export(
            dir.path(),
            "b.csv",
            &["11/04/24,Mint Balm,someone,1,3.50,,,,,,,3.50,USD,tx3"],
        );
        let records = read_exports(dir.path()).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_fields_parsed_positionally() {
        let dir = TempDir::new().unwrap();
        write_export(
            dir.path(),
            "a.csv",
            &["11/02/24,Rose Soap,someone,2,4.99,,,,,,,9.98,USD,tx1"],
        );
        let records = read_exports(dir.path()).unwrap();
        assert_eq!(records[0].item_title(), "Rose Soap");
        assert_eq!(records[0].item_quantity(), 2);
        assert_eq!(records[0].transaction_id(), "tx1");
        assert_eq!(records[0].sale_date_text(), "02/11/24");
    }

    #[test]
    fn test_malformed_row_aborts() {
        let dir = TempDir::new().unwrap();
        write_export(
            dir.path(),
            "a.csv",
            &["not-a-date,Rose Soap,someone,1,4.99,,,,,,,4.99,USD,tx1"],
        );
        assert!(read_exports(dir.path()).is_err());
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        let records = read_exports(dir.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_exports(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn test_subdirectories_skipped() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        write_export(
            dir.path(),
            "a.csv",
            &["11/02/24,Rose Soap,someone,1,4.99,,,,,,,4.99,USD,tx1"],
        );
        let records = read_exports(dir.path()).unwrap();
        assert_eq!(records.len(), 1);
    }
}
