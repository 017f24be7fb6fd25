//! Core data types parsed from the point-of-sale CSV exports.

use crate::Result;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;
use std::str::FromStr;

/// One row of a spreadsheet range, cells in column order.
pub(crate) type Row = Vec<String>;

// Positional columns of the point-of-sale export. Files with a different layout are rejected.
const DATE_IDX: usize = 0;
const TITLE_IDX: usize = 1;
const QUANTITY_IDX: usize = 3;
const PRICE_IDX: usize = 4;
const TRANSACTION_ID_IDX: usize = 13;
const MIN_COLUMNS: usize = TRANSACTION_ID_IDX + 1;

/// The date format the point-of-sale system exports.
const EXPORT_DATE_FORMAT: &str = "%m/%d/%y";
/// The date format written to the transaction-log sheet.
const SHEET_DATE_FORMAT: &str = "%d/%m/%y";

/// One sale parsed from a row of a point-of-sale export. Immutable once parsed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct SaleRecord {
    sale_date: NaiveDate,
    item_title: String,
    item_quantity: u32,
    item_price: Decimal,
    transaction_id: String,
}

impl SaleRecord {
    pub(crate) fn new(
        sale_date: NaiveDate,
        item_title: impl Into<String>,
        item_quantity: u32,
        item_price: Decimal,
        transaction_id: impl Into<String>,
    ) -> Self {
        Self {
            sale_date,
            item_title: item_title.into(),
            item_quantity,
            item_price,
            transaction_id: transaction_id.into(),
        }
    }

    /// Parses a record from the positional columns of one export row. Any malformed field is an
    /// error; there is no partial-row recovery.
    pub(crate) fn from_export_row(row: &StringRecord) -> Result<Self> {
        if row.len() < MIN_COLUMNS {
            bail!(
                "Expected at least {MIN_COLUMNS} columns but found {}",
                row.len()
            );
        }
        let date_text = &row[DATE_IDX];
        let sale_date = NaiveDate::parse_from_str(date_text, EXPORT_DATE_FORMAT)
            .with_context(|| format!("Unable to parse sale date '{date_text}'"))?;
        let quantity_text = row[QUANTITY_IDX].trim();
        let item_quantity = u32::from_str(quantity_text)
            .with_context(|| format!("Unable to parse quantity '{quantity_text}'"))?;
        let price_text = row[PRICE_IDX].trim();
        let item_price = Decimal::from_str(price_text)
            .with_context(|| format!("Unable to parse price '{price_text}'"))?;
        Ok(Self {
            sale_date,
            item_title: row[TITLE_IDX].to_string(),
            item_quantity,
            item_price,
            transaction_id: row[TRANSACTION_ID_IDX].to_string(),
        })
    }

    pub(crate) fn item_title(&self) -> &str {
        &self.item_title
    }

    pub(crate) fn item_quantity(&self) -> u32 {
        self.item_quantity
    }

    pub(crate) fn item_price(&self) -> Decimal {
        self.item_price
    }

    pub(crate) fn transaction_id(&self) -> &str {
        &self.transaction_id
    }

    /// The sale date as written to the sheet.
    pub(crate) fn sale_date_text(&self) -> String {
        self.sale_date.format(SHEET_DATE_FORMAT).to_string()
    }
}
