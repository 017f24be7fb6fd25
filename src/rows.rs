//! Builds transaction-log rows from sale records.
//!
//! Titles matching the configured packaging-marker word exist in both 3oz and 5oz packaging,
//! but the export title carries no packaging text; only the price tells the two apart. Such
//! titles are rewritten with a "(5oz)" or "(3oz)" suffix. Multi-quantity sales are expanded
//! into one row per unit, with a numeric suffix on the transaction id so the rows stay
//! distinguishable in the sheet despite sharing a source transaction id.

use crate::model::{Row, SaleRecord};
use crate::Result;
use anyhow::{ensure, Context};
use regex::Regex;
use rust_decimal::Decimal;

const FIVE_OUNCE_SUFFIX: &str = "(5oz)";
const THREE_OUNCE_SUFFIX: &str = "(3oz)";

/// Rewrites titles and expands records into their transaction-log rows.
pub(crate) struct RowBuilder {
    marker: Regex,
    five_ounce_prices: Vec<Decimal>,
}

impl RowBuilder {
    /// Compiles the word-boundary pattern for the packaging-marker word.
    pub(crate) fn new(ounce_differentiator: &str, five_ounce_prices: &[Decimal]) -> Result<Self> {
        let pattern = format!(r"\b{}\b", regex::escape(ounce_differentiator));
        let marker = Regex::new(&pattern)
            .with_context(|| format!("Invalid packaging-marker pattern '{pattern}'"))?;
        Ok(Self {
            marker,
            five_ounce_prices: five_ounce_prices.to_vec(),
        })
    }

    /// The title as written to the sheet. Unmarked titles pass through unchanged; marked titles
    /// have the marker text removed and the price-derived packaging suffix appended. The
    /// removed span is the actual match, not a fixed character count.
    fn display_title(&self, record: &SaleRecord) -> String {
        let title = record.item_title();
        let Some(found) = self.marker.find(title) else {
            return title.to_string();
        };
        let mut base = title[..found.start()].trim_end().to_string();
        base.push_str(&title[found.end()..]);
        let suffix = if self.five_ounce_prices.contains(&record.item_price()) {
            FIVE_OUNCE_SUFFIX
        } else {
            THREE_OUNCE_SUFFIX
        };
        format!("{}{suffix}", base.trim())
    }

    /// Expands one record into `[display_title, sale_date, transaction_id]` rows, one per unit
    /// sold. For quantities above one, each copy's transaction id gets a " (k)" suffix,
    /// k = 1..=quantity.
    pub(crate) fn expand(&self, record: &SaleRecord) -> Result<Vec<Row>> {
        ensure!(
            record.item_quantity() > 0,
            "Transaction {} has a zero quantity, which the export should never contain",
            record.transaction_id()
        );
        let base: Row = vec![
            self.display_title(record),
            record.sale_date_text(),
            record.transaction_id().to_string(),
        ];
        if record.item_quantity() == 1 {
            return Ok(vec![base]);
        }
        let mut rows = Vec::with_capacity(record.item_quantity() as usize);
        for k in 1..=record.item_quantity() {
            let mut row = base.clone();
            row[2] = format!("{} ({k})", record.transaction_id());
            rows.push(row);
        }
        Ok(rows)
    }

    /// Expands every record, preserving record order.
    pub(crate) fn expand_all(&self, records: &[SaleRecord]) -> Result<Vec<Row>> {
        let mut rows = Vec::new();
        for record in records {
            rows.extend(self.expand(record)?);
        }
        Ok(rows)
    }
}
