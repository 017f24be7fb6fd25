//! Builds the item-sales summary sheet and keeps its title roster aligned.
//!
//! The summary sheet joins two ranges by row index: the title column (the roster) and the
//! value range holding `[make_cost, selling_price, sale_count]`. The roster is append-only;
//! reordering it without reordering the values would silently corrupt the join, so existing
//! entries are never moved or removed.

use crate::config::CatalogEntry;
use crate::model::Row;
use std::collections::{BTreeMap, BTreeSet};

/// Written in place of cost and price when a title has no catalog entry. A miss is visible in
/// the sheet rather than fatal to the run.
pub(crate) const NOT_FOUND: &str = "ERR: NOT FOUND";

/// The summary sheet's ordered title column, reconciled against the titles observed in the
/// transaction log.
pub(crate) struct Roster {
    titles: Vec<String>,
    added: Vec<String>,
    initialized: bool,
}

impl Roster {
    /// Reconciles the sheet's existing title column (`None` when the sheet holds no titles at
    /// all) against the distinct titles observed in the transaction log. Existing order is
    /// preserved; missing titles are appended at the end in sorted order.
    pub(crate) fn reconcile(existing: Option<Vec<String>>, observed: &BTreeSet<String>) -> Self {
        match existing {
            None => Self {
                titles: observed.iter().cloned().collect(),
                added: observed.iter().cloned().collect(),
                initialized: true,
            },
            Some(mut titles) => {
                let mut added = Vec::new();
                for title in observed {
                    if !titles.contains(title) {
                        titles.push(title.clone());
                        added.push(title.clone());
                    }
                }
                Self {
                    titles,
                    added,
                    initialized: false,
                }
            }
        }
    }

    /// Every roster title, in sheet order.
    pub(crate) fn titles(&self) -> &[String] {
        &self.titles
    }

    /// The titles this reconciliation added.
    pub(crate) fn added(&self) -> &[String] {
        &self.added
    }

    /// True when the sheet held no titles and the whole column must be written, rather than
    /// appending the additions.
    pub(crate) fn initialized(&self) -> bool {
        self.initialized
    }

    /// The full title column as single-cell sheet rows.
    pub(crate) fn title_rows(&self) -> Vec<Row> {
        self.titles.iter().map(|t| vec![t.clone()]).collect()
    }

    /// The added titles as single-cell sheet rows, for a title-column append.
    pub(crate) fn added_rows(&self) -> Vec<Row> {
        self.added.iter().map(|t| vec![t.clone()]).collect()
    }
}

/// Builds one `[make_cost, selling_price, sale_count]` row per roster title, in roster order.
/// A title missing from the catalog gets the sentinel in both value cells; a title with no
/// sales gets a zero count.
pub(crate) fn build_rows(
    roster: &Roster,
    counts: &BTreeMap<String, usize>,
    catalog: &[CatalogEntry],
) -> Vec<Row> {
    roster
        .titles()
        .iter()
        .map(|title| {
            let entry = catalog.iter().find(|e| e.title() == title);
            let make_cost = entry
                .map(|e| e.make_cost().to_string())
                .unwrap_or_else(|| NOT_FOUND.to_string());
            let selling_price = entry
                .map(|e| e.selling_price().to_string())
                .unwrap_or_else(|| NOT_FOUND.to_string());
            let count = counts.get(title).copied().unwrap_or(0);
            vec![make_cost, selling_price, count.to_string()]
        })
        .collect()
}
