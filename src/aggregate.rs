//! Derives distinct titles and per-title sale counts from the transaction log's title column.
//!
//! The input is always the sheet's current contents read back after the append, never the
//! in-memory batch this run produced, so counts reflect the cumulative history across runs.

use crate::model::Row;
use std::collections::{BTreeMap, BTreeSet};

/// Counts how many rows each title appears in.
pub(crate) fn count_sales(title_rows: &[Row]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for cell in title_rows.iter().flatten() {
        *counts.entry(cell.clone()).or_insert(0) += 1;
    }
    counts
}

/// The set of distinct titles in the title column, iterated in sorted order.
pub(crate) fn distinct_titles(title_rows: &[Row]) -> BTreeSet<String> {
    title_rows.iter().flatten().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_rows(titles: &[&str]) -> Vec<Row> {
        titles.iter().map(|t| vec![t.to_string()]).collect()
    }

    #[test]
    fn test_count_sales() {
        let rows = title_rows(&["Rose", "Lavender", "Rose", "Rose"]);
        let counts = count_sales(&rows);
        assert_eq!(counts.get("Rose"), Some(&3));
        assert_eq!(counts.get("Lavender"), Some(&1));
        assert_eq!(counts.get("Mint"), None);
    }

    #[test]
    fn test_distinct_titles_sorted() {
        let rows = title_rows(&["Rose", "Lavender", "Rose"]);
        let distinct = distinct_titles(&rows);
        let titles: Vec<&String> = distinct.iter().collect();
        assert_eq!(titles, ["Lavender", "Rose"]);
    }

    #[test]
    fn test_empty_column() {
        assert!(count_sales(&[]).is_empty());
        assert!(distinct_titles(&[]).is_empty());
    }
}
