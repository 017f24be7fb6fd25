//! Computes which candidate rows are genuinely new for a sheet range.
//!
//! Sheet appends are not idempotent, so every write is preceded by a fresh read of the range
//! and a diff against its current contents. Rows compare by exact cell-for-cell equality,
//! never by transaction id alone: expanded rows legitimately share an id and each copy must be
//! checked for presence independently.

use crate::model::Row;

/// Returns the candidates not already present in `existing`. `None` means the range holds no
/// data at all, in which case every candidate is new. An empty result means there is nothing
/// to append.
pub(crate) fn unseen_rows(existing: Option<&[Row]>, candidates: &[Row]) -> Vec<Row> {
    let Some(existing) = existing else {
        return candidates.to_vec();
    };
    candidates
        .iter()
        .filter(|candidate| !existing.contains(candidate))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_absent_range_returns_all_candidates() {
        let candidates = vec![row(&["a", "1"]), row(&["b", "2"])];
        assert_eq!(unseen_rows(None, &candidates), candidates);
    }

    #[test]
    fn test_empty_range_returns_all_candidates() {
        // An empty-but-present range is a different code path from an absent one, with the
        // same observable outcome.
        let candidates = vec![row(&["a", "1"]), row(&["b", "2"])];
        assert_eq!(unseen_rows(Some(&[]), &candidates), candidates);
    }

    #[test]
    fn test_present_rows_filtered() {
        let existing = vec![row(&["a", "1"])];
        let candidates = vec![row(&["a", "1"]), row(&["b", "2"])];
        assert_eq!(unseen_rows(Some(&existing), &candidates), vec![row(&["b", "2"])]);
    }

    #[test]
    fn test_all_present_is_nothing_new() {
        let existing = vec![row(&["a", "1"]), row(&["b", "2"])];
        let candidates = existing.clone();
        assert!(unseen_rows(Some(&existing), &candidates).is_empty());
    }

    #[test]
    fn test_comparison_is_whole_row() {
        // Same transaction id, different title cell: still new.
        let existing = vec![row(&["Lavender (5oz)", "02/11/24", "tx1"])];
        let candidates = vec![row(&["Lavender (3oz)", "02/11/24", "tx1"])];
        assert_eq!(unseen_rows(Some(&existing), &candidates), candidates);
    }
}
