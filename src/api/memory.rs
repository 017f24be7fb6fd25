//! Implements the `SheetStore` trait using in-memory data.
//!
//! Note: this is compiled even in the "production" version of this app so that we can run the
//! whole app, top-to-bottom, without using Google Sheets.
//!
//! Each sheet is held as a full cell grid and ranges are resolved as column spans of it, so a
//! title-only sub-range reads the same cells a wider range wrote, just as it does in a real
//! spreadsheet. Row numbers in range bounds are not modeled; ranges are treated as whole
//! column spans, which is all the program uses.

use crate::api::{Rows, SheetStore};
use crate::Result;
use anyhow::{ensure, Context};
use std::collections::HashMap;

/// Holds one cell grid per sheet, keyed by sheet name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    sheets: HashMap<String, Vec<Vec<String>>>,
}

impl MemoryStore {
    /// Create a new `MemoryStore` seeded with `sheets`. The map key is the sheet name and the
    /// map value is the sheet's full cell grid.
    pub fn new(sheets: HashMap<String, Rows>) -> Self {
        Self { sheets }
    }
}

#[async_trait::async_trait]
impl SheetStore for MemoryStore {
    async fn read(&mut self, range: &str) -> Result<Option<Rows>> {
        let (sheet, start, end) = parse_range(range)?;
        let Some(grid) = self.sheets.get(&sheet) else {
            return Ok(None);
        };
        let mut rows: Rows = grid.iter().map(|row| slice(row, start, end)).collect();
        // Like the real API, rows below the last data row are not returned, and an entirely
        // empty range has no data at all.
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows))
        }
    }

    async fn append(&mut self, range: &str, rows: Rows) -> Result<()> {
        let (sheet, start, end) = parse_range(range)?;
        let grid = self.sheets.entry(sheet).or_default();
        // Appends land below the last row holding data within the addressed columns.
        let mut insert_at = 0;
        for (ix, row) in grid.iter().enumerate() {
            if !slice(row, start, end).is_empty() {
                insert_at = ix + 1;
            }
        }
        for (offset, new_row) in rows.iter().enumerate() {
            write_row(grid, insert_at + offset, start, new_row);
        }
        Ok(())
    }

    async fn update(&mut self, range: &str, rows: Rows) -> Result<()> {
        let (sheet, start, _) = parse_range(range)?;
        let grid = self.sheets.entry(sheet).or_default();
        for (ix, new_row) in rows.iter().enumerate() {
            write_row(grid, ix, start, new_row);
        }
        Ok(())
    }
}

/// Splits `Sheet1!A:C` into the sheet name and zero-based column span.
fn parse_range(range: &str) -> Result<(String, usize, usize)> {
    let (sheet, columns) = range
        .split_once('!')
        .with_context(|| format!("Range '{range}' is missing a sheet name"))?;
    let (start, end) = columns
        .split_once(':')
        .with_context(|| format!("Range '{range}' is missing a column span"))?;
    Ok((sheet.to_string(), column_index(start)?, column_index(end)?))
}

/// The zero-based index of a column bound such as `A` or `AB`; trailing row digits ignored.
fn column_index(bound: &str) -> Result<usize> {
    let letters: String = bound
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    ensure!(
        !letters.is_empty(),
        "Range bound '{bound}' has no column letter"
    );
    let mut ix = 0usize;
    for c in letters.chars() {
        ix = ix * 26 + (c.to_ascii_uppercase() as usize - 'A' as usize + 1);
    }
    Ok(ix - 1)
}

/// The cells of `row` within the span, with trailing empty cells trimmed like the real API.
fn slice(row: &[String], start: usize, end: usize) -> Vec<String> {
    let mut cells: Vec<String> = (start..=end)
        .map(|ix| row.get(ix).cloned().unwrap_or_default())
        .collect();
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

/// Writes `cells` into the grid at `row_ix`, starting at `start_col`, growing as needed.
fn write_row(grid: &mut Vec<Vec<String>>, row_ix: usize, start_col: usize, cells: &[String]) {
    if grid.len() <= row_ix {
        grid.resize(row_ix + 1, Vec::new());
    }
    let row = &mut grid[row_ix];
    let needed = start_col + cells.len();
    if row.len() < needed {
        row.resize(needed, String::new());
    }
    for (ix, cell) in cells.iter().enumerate() {
        row[start_col + ix] = cell.clone();
    }
}
