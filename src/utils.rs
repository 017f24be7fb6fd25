//! Small helpers shared across the crate.

/// Renders rows as a plain-text table with padded, pipe-separated columns. The result is
/// emitted through the logs so the operator can review exactly what was parsed and what is
/// about to be written.
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (ix, cell) in row.iter().enumerate() {
            if ix < widths.len() {
                widths[ix] = widths[ix].max(cell.len());
            } else {
                widths.push(cell.len());
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers.iter().copied(), &widths));
    let mut rule = String::new();
    for width in &widths {
        rule.push('|');
        rule.push_str(&"-".repeat(width + 2));
    }
    rule.push('|');
    lines.push(rule);
    for row in rows {
        lines.push(format_row(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn format_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut cells: Vec<&str> = cells.collect();
    cells.resize(widths.len(), "");
    let mut line = String::new();
    for (cell, width) in cells.iter().zip(widths.iter().copied()) {
        line.push_str(&format!("| {cell:<width$} "));
    }
    line.push('|');
    line
}
