//! CSV serialization
//!
//! Every cell is individually double-quote-wrapped and comma-joined, with
//! the metadata block, the header row, and the data rows newline-joined.
//! Internal double quotes are not escaped; this matches the files the rest
//! of the tooling already consumes and is a documented limitation.

use crate::report::ReportDocument;

fn quote_join(cells: &[String]) -> String {
    cells
        .iter()
        .map(|cell| format!("\"{}\"", cell))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render a shaped report as CSV text
pub fn render_csv(document: &ReportDocument) -> String {
    let metadata = document
        .metadata
        .iter()
        .map(|row| quote_join(row))
        .collect::<Vec<_>>()
        .join("\n");
    let headers = quote_join(&document.headers);
    let rows = document
        .rows
        .iter()
        .map(|row| quote_join(row))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}\n{}", metadata, headers, rows)
}
