//! Output serialization for shaped reports

mod csv;
mod spreadsheet;

pub use csv::render_csv;
pub use spreadsheet::{escape_html, render_spreadsheet};

/// A generated export, ready to hand to a [`FileSink`](crate::FileSink)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Full filename including extension
    pub filename: String,
    /// MIME type the file is served with
    pub content_type: String,
    /// Textual file body
    pub body: String,
}
