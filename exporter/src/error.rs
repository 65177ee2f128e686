//! Error handling for the inventory export engine
//!
//! All errors are recovered at the dialog boundary; none propagate to
//! crash the page. Each variant maps to a user-facing alert message.

use thiserror::Error;

/// Export error types
#[derive(Error, Debug)]
pub enum ExportError {
    /// The active filters matched zero records; no file was generated
    #[error("no records match the export filters")]
    EmptyResult,

    /// The export configuration failed validation
    #[error("invalid export configuration: {0}")]
    InvalidConfiguration(String),

    /// Spreadsheet (HTML table) generation failed; the caller falls back
    /// to CSV with the same data
    #[error("spreadsheet generation failed: {0}")]
    Spreadsheet(String),

    /// Handing the file to the user failed
    #[error("file delivery failed: {0}")]
    Delivery(String),

    /// Anything else that went wrong during export
    #[error("export failed")]
    Unexpected(#[from] anyhow::Error),
}

impl ExportError {
    /// Message shown to the user in a modal alert
    pub fn user_message(&self) -> String {
        match self {
            ExportError::EmptyResult => {
                "No data matches your export criteria. Please adjust your filters.".to_string()
            }
            ExportError::InvalidConfiguration(_) => {
                "Please select report type and format.".to_string()
            }
            ExportError::Spreadsheet(_) => {
                "Excel export failed. Falling back to CSV format.".to_string()
            }
            ExportError::Delivery(msg) => {
                format!("Export failed. Please try again or contact IT support.\n\nError: {}", msg)
            }
            ExportError::Unexpected(err) => {
                format!("Export failed. Please try again or contact IT support.\n\nError: {}", err)
            }
        }
    }
}

/// Result type alias for the export engine
pub type ExportResult<T> = Result<T, ExportError>;
