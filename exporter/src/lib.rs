//! Inventory export engine for the Long Chau Pharmacy Management System
//!
//! Takes an in-memory inventory snapshot (already fetched by the page from
//! the inventory and branch endpoints) plus a user-built export
//! configuration, and produces a downloadable CSV or spreadsheet report.
//! Browser side effects stay behind the [`FileSink`] seam so the core is
//! testable without a browser.

pub mod dialog;
pub mod error;
pub mod filename;
pub mod filter;
pub mod formats;
pub mod report;
pub mod service;
pub mod stats;

pub use dialog::{DialogState, ExportDialog, SubmitOutcome};
pub use error::{ExportError, ExportResult};
pub use filename::{report_filename, report_filename_stem};
pub use filter::{filter_records, preview_count};
pub use formats::{render_csv, render_spreadsheet, ExportFile};
pub use report::{build_document, ReportDocument};
pub use service::{ExportOutcome, ExportService, FileSink};
pub use stats::{browse_filter, category_options, page_slice, total_pages, InventoryStats};
