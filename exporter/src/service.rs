//! Export service
//!
//! Orchestrates one export action: validate the configuration, narrow the
//! snapshot, shape the report, serialize it, and hand the file to a
//! [`FileSink`]. The sink is the only side effect; the snapshot is never
//! mutated.

use chrono::{DateTime, Utc};
use validator::Validate;

use shared::{
    resolve_branch_name, Branch, ExportConfiguration, ExportFormat, InventoryRecord, ReportType,
};

use crate::error::{ExportError, ExportResult};
use crate::filename::report_filename;
use crate::filter::filter_records;
use crate::formats::{render_csv, render_spreadsheet, ExportFile};
use crate::report::{build_document, ReportDocument};

/// Delivers a generated export to the user
///
/// The browser bindings implement this with the object-URL and synthetic
/// anchor click sequence; tests capture the file in memory. Keeping the
/// seam here leaves filtering, shaping, and serialization testable without
/// a browser environment.
pub trait FileSink {
    fn deliver(&self, file: &ExportFile) -> ExportResult<()>;
}

/// What an export produced, for the success notification
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub filename: String,
    pub report_type: ReportType,
    pub branch_name: String,
    pub item_count: usize,
    pub format: ExportFormat,
    /// Spreadsheet generation failed and the file was delivered as CSV
    pub fell_back_to_csv: bool,
}

impl ExportOutcome {
    /// Message shown to the user after a successful export
    pub fn success_message(&self) -> String {
        format!(
            "Export Successful!\n\nReport: {}\nBranch: {}\nItems: {}\nFormat: {}\n\nFile: {}",
            self.report_type.slug().to_uppercase(),
            self.branch_name,
            self.item_count,
            self.format.label(),
            self.filename
        )
    }
}

/// Inventory export service
#[derive(Clone)]
pub struct ExportService {
    spreadsheet_renderer: fn(&ReportDocument) -> ExportResult<String>,
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportService {
    pub fn new() -> Self {
        Self {
            spreadsheet_renderer: render_spreadsheet,
        }
    }

    /// Replace the spreadsheet renderer. Used by tests to force the
    /// generation-failure path.
    pub fn with_spreadsheet_renderer(
        renderer: fn(&ReportDocument) -> ExportResult<String>,
    ) -> Self {
        Self {
            spreadsheet_renderer: renderer,
        }
    }

    /// Human-readable branch label for the report header and filename
    pub fn branch_label(config: &ExportConfiguration, branches: &[Branch]) -> String {
        if config.filters_all_branches() {
            config.branch.clone()
        } else {
            resolve_branch_name(branches, &config.branch)
        }
    }

    /// Run one export action to completion
    ///
    /// Fails without generating a file when the configuration is invalid
    /// or the filtered subset is empty. A spreadsheet generation failure
    /// is logged and falls back to CSV with identical data.
    pub fn export(
        &self,
        snapshot: &[InventoryRecord],
        branches: &[Branch],
        config: &ExportConfiguration,
        generated_by: &str,
        generated_at: DateTime<Utc>,
        sink: &dyn FileSink,
    ) -> ExportResult<ExportOutcome> {
        config
            .validate()
            .map_err(|e| ExportError::InvalidConfiguration(e.to_string()))?;

        tracing::debug!(
            report_type = %config.report_type,
            format = ?config.format,
            "starting export"
        );

        let filtered = filter_records(snapshot, config);
        if filtered.is_empty() {
            tracing::warn!("export aborted: no records match the filters");
            return Err(ExportError::EmptyResult);
        }

        let branch_name = Self::branch_label(config, branches);
        let document = build_document(
            &filtered,
            branches,
            config,
            &branch_name,
            generated_by,
            generated_at,
        );

        let date = generated_at.date_naive();
        let (file, format, fell_back) = match config.format {
            ExportFormat::Csv => (
                ExportFile {
                    filename: report_filename(
                        config.report_type,
                        ExportFormat::Csv,
                        &branch_name,
                        date,
                    ),
                    content_type: ExportFormat::Csv.content_type().to_string(),
                    body: render_csv(&document),
                },
                ExportFormat::Csv,
                false,
            ),
            ExportFormat::Xlsx => match (self.spreadsheet_renderer)(&document) {
                Ok(body) => (
                    ExportFile {
                        filename: report_filename(
                            config.report_type,
                            ExportFormat::Xlsx,
                            &branch_name,
                            date,
                        ),
                        content_type: ExportFormat::Xlsx.content_type().to_string(),
                        body,
                    },
                    ExportFormat::Xlsx,
                    false,
                ),
                Err(err) => {
                    // Export must not fail silently: same data, CSV format.
                    tracing::error!(error = %err, "spreadsheet generation failed, falling back to CSV");
                    (
                        ExportFile {
                            filename: report_filename(
                                config.report_type,
                                ExportFormat::Csv,
                                &branch_name,
                                date,
                            ),
                            content_type: ExportFormat::Csv.content_type().to_string(),
                            body: render_csv(&document),
                        },
                        ExportFormat::Csv,
                        true,
                    )
                }
            },
        };

        sink.deliver(&file)?;

        tracing::info!(
            filename = %file.filename,
            items = filtered.len(),
            fell_back,
            "export delivered"
        );

        Ok(ExportOutcome {
            filename: file.filename,
            report_type: config.report_type,
            branch_name,
            item_count: filtered.len(),
            format,
            fell_back_to_csv: fell_back,
        })
    }
}
