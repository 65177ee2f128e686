//! Export dialog state machine
//!
//! `Idle -> Configuring -> Exporting`, where a successful export closes
//! the dialog and a failure returns to `Configuring` for retry. The
//! configuration lives only as long as the dialog; nothing is persisted.

use chrono::{DateTime, NaiveDate, Utc};

use shared::{Branch, ExportConfiguration, InventoryRecord};

use crate::filter::preview_count;
use crate::service::{ExportService, FileSink};

/// Dialog lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Not shown
    Idle,
    /// User is editing the configuration; preview recomputed on each change
    Configuring,
    /// Export succeeded and the dialog closed
    Closed,
}

/// What a submit attempt produced, for the UI alert
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

/// Dialog-scoped state for one export interaction
#[derive(Debug)]
pub struct ExportDialog {
    state: DialogState,
    config: ExportConfiguration,
    exporting: bool,
}

impl ExportDialog {
    /// Open the dialog with default configuration
    pub fn open(today: NaiveDate) -> Self {
        Self {
            state: DialogState::Configuring,
            config: ExportConfiguration::with_defaults(today),
            exporting: false,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn config(&self) -> &ExportConfiguration {
        &self.config
    }

    /// Mutable access for user edits while configuring
    pub fn config_mut(&mut self) -> &mut ExportConfiguration {
        &mut self.config
    }

    /// True while a submit is in flight; the UI shows a loading state
    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Rows the current configuration would export
    pub fn preview_count(&self, snapshot: &[InventoryRecord]) -> usize {
        preview_count(snapshot, &self.config)
    }

    /// Dismiss without exporting; the configuration is discarded
    pub fn cancel(&mut self) {
        self.state = DialogState::Idle;
    }

    /// Run the export with the current configuration
    ///
    /// Success closes the dialog. Any failure leaves it open in
    /// `Configuring` so the user can adjust and retry. The exporting flag
    /// is reset on every path.
    pub fn submit(
        &mut self,
        service: &ExportService,
        snapshot: &[InventoryRecord],
        branches: &[Branch],
        generated_by: &str,
        generated_at: DateTime<Utc>,
        sink: &dyn FileSink,
    ) -> SubmitOutcome {
        self.exporting = true;

        let result = service.export(snapshot, branches, &self.config, generated_by, generated_at, sink);
        self.exporting = false;

        match result {
            Ok(outcome) => {
                self.state = DialogState::Closed;
                let mut message = outcome.success_message();
                if outcome.fell_back_to_csv {
                    message =
                        format!("Excel export failed. Falling back to CSV format.\n\n{}", message);
                }
                SubmitOutcome {
                    success: true,
                    message,
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "export failed");
                self.state = DialogState::Configuring;
                SubmitOutcome {
                    success: false,
                    message: err.user_message(),
                }
            }
        }
    }
}
