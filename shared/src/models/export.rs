//! Export configuration models

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::types::{
    ExportFormat, ReportType, ALL_BRANCHES, ALL_CATEGORIES, ALL_STATUS,
};

/// User-chosen filters and output format for one export action
///
/// Built with defaults when the export dialog opens, mutated by user input,
/// validated, and consumed exactly once. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_date_order"))]
pub struct ExportConfiguration {
    pub report_type: ReportType,
    pub format: ExportFormat,

    /// Exact category match, or the `All Categories` sentinel
    #[validate(length(min = 1))]
    pub category: String,

    /// Exact status label match, or the `All Status` sentinel
    #[validate(length(min = 1))]
    pub status: String,

    /// Branch id as an opaque string, or the `All Branches` sentinel
    #[validate(length(min = 1))]
    pub branch: String,

    /// Carried into report metadata only; not applied as a data filter
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,

    /// Keep records with quantity at or below this value; 0 disables
    #[serde(default)]
    pub stock_threshold: u32,
}

fn validate_date_order(config: &ExportConfiguration) -> Result<(), ValidationError> {
    if config.date_from > config.date_to {
        return Err(ValidationError::new("date_range_inverted"));
    }
    Ok(())
}

impl ExportConfiguration {
    /// Dialog defaults: detailed CSV over all branches, categories and
    /// statuses, metadata date range covering the last 30 days
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            report_type: ReportType::Detailed,
            format: ExportFormat::Csv,
            category: ALL_CATEGORIES.to_string(),
            status: ALL_STATUS.to_string(),
            branch: ALL_BRANCHES.to_string(),
            date_from: today - Duration::days(30),
            date_to: today,
            stock_threshold: 0,
        }
    }

    pub fn filters_all_branches(&self) -> bool {
        self.branch == ALL_BRANCHES
    }

    pub fn filters_all_categories(&self) -> bool {
        self.category == ALL_CATEGORIES
    }

    pub fn filters_all_statuses(&self) -> bool {
        self.status == ALL_STATUS
    }
}
