//! Common types used across the platform

use serde::{Deserialize, Serialize};
use std::fmt;

/// Threshold applied when an inventory record carries none
pub const DEFAULT_THRESHOLD: u32 = 30;

/// Wildcard sentinel for the branch filter
pub const ALL_BRANCHES: &str = "All Branches";

/// Wildcard sentinel for the category filter
pub const ALL_CATEGORIES: &str = "All Categories";

/// Wildcard sentinel for the status filter
pub const ALL_STATUS: &str = "All Status";

/// Derived stock-level classification
///
/// Never persisted; always recomputed from quantity and threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// Classify a quantity against a threshold (default 30 when absent)
    pub fn classify(quantity: u32, threshold: Option<u32>) -> Self {
        let threshold = threshold.unwrap_or(DEFAULT_THRESHOLD);
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Display label as shown in the UI and matched by the status filter
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::InStock => "IN STOCK",
            StockStatus::LowStock => "LOW STOCK",
            StockStatus::OutOfStock => "OUT OF STOCK",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Predefined report shapes for inventory exports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Summary,
    Detailed,
    LowStock,
    OutOfStock,
}

impl ReportType {
    /// URL/filename-safe identifier
    pub fn slug(&self) -> &'static str {
        match self {
            ReportType::Summary => "summary",
            ReportType::Detailed => "detailed",
            ReportType::LowStock => "lowstock",
            ReportType::OutOfStock => "outofstock",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Supported export output formats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    /// Extension the user requests
    pub fn requested_extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Extension actually delivered. The spreadsheet path emits a legacy
    /// HTML table, so an `.xlsx` request is delivered as `.xls`.
    pub fn delivered_extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xls",
        }
    }

    /// MIME type of the generated file
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8;",
            ExportFormat::Xlsx => "application/vnd.ms-excel;charset=utf-8;",
        }
    }

    /// Uppercase label used in report metadata
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "XLSX",
        }
    }
}
