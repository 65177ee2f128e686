//! Report shaping
//!
//! Turns a filtered inventory subset into the column/row layout for the
//! selected report type, with the metadata header block prepended to every
//! export regardless of output format.

use chrono::{DateTime, NaiveDate, Utc};

use shared::{resolve_branch_name, Branch, ExportConfiguration, InventoryRecord, ReportType};

/// A fully shaped report, ready for serialization
///
/// `metadata` rows render before the column header row in both formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    pub metadata: Vec<Vec<String>>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reorder urgency for low-stock lines
fn reorder_priority(quantity: u32) -> &'static str {
    if quantity <= 5 {
        "High"
    } else if quantity <= 15 {
        "Medium"
    } else {
        "Low"
    }
}

/// Restock urgency for out-of-stock lines. Critical when the outage length
/// is unknown or above a week.
fn outage_priority(days_out: Option<i64>) -> &'static str {
    match days_out {
        None => "Critical",
        Some(days) if days > 7 => "Critical",
        Some(_) => "High",
    }
}

/// Whole days since the last restock, when a restock date is known
fn days_out_of_stock(last_restocked: Option<NaiveDate>, today: NaiveDate) -> Option<i64> {
    last_restocked.map(|date| (today - date).num_days())
}

fn name_cell(item: &InventoryRecord) -> String {
    item.name.clone().unwrap_or_else(|| "Unknown".to_string())
}

fn category_cell(item: &InventoryRecord) -> String {
    item.category.clone().unwrap_or_else(|| "Unknown".to_string())
}

fn location_cell(item: &InventoryRecord, branches: &[Branch]) -> String {
    item.branch_location
        .clone()
        .unwrap_or_else(|| resolve_branch_name(branches, &item.branch_id))
}

fn last_restocked_cell(item: &InventoryRecord) -> String {
    item.last_restocked
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Column headers for a report type
pub fn report_headers(report_type: ReportType) -> Vec<String> {
    let headers: &[&str] = match report_type {
        ReportType::Summary => &[
            "Product Name",
            "Category",
            "Branch Location",
            "Current Stock",
            "Status",
            "Total Value ($)",
        ],
        ReportType::Detailed => &[
            "Product ID",
            "Product Name",
            "Category",
            "Branch ID",
            "Branch Location",
            "Current Stock",
            "Threshold",
            "Status",
            "Last Updated",
            "Unit Cost ($)",
            "Total Value ($)",
        ],
        ReportType::LowStock => &[
            "Product Name",
            "Category",
            "Branch Location",
            "Current Stock",
            "Threshold",
            "Shortage",
            "Reorder Priority",
        ],
        ReportType::OutOfStock => &[
            "Product Name",
            "Category",
            "Branch Location",
            "Days Out of Stock",
            "Last Updated",
            "Priority",
        ],
    };
    headers.iter().map(|h| h.to_string()).collect()
}

/// Shape the data rows for a report type
///
/// The low-stock and out-of-stock reports apply their own quantity filter
/// on top of the already filtered subset, so a low-stock report never
/// contains a zero-quantity row and vice versa.
pub fn report_rows(
    report_type: ReportType,
    records: &[&InventoryRecord],
    branches: &[Branch],
    today: NaiveDate,
) -> Vec<Vec<String>> {
    match report_type {
        ReportType::Summary => records
            .iter()
            .map(|item| {
                vec![
                    name_cell(item),
                    category_cell(item),
                    location_cell(item, branches),
                    item.quantity.to_string(),
                    item.status().label().to_string(),
                    item.total_value().to_string(),
                ]
            })
            .collect(),
        ReportType::Detailed => records
            .iter()
            .map(|item| {
                vec![
                    item.product_id.clone(),
                    name_cell(item),
                    category_cell(item),
                    item.branch_id.clone(),
                    location_cell(item, branches),
                    item.quantity.to_string(),
                    item.effective_threshold().to_string(),
                    item.status().label().to_string(),
                    last_restocked_cell(item),
                    item.unit_cost().round_dp(2).to_string(),
                    item.total_value().to_string(),
                ]
            })
            .collect(),
        ReportType::LowStock => records
            .iter()
            .filter(|item| item.quantity > 0 && item.quantity <= item.effective_threshold())
            .map(|item| {
                vec![
                    name_cell(item),
                    category_cell(item),
                    location_cell(item, branches),
                    item.quantity.to_string(),
                    item.effective_threshold().to_string(),
                    item.shortage().to_string(),
                    reorder_priority(item.quantity).to_string(),
                ]
            })
            .collect(),
        ReportType::OutOfStock => records
            .iter()
            .filter(|item| item.quantity == 0)
            .map(|item| {
                let days_out = days_out_of_stock(item.last_restocked, today);
                vec![
                    name_cell(item),
                    category_cell(item),
                    location_cell(item, branches),
                    days_out
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    last_restocked_cell(item),
                    outage_priority(days_out).to_string(),
                ]
            })
            .collect(),
    }
}

/// Metadata header block prepended to every export
///
/// Renders identically in both formats. `total_items` is the size of the
/// filtered subset, before any report-specific quantity filter.
pub fn report_metadata(
    config: &ExportConfiguration,
    branch_name: &str,
    generated_by: &str,
    generated_at: DateTime<Utc>,
    total_items: usize,
) -> Vec<Vec<String>> {
    vec![
        vec![format!(
            "Long Chau Pharmacy {} Report",
            config.report_type.slug().to_uppercase()
        )],
        vec![format!(
            "Generated on: {}",
            generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )],
        vec![format!("Generated by: {}", generated_by)],
        vec![format!("Report Type: {}", config.report_type.slug())],
        vec![format!("Branch: {}", branch_name)],
        vec![format!("Category Filter: {}", config.category)],
        vec![format!("Status Filter: {}", config.status)],
        vec![format!(
            "Date Range: {} to {}",
            config.date_from.format("%Y-%m-%d"),
            config.date_to.format("%Y-%m-%d")
        )],
        vec![format!("Total Items: {}", total_items)],
        vec![format!("Export Format: {}", config.format.label())],
        vec![format!("Timestamp: {}", generated_at.to_rfc3339())],
        vec![String::new()],
    ]
}

/// Build the complete report document for a filtered subset
pub fn build_document(
    records: &[&InventoryRecord],
    branches: &[Branch],
    config: &ExportConfiguration,
    branch_name: &str,
    generated_by: &str,
    generated_at: DateTime<Utc>,
) -> ReportDocument {
    let today = generated_at.date_naive();
    ReportDocument {
        metadata: report_metadata(config, branch_name, generated_by, generated_at, records.len()),
        headers: report_headers(config.report_type),
        rows: report_rows(config.report_type, records, branches, today),
    }
}
