//! Report exporter tests
//!
//! Covers:
//! - Report shaping per report type (summary / detailed / lowstock / outofstock)
//! - CSV round-trip fidelity
//! - Spreadsheet generation and the CSV fallback path
//! - Filename determinism and sanitization
//! - Empty-result handling at the service boundary

use std::cell::RefCell;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use exporter::{
    report_filename_stem, ExportError, ExportFile, ExportResult, ExportService, FileSink,
};
use shared::{Branch, ExportConfiguration, ExportFormat, InventoryRecord, ReportType};

struct MemorySink {
    files: RefCell<Vec<ExportFile>>,
}

impl MemorySink {
    fn new() -> Self {
        Self {
            files: RefCell::new(Vec::new()),
        }
    }

    fn single_file(&self) -> ExportFile {
        let files = self.files.borrow();
        assert_eq!(files.len(), 1, "expected exactly one delivered file");
        files[0].clone()
    }
}

impl FileSink for MemorySink {
    fn deliver(&self, file: &ExportFile) -> ExportResult<()> {
        self.files.borrow_mut().push(file.clone());
        Ok(())
    }
}

fn record(
    id: &str,
    branch_id: &str,
    quantity: u32,
    cost: &str,
    last_restocked: Option<&str>,
) -> InventoryRecord {
    InventoryRecord {
        inventory_id: format!("inv-{}", id),
        product_id: format!("prod-{}", id),
        branch_id: branch_id.to_string(),
        quantity,
        threshold: None,
        category: Some("Analgesics".to_string()),
        name: Some(format!("Product {}", id)),
        cost: Some(Decimal::from_str(cost).unwrap()),
        last_restocked: last_restocked.map(|d| d.parse().unwrap()),
        branch_location: Some("District 1".to_string()),
        manager_name: None,
        contact_number: None,
    }
}

/// Ten records: three out of stock, two low stock, five in stock
fn scenario_snapshot() -> Vec<InventoryRecord> {
    vec![
        record("a", "1", 0, "2.00", Some("2026-08-10")),
        record("b", "1", 0, "3.50", None),
        record("c", "2", 0, "1.25", Some("2026-08-28")),
        record("d", "1", 12, "4.00", Some("2026-08-20")),
        record("e", "2", 30, "0.80", Some("2026-08-22")),
        record("f", "1", 31, "5.00", Some("2026-08-01")),
        record("g", "1", 50, "2.20", Some("2026-08-05")),
        record("h", "2", 75, "1.00", Some("2026-07-30")),
        record("i", "2", 100, "9.99", Some("2026-08-15")),
        record("j", "1", 200, "0.10", Some("2026-08-25")),
    ]
}

fn branches() -> Vec<Branch> {
    vec![
        Branch {
            branch_id: "1".to_string(),
            location: "District 1".to_string(),
            manager_name: None,
            contact_number: None,
        },
        Branch {
            branch_id: "2".to_string(),
            location: "District 7".to_string(),
            manager_name: None,
            contact_number: None,
        },
    ]
}

fn generated_at() -> DateTime<Utc> {
    "2026-08-30T08:30:00Z".parse().unwrap()
}

fn config_for(report_type: ReportType, format: ExportFormat) -> ExportConfiguration {
    let mut config = ExportConfiguration::with_defaults(generated_at().date_naive());
    config.report_type = report_type;
    config.format = format;
    config
}

fn export(config: &ExportConfiguration) -> (ExportFile, exporter::ExportOutcome) {
    let sink = MemorySink::new();
    let outcome = ExportService::new()
        .export(
            &scenario_snapshot(),
            &branches(),
            config,
            "Admin",
            generated_at(),
            &sink,
        )
        .expect("export should succeed");
    (sink.single_file(), outcome)
}

/// Parse a generated CSV body into rows of cells
fn parse_csv(body: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());
    reader
        .records()
        .map(|r| r.unwrap().iter().map(|c| c.to_string()).collect())
        .collect()
}

// The metadata block is 12 rows (11 fields plus the empty separator),
// followed by the column header row.
const METADATA_ROWS: usize = 12;

// ============================================================================
// Report Shaping
// ============================================================================

#[test]
fn test_summary_exports_all_filtered_rows() {
    let (file, outcome) = export(&config_for(ReportType::Summary, ExportFormat::Csv));

    let rows = parse_csv(&file.body);
    assert_eq!(rows.len(), METADATA_ROWS + 1 + 10);
    assert_eq!(outcome.item_count, 10);

    let headers = &rows[METADATA_ROWS];
    assert_eq!(
        headers,
        &[
            "Product Name",
            "Category",
            "Branch Location",
            "Current Stock",
            "Status",
            "Total Value ($)"
        ]
    );

    // First data row: out-of-stock record a, value 0 * 2.00.
    let first = &rows[METADATA_ROWS + 1];
    assert_eq!(first[0], "Product a");
    assert_eq!(first[3], "0");
    assert_eq!(first[4], "OUT OF STOCK");
    assert_eq!(first[5], "0.00");
}

#[test]
fn test_outofstock_exports_only_zero_quantity() {
    let (file, _) = export(&config_for(ReportType::OutOfStock, ExportFormat::Csv));

    let rows = parse_csv(&file.body);
    let data = &rows[METADATA_ROWS + 1..];
    assert_eq!(data.len(), 3);

    // Record a: restocked 2026-08-10, 20 days before generation -> Critical.
    assert_eq!(data[0][0], "Product a");
    assert_eq!(data[0][3], "20");
    assert_eq!(data[0][5], "Critical");

    // Record b has no restock date -> Unknown days, Critical.
    assert_eq!(data[1][3], "Unknown");
    assert_eq!(data[1][4], "Unknown");
    assert_eq!(data[1][5], "Critical");

    // Record c: 2 days out -> High.
    assert_eq!(data[2][3], "2");
    assert_eq!(data[2][5], "High");
}

#[test]
fn test_lowstock_exports_only_low_rows() {
    let (file, _) = export(&config_for(ReportType::LowStock, ExportFormat::Csv));

    let rows = parse_csv(&file.body);
    let data = &rows[METADATA_ROWS + 1..];
    assert_eq!(data.len(), 2);

    // Record d: quantity 12, threshold 30 -> shortage 18, Medium priority.
    assert_eq!(data[0][0], "Product d");
    assert_eq!(data[0][5], "18");
    assert_eq!(data[0][6], "Medium");

    // Record e: quantity 30 (at threshold) -> shortage 0, Low priority.
    assert_eq!(data[1][0], "Product e");
    assert_eq!(data[1][5], "0");
    assert_eq!(data[1][6], "Low");
}

#[test]
fn test_detailed_row_contents() {
    let (file, _) = export(&config_for(ReportType::Detailed, ExportFormat::Csv));

    let rows = parse_csv(&file.body);
    let data = &rows[METADATA_ROWS + 1..];
    assert_eq!(data.len(), 10);

    // Record d in full.
    let row = &data[3];
    assert_eq!(
        row,
        &[
            "prod-d",
            "Product d",
            "Analgesics",
            "1",
            "District 1",
            "12",
            "30",
            "LOW STOCK",
            "2026-08-20",
            "4.00",
            "48.00"
        ]
    );
}

#[test]
fn test_metadata_block() {
    let (file, _) = export(&config_for(ReportType::Summary, ExportFormat::Csv));

    let rows = parse_csv(&file.body);
    assert_eq!(rows[0][0], "Long Chau Pharmacy SUMMARY Report");
    assert_eq!(rows[2][0], "Generated by: Admin");
    assert_eq!(rows[4][0], "Branch: All Branches");
    assert_eq!(rows[7][0], "Date Range: 2026-07-31 to 2026-08-30");
    assert_eq!(rows[8][0], "Total Items: 10");
    assert_eq!(rows[9][0], "Export Format: CSV");
    assert_eq!(rows[11][0], "");
}

// ============================================================================
// Serialization and Delivery
// ============================================================================

#[test]
fn test_csv_round_trip_preserves_cells() {
    let (file, _) = export(&config_for(ReportType::Summary, ExportFormat::Csv));

    assert!(file.filename.ends_with(".csv"));
    assert_eq!(file.content_type, "text/csv;charset=utf-8;");

    // Every line quotes every cell.
    for line in file.body.lines() {
        assert!(line.starts_with('"') && line.ends_with('"'), "line: {}", line);
    }

    // Re-parsing yields the same row count and cell values.
    let rows = parse_csv(&file.body);
    let data = &rows[METADATA_ROWS + 1..];
    assert_eq!(data.len(), 10);
    assert_eq!(data[9][0], "Product j");
    assert_eq!(data[9][5], "20.00");
}

#[test]
fn test_spreadsheet_export_is_html_table_named_xls() {
    let (file, outcome) = export(&config_for(ReportType::Summary, ExportFormat::Xlsx));

    // Requested .xlsx, delivered .xls with the legacy HTML-table content.
    assert_eq!(file.filename, "LC-PMS-summary-All-Branches-2026-08-30.xls");
    assert_eq!(file.content_type, "application/vnd.ms-excel;charset=utf-8;");
    assert!(file.body.contains("<table>"));
    assert!(!outcome.fell_back_to_csv);

    // The metadata block renders identically regardless of format.
    let (csv_file, _) = export(&config_for(ReportType::Summary, ExportFormat::Csv));
    let csv_rows = parse_csv(&csv_file.body);
    for row in &csv_rows[..METADATA_ROWS - 1] {
        assert!(
            file.body.contains(&format!("<td class=\"metadata\">{}</td>", row[0])),
            "metadata row missing from spreadsheet: {}",
            row[0]
        );
    }
}

#[test]
fn test_spreadsheet_failure_falls_back_to_csv() {
    let service = ExportService::with_spreadsheet_renderer(|_| {
        Err(ExportError::Spreadsheet("forced failure".to_string()))
    });

    let sink = MemorySink::new();
    let outcome = service
        .export(
            &scenario_snapshot(),
            &branches(),
            &config_for(ReportType::Summary, ExportFormat::Xlsx),
            "Admin",
            generated_at(),
            &sink,
        )
        .expect("fallback export should succeed");

    assert!(outcome.fell_back_to_csv);
    assert_eq!(outcome.format, ExportFormat::Csv);

    // The fallback file is byte-identical to a direct CSV export.
    let fallback = sink.single_file();
    let (direct, _) = export(&config_for(ReportType::Summary, ExportFormat::Csv));
    assert_eq!(fallback.body, direct.body);
    assert_eq!(fallback.filename, direct.filename);
    assert_eq!(fallback.content_type, direct.content_type);
}

#[test]
fn test_empty_result_blocks_export() {
    let mut config = config_for(ReportType::Summary, ExportFormat::Csv);
    config.branch = "5".to_string();

    let sink = MemorySink::new();
    let err = ExportService::new()
        .export(
            &scenario_snapshot(),
            &branches(),
            &config,
            "Admin",
            generated_at(),
            &sink,
        )
        .unwrap_err();

    assert!(matches!(err, ExportError::EmptyResult));
    assert!(sink.files.borrow().is_empty());
}

#[test]
fn test_branch_scoped_export_resolves_location() {
    let mut config = config_for(ReportType::Summary, ExportFormat::Csv);
    config.branch = "2".to_string();

    let (file, outcome) = {
        let sink = MemorySink::new();
        let outcome = ExportService::new()
            .export(
                &scenario_snapshot(),
                &branches(),
                &config,
                "Admin",
                generated_at(),
                &sink,
            )
            .unwrap();
        (sink.single_file(), outcome)
    };

    assert_eq!(outcome.item_count, 4);
    assert_eq!(outcome.branch_name, "District 7");
    assert_eq!(file.filename, "LC-PMS-summary-District-7-2026-08-30.csv");

    let rows = parse_csv(&file.body);
    assert_eq!(rows[4][0], "Branch: District 7");
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Any branch name sanitizes to alphanumerics and hyphens only.
    #[test]
    fn prop_filename_stem_is_safe(branch_name in ".{0,40}") {
        let date: NaiveDate = "2026-08-30".parse().unwrap();
        let stem = report_filename_stem(ReportType::Detailed, &branch_name, date);
        prop_assert!(stem.chars().all(|c| c.is_ascii_alphanumeric() || c == '-'));
        prop_assert!(stem.starts_with("LC-PMS-detailed-"));
        prop_assert!(stem.ends_with("-2026-08-30"));
    }

    /// Low-stock reports never include zero-quantity rows and out-of-stock
    /// reports never include positive-quantity rows, whatever the snapshot.
    #[test]
    fn prop_report_type_quantity_filters(quantities in prop::collection::vec(0u32..80, 1..30)) {
        let snapshot: Vec<InventoryRecord> = quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| record(&format!("{}", i), "1", q, "1.00", None))
            .collect();

        let low = exporter::report::report_rows(
            ReportType::LowStock,
            &snapshot.iter().collect::<Vec<_>>(),
            &[],
            "2026-08-30".parse().unwrap(),
        );
        let expected_low = snapshot
            .iter()
            .filter(|r| r.quantity > 0 && r.quantity <= r.effective_threshold())
            .count();
        prop_assert_eq!(low.len(), expected_low);
        for row in &low {
            prop_assert_ne!(row[3].as_str(), "0");
        }

        let out = exporter::report::report_rows(
            ReportType::OutOfStock,
            &snapshot.iter().collect::<Vec<_>>(),
            &[],
            "2026-08-30".parse().unwrap(),
        );
        let expected_out = snapshot.iter().filter(|r| r.quantity == 0).count();
        prop_assert_eq!(out.len(), expected_out);
    }
}
