//! Export filename assembly
//!
//! Filenames are deterministic given the configuration and date:
//! `LC-PMS-{report-type}-{sanitized-branch}-{YYYY-MM-DD}.{ext}`.

use chrono::NaiveDate;
use shared::{sanitize_filename_component, ExportFormat, ReportType};

/// Filename stem without extension
pub fn report_filename_stem(
    report_type: ReportType,
    branch_name: &str,
    date: NaiveDate,
) -> String {
    format!(
        "LC-PMS-{}-{}-{}",
        report_type.slug(),
        sanitize_filename_component(branch_name),
        date.format("%Y-%m-%d")
    )
}

/// Full filename as delivered to the user
///
/// The spreadsheet format requests `.xlsx` but delivers `.xls`; the
/// delivered extension is used here.
pub fn report_filename(
    report_type: ReportType,
    format: ExportFormat,
    branch_name: &str,
    date: NaiveDate,
) -> String {
    format!(
        "{}.{}",
        report_filename_stem(report_type, branch_name, date),
        format.delivered_extension()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_filename_layout() {
        let name = report_filename(
            ReportType::Summary,
            ExportFormat::Csv,
            "All Branches",
            date("2026-08-30"),
        );
        assert_eq!(name, "LC-PMS-summary-All-Branches-2026-08-30.csv");
    }

    #[test]
    fn test_spreadsheet_gets_xls_extension() {
        let name = report_filename(
            ReportType::Detailed,
            ExportFormat::Xlsx,
            "District 7, HCMC",
            date("2026-08-30"),
        );
        assert_eq!(name, "LC-PMS-detailed-District-7--HCMC-2026-08-30.xls");
    }
}
