//! Spreadsheet serialization
//!
//! Emits a styled HTML table served with a spreadsheet MIME type, the
//! legacy trick older spreadsheet applications open natively. This is not
//! a genuine binary workbook; a requested `.xlsx` name is delivered as
//! `.xls` (see `ExportFormat::delivered_extension`).

use crate::error::ExportResult;
use crate::report::ReportDocument;

/// Escape the five HTML-significant characters in a cell value
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Render a shaped report as an HTML-table spreadsheet
pub fn render_spreadsheet(document: &ReportDocument) -> ExportResult<String> {
    let mut html = String::from(
        "<html>\n<head>\n<meta charset=\"utf-8\">\n<style>\n\
         .metadata { font-weight: bold; color: #0066CC; }\n\
         .header { font-weight: bold; background-color: #E0E0E0; }\n\
         table { border-collapse: collapse; width: 100%; }\n\
         td, th { border: 1px solid #ddd; padding: 8px; text-align: left; }\n\
         </style>\n</head>\n<body>\n<table>\n",
    );

    for row in &document.metadata {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td class=\"metadata\">");
            html.push_str(&escape_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }

    // Spacer between the metadata block and the column headers
    html.push_str("<tr><td colspan=\"10\">&nbsp;</td></tr>\n");

    html.push_str("<tr>");
    for header in &document.headers {
        html.push_str("<th class=\"header\">");
        html.push_str(&escape_html(header));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n");

    for row in &document.rows {
        html.push_str("<tr>");
        for cell in row {
            html.push_str("<td>");
            html.push_str(&escape_html(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</table>\n</body>\n</html>\n");
    Ok(html)
}
