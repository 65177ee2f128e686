//! WebAssembly module for the Long Chau Pharmacy Management System
//!
//! Provides client-side computation for the inventory pages:
//! - Stock status classification
//! - Overview statistics and export preview counts
//! - Report generation (CSV / spreadsheet)
//! - The browser download trigger behind the engine's `FileSink` seam

use std::cell::RefCell;

use chrono::Utc;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use exporter::{
    preview_count, ExportError, ExportFile, ExportResult, ExportService, FileSink, InventoryStats,
};
use shared::{Branch, ExportConfiguration, InventoryRecord, StockStatus};

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn parse_snapshot(inventory_json: &str) -> Result<Vec<InventoryRecord>, JsValue> {
    serde_json::from_str(inventory_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid inventory JSON: {}", e)))
}

fn parse_branches(branches_json: &str) -> Result<Vec<Branch>, JsValue> {
    serde_json::from_str(branches_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid branches JSON: {}", e)))
}

fn parse_config(config_json: &str) -> Result<ExportConfiguration, JsValue> {
    serde_json::from_str(config_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid export configuration JSON: {}", e)))
}

/// Classify a stock quantity against its threshold
#[wasm_bindgen]
pub fn classify_stock_status(quantity: u32, threshold: Option<u32>) -> String {
    StockStatus::classify(quantity, threshold).label().to_string()
}

/// Compute the stat-card figures for an inventory snapshot
#[wasm_bindgen]
pub fn inventory_stats(inventory_json: &str) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(inventory_json)?;
    let stats = InventoryStats::compute(&snapshot);
    serde_json::to_string(&stats).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Count of records the given export configuration would export
///
/// Pure; the dialog calls this on every field change for the live preview.
#[wasm_bindgen]
pub fn preview_export_count(inventory_json: &str, config_json: &str) -> Result<u32, JsValue> {
    let snapshot = parse_snapshot(inventory_json)?;
    let config = parse_config(config_json)?;
    Ok(preview_count(&snapshot, &config) as u32)
}

/// A generated export file plus outcome details, serialized back to JS
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedExport {
    filename: String,
    content_type: String,
    body: String,
    item_count: usize,
    fell_back_to_csv: bool,
}

/// Sink that captures the generated file instead of delivering it
struct CaptureSink {
    file: RefCell<Option<ExportFile>>,
}

impl FileSink for CaptureSink {
    fn deliver(&self, file: &ExportFile) -> ExportResult<()> {
        *self.file.borrow_mut() = Some(file.clone());
        Ok(())
    }
}

/// Generate an export without triggering a download
///
/// Returns a JSON object with the filename, MIME type, and file body, for
/// callers that handle delivery themselves.
#[wasm_bindgen]
pub fn generate_export(
    inventory_json: &str,
    branches_json: &str,
    config_json: &str,
    generated_by: &str,
) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(inventory_json)?;
    let branches = parse_branches(branches_json)?;
    let config = parse_config(config_json)?;

    let sink = CaptureSink {
        file: RefCell::new(None),
    };
    let outcome = ExportService::new()
        .export(&snapshot, &branches, &config, generated_by, Utc::now(), &sink)
        .map_err(|e| JsValue::from_str(&e.user_message()))?;

    let file = sink
        .file
        .into_inner()
        .ok_or_else(|| JsValue::from_str("export produced no file"))?;

    let generated = GeneratedExport {
        filename: file.filename,
        content_type: file.content_type,
        body: file.body,
        item_count: outcome.item_count,
        fell_back_to_csv: outcome.fell_back_to_csv,
    };
    serde_json::to_string(&generated).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Sink that delivers a file through the browser: object URL, synthetic
/// anchor click, then revocation
struct BrowserSink;

impl BrowserSink {
    fn trigger_download(file: &ExportFile) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("no document body"))?;

        let parts = js_sys::Array::of1(&JsValue::from_str(&file.body));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&file.content_type);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let anchor: web_sys::HtmlAnchorElement =
            document.create_element("a")?.unchecked_into();
        anchor.set_href(&url);
        anchor.set_download(&file.filename);
        body.append_child(&anchor)?;
        anchor.click();
        body.remove_child(&anchor)?;

        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    }
}

impl FileSink for BrowserSink {
    fn deliver(&self, file: &ExportFile) -> ExportResult<()> {
        Self::trigger_download(file).map_err(|e| {
            ExportError::Delivery(
                e.as_string()
                    .unwrap_or_else(|| "browser download failed".to_string()),
            )
        })
    }
}

/// Run a full export and trigger the browser download
///
/// Returns the success message to show the user. Failures (empty result,
/// generation or delivery errors) come back as the user-facing message.
#[wasm_bindgen]
pub fn export_inventory_report(
    inventory_json: &str,
    branches_json: &str,
    config_json: &str,
    generated_by: &str,
) -> Result<String, JsValue> {
    let snapshot = parse_snapshot(inventory_json)?;
    let branches = parse_branches(branches_json)?;
    let config = parse_config(config_json)?;

    let outcome = ExportService::new()
        .export(
            &snapshot,
            &branches,
            &config,
            generated_by,
            Utc::now(),
            &BrowserSink,
        )
        .map_err(|e| JsValue::from_str(&e.user_message()))?;

    let mut message = outcome.success_message();
    if outcome.fell_back_to_csv {
        message = format!("Excel export failed. Falling back to CSV format.\n\n{}", message);
    }
    Ok(message)
}
