//! Filter/preview evaluator
//!
//! Narrows the inventory snapshot to the rows eligible for export and
//! reports the resulting count for live dialog feedback. Pure over the
//! snapshot; safe to call on every keystroke.

use shared::{normalize_id, ExportConfiguration, InventoryRecord};

/// Apply the export filters to the snapshot, preserving order
///
/// Filters are independent conjunctions applied in a fixed order (branch,
/// category, status, stock threshold) so stage-by-stage counts in the logs
/// line up between runs. Each filter is skipped at its wildcard sentinel;
/// the threshold filter is skipped at 0.
pub fn filter_records<'a>(
    snapshot: &'a [InventoryRecord],
    config: &ExportConfiguration,
) -> Vec<&'a InventoryRecord> {
    let mut selected: Vec<&InventoryRecord> = snapshot.iter().collect();
    tracing::debug!(items = selected.len(), "starting export filter");

    if !config.filters_all_branches() {
        let branch = normalize_id(&config.branch);
        selected.retain(|item| normalize_id(&item.branch_id) == branch);
        tracing::debug!(branch, items = selected.len(), "after branch filter");
    }

    if !config.filters_all_categories() {
        selected.retain(|item| item.category.as_deref() == Some(config.category.as_str()));
        tracing::debug!(
            category = %config.category,
            items = selected.len(),
            "after category filter"
        );
    }

    if !config.filters_all_statuses() {
        selected.retain(|item| item.status().label() == config.status);
        tracing::debug!(
            status = %config.status,
            items = selected.len(),
            "after status filter"
        );
    }

    if config.stock_threshold > 0 {
        selected.retain(|item| item.quantity <= config.stock_threshold);
        tracing::debug!(
            threshold = config.stock_threshold,
            items = selected.len(),
            "after stock threshold filter"
        );
    }

    selected
}

/// Count of records the current configuration would export
///
/// Exposed to the dialog for the live preview before anything is written.
pub fn preview_count(snapshot: &[InventoryRecord], config: &ExportConfiguration) -> usize {
    filter_records(snapshot, config).len()
}
