//! Inventory overview statistics and client-side browsing
//!
//! The inventory page derives these from the same in-memory snapshot the
//! exporter consumes: stat cards, the category dropdown, search filtering,
//! and pagination. All pure functions over immutable data.

use rust_decimal::Decimal;
use serde::Serialize;

use shared::{InventoryRecord, StockStatus, ALL_CATEGORIES, ALL_STATUS};

/// Stat-card figures for the full snapshot
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_products: usize,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    pub total_value: Decimal,
}

impl InventoryStats {
    pub fn compute(snapshot: &[InventoryRecord]) -> Self {
        let low_stock_items = snapshot
            .iter()
            .filter(|item| item.status() == StockStatus::LowStock)
            .count();
        let out_of_stock_items = snapshot.iter().filter(|item| item.quantity == 0).count();
        let total_value = snapshot
            .iter()
            .fold(Decimal::ZERO, |acc, item| acc + item.total_value())
            .round_dp(2);

        Self {
            total_products: snapshot.len(),
            low_stock_items,
            out_of_stock_items,
            total_value,
        }
    }
}

/// Category dropdown options: the wildcard sentinel followed by distinct
/// record categories in first-seen order
pub fn category_options(snapshot: &[InventoryRecord]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];
    for item in snapshot {
        if let Some(category) = &item.category {
            if !options.iter().any(|c| c == category) {
                options.push(category.clone());
            }
        }
    }
    options
}

/// Case-insensitive browse filter over the inventory table
///
/// The search term matches product name, category, or branch location;
/// category and status selections are exact, conjunctive, and skipped at
/// their sentinels.
pub fn browse_filter<'a>(
    snapshot: &'a [InventoryRecord],
    search_term: &str,
    category: &str,
    status: &str,
) -> Vec<&'a InventoryRecord> {
    let term = search_term.trim().to_lowercase();

    snapshot
        .iter()
        .filter(|item| {
            let matches_search = term.is_empty()
                || contains_ci(item.name.as_deref(), &term)
                || contains_ci(item.category.as_deref(), &term)
                || contains_ci(item.branch_location.as_deref(), &term);
            let matches_category =
                category == ALL_CATEGORIES || item.category.as_deref() == Some(category);
            let matches_status = status == ALL_STATUS || item.status().label() == status;

            matches_search && matches_category && matches_status
        })
        .collect()
}

fn contains_ci(value: Option<&str>, term: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(term))
}

/// Pages needed to show `item_count` items
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    item_count.div_ceil(per_page)
}

/// One page of a filtered list, 1-based, clamped into range
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 || items.is_empty() {
        return &[];
    }
    let pages = total_pages(items.len(), per_page);
    let page = page.clamp(1, pages);
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn record(name: &str, category: &str, quantity: u32, cost: &str) -> InventoryRecord {
        InventoryRecord {
            inventory_id: format!("inv-{}", name),
            product_id: format!("prod-{}", name),
            branch_id: "1".to_string(),
            quantity,
            threshold: None,
            category: Some(category.to_string()),
            name: Some(name.to_string()),
            cost: Some(Decimal::from_str(cost).unwrap()),
            last_restocked: None,
            branch_location: Some("District 1".to_string()),
            manager_name: None,
            contact_number: None,
        }
    }

    fn snapshot() -> Vec<InventoryRecord> {
        vec![
            record("Paracetamol", "Analgesics", 100, "1.50"),
            record("Ibuprofen", "Analgesics", 12, "2.00"),
            record("Amoxicillin", "Antibiotics", 0, "5.00"),
        ]
    }

    #[test]
    fn test_stats() {
        let stats = InventoryStats::compute(&snapshot());

        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.low_stock_items, 1);
        assert_eq!(stats.out_of_stock_items, 1);
        // 100*1.50 + 12*2.00 + 0*5.00
        assert_eq!(stats.total_value, Decimal::from_str("174.00").unwrap());
    }

    #[test]
    fn test_category_options_first_seen_order() {
        let options = category_options(&snapshot());
        assert_eq!(options, vec!["All Categories", "Analgesics", "Antibiotics"]);
    }

    #[test]
    fn test_browse_filter_search_and_status() {
        let snapshot = snapshot();

        let hits = browse_filter(&snapshot, "para", ALL_CATEGORIES, ALL_STATUS);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_deref(), Some("Paracetamol"));

        let hits = browse_filter(&snapshot, "", "Analgesics", "LOW STOCK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name.as_deref(), Some("Ibuprofen"));

        // Every record's branch location matches the search term.
        let hits = browse_filter(&snapshot, "district", ALL_CATEGORIES, ALL_STATUS);
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_pagination() {
        let items: Vec<u32> = (1..=23).collect();

        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(page_slice(&items, 1, 10), &items[0..10]);
        assert_eq!(page_slice(&items, 3, 10), &items[20..23]);
        // Out-of-range pages clamp instead of panicking.
        assert_eq!(page_slice(&items, 99, 10), &items[20..23]);
        assert_eq!(page_slice(&items, 0, 10), &items[0..10]);
        assert!(page_slice(&items, 1, 0).is_empty());
    }
}
