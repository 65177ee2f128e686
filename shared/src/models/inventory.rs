//! Inventory models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{StockStatus, DEFAULT_THRESHOLD};

/// One product-at-branch stock line, as fetched from the inventory endpoint
///
/// Identifiers are opaque strings; comparisons are normalized string
/// equality. Stock status is derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub inventory_id: String,
    pub product_id: String,
    pub branch_id: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_restocked: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

impl InventoryRecord {
    /// Threshold with the platform default applied
    pub fn effective_threshold(&self) -> u32 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// Derived stock status, recomputed at read time
    pub fn status(&self) -> StockStatus {
        StockStatus::classify(self.quantity, self.threshold)
    }

    /// Unit cost with missing cost treated as zero
    pub fn unit_cost(&self) -> Decimal {
        self.cost.unwrap_or(Decimal::ZERO)
    }

    /// Stock value of this line: quantity x unit cost, rounded to 2 dp
    pub fn total_value(&self) -> Decimal {
        (Decimal::from(self.quantity) * self.unit_cost()).round_dp(2)
    }

    /// Units short of the threshold, for low-stock reporting
    pub fn shortage(&self) -> u32 {
        self.effective_threshold().saturating_sub(self.quantity)
    }
}
