//! Print order document: defaults, items and totals.

use super::line_item::LineItem;
use super::units::{LengthUnit, QtyType, QtyUnit};
use serde::{Deserialize, Serialize};

/// Order-level default values cascaded into line items.
///
/// An unset (`None`) or zero default is never written into a line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDefaults {
    pub default_gap: Option<f64>,
    pub default_qty: Option<f64>,
    pub default_qty_unit: Option<QtyUnit>,
    pub default_qty_type: Option<QtyType>,
    pub default_wastage_percent: Option<f64>,
    pub default_length_unit: Option<LengthUnit>,
}

/// Order totals, in stock units. Overwritten on every recalculation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderTotals {
    pub total_print_length: f64,
    pub total_fabric_length: f64,
    pub total_panel_qty: f64,
}

/// A print order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Document name.
    pub name: String,
    /// Defaults for new and re-defaulted lines.
    #[serde(flatten)]
    pub defaults: OrderDefaults,
    /// Calculated totals.
    #[serde(flatten)]
    pub totals: OrderTotals,
    /// Line items, in entry order.
    pub items: Vec<LineItem>,
}

impl Order {
    /// Create an empty order.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Load an order from a JSON string.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the order has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_json_flat_document() {
        let order = Order::from_json_str(
            r#"{
                "name": "PO-0001",
                "default_gap": 2,
                "default_qty_unit": "Panel",
                "total_print_length": 99,
                "items": [ { "design_height": 100, "stock_unit": "Meter" } ]
            }"#,
        )
        .unwrap();

        assert_eq!(order.name, "PO-0001");
        assert_eq!(order.defaults.default_gap, Some(2.0));
        assert_eq!(order.defaults.default_qty_unit, Some(QtyUnit::Panel));
        assert_eq!(order.defaults.default_qty, None);
        assert_eq!(order.totals.total_print_length, 99.0);
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_order_rejects_unknown_qty_type() {
        let result = Order::from_json_str(r#"{ "default_qty_type": "Roll Qty" }"#);
        assert!(result.is_err());
    }
}
