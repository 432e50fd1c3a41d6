//! Advisory checks for order inputs.
//!
//! None of these stop a calculation: degenerate values have defined
//! outcomes. They let a host warn the user before results look surprising.

use crate::calc::ConversionTable;
use crate::config::TOTAL_LOSS_PERCENT;
use crate::model::{LineItem, Order, QtyType};

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
    }

    /// Check if nothing was flagged.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validate every line of an order.
pub fn validate_order(order: &Order, table: &ConversionTable) -> ValidationResult {
    let mut result = ValidationResult::new();

    if order.items.is_empty() {
        result.add_warning("Order has no items");
    }

    if let Some(wastage) = order.defaults.default_wastage_percent {
        if !(0.0..=TOTAL_LOSS_PERCENT).contains(&wastage) {
            result.add_warning(format!(
                "Default wastage {}% is outside 0-100",
                wastage
            ));
        }
    }

    for (idx, item) in order.items.iter().enumerate() {
        result.merge(validate_item(item, idx + 1, table));
    }

    result
}

/// Validate a single line.
pub fn validate_item(item: &LineItem, row_num: usize, table: &ConversionTable) -> ValidationResult {
    let mut result = ValidationResult::new();

    if item.qty < 0.0 {
        result.add_warning(format!("Row {}: Negative quantity {}", row_num, item.qty));
    }

    if item.design_height < 0.0 || item.design_gap < 0.0 {
        result.add_warning(format!(
            "Row {}: Negative design geometry ({} + {})",
            row_num, item.design_height, item.design_gap
        ));
    }

    if item.wastage_percent >= TOTAL_LOSS_PERCENT {
        let derived = match item.qty_type {
            QtyType::PrintQty => "fabric",
            QtyType::FabricQty => "print",
        };
        result.add_warning(format!(
            "Row {}: {}% wastage, {} length will be zero",
            row_num, item.wastage_percent, derived
        ));
    } else if item.wastage_percent < 0.0 {
        result.add_warning(format!(
            "Row {}: Negative wastage {}%",
            row_num, item.wastage_percent
        ));
    }

    if item.is_panel() && item.design_height + item.design_gap == 0.0 {
        result.add_warning(format!(
            "Row {}: Panel order with zero panel length",
            row_num
        ));
    }

    if !table.is_registered(item.length_unit.as_str(), &item.stock_unit) {
        result.add_warning(format!(
            "Row {}: No conversion from {} to '{}', using 1",
            row_num, item.length_unit, item.stock_unit
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LengthUnit, QtyUnit};

    fn valid_item() -> LineItem {
        LineItem {
            design_height: 100.0,
            design_gap: 2.0,
            qty: 10.0,
            qty_unit: QtyUnit::Panel,
            length_unit: LengthUnit::Inch,
            stock_unit: "Meter".into(),
            ..Default::default()
        }
    }

    fn table() -> ConversionTable {
        ConversionTable::default()
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::new();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::new();
        result2.add_warning("Warning 2");

        result1.merge(result2);
        assert!(!result1.is_clean());
        assert_eq!(result1.warnings, vec!["Warning 1", "Warning 2"]);
    }

    // ==================== validate_item tests ====================

    #[test]
    fn test_valid_item() {
        let result = validate_item(&valid_item(), 1, &table());
        assert!(result.is_clean());
    }

    #[test]
    fn test_total_loss_warning() {
        let item = LineItem {
            wastage_percent: 100.0,
            ..valid_item()
        };
        let result = validate_item(&item, 2, &table());
        assert_eq!(
            result.warnings,
            vec!["Row 2: 100% wastage, fabric length will be zero"]
        );
    }

    #[test]
    fn test_wastage_above_total_loss_is_a_warning() {
        let item = LineItem {
            wastage_percent: 120.0,
            qty_type: QtyType::FabricQty,
            qty_unit: QtyUnit::Length(LengthUnit::Meter),
            ..valid_item()
        };
        let result = validate_item(&item, 1, &table());
        assert_eq!(
            result.warnings,
            vec!["Row 1: 120% wastage, print length will be zero"]
        );
    }

    #[test]
    fn test_negative_inputs_are_warnings() {
        let item = LineItem {
            qty: -1.0,
            design_gap: -2.0,
            wastage_percent: -5.0,
            ..valid_item()
        };
        let result = validate_item(&item, 1, &table());
        assert_eq!(result.warnings.len(), 3);
        assert!(result.warnings[0].contains("Negative quantity"));
        assert!(result.warnings[1].contains("Negative design geometry"));
        assert!(result.warnings[2].contains("Negative wastage"));
    }

    #[test]
    fn test_zero_panel_length_warning() {
        let item = LineItem {
            design_height: 0.0,
            design_gap: 0.0,
            ..valid_item()
        };
        let result = validate_item(&item, 1, &table());
        assert!(result.warnings.iter().any(|w| w.contains("zero panel length")));
    }

    #[test]
    fn test_unregistered_unit_pair_warning() {
        let item = LineItem {
            stock_unit: "Nos".into(),
            ..valid_item()
        };
        let result = validate_item(&item, 1, &table());
        assert!(result
            .warnings
            .iter()
            .any(|w| w == "Row 1: No conversion from Inch to 'Nos', using 1"));
    }

    // ==================== validate_order tests ====================

    #[test]
    fn test_empty_order_warning() {
        let result = validate_order(&Order::new("PO-EMPTY"), &table());
        assert_eq!(result.warnings, vec!["Order has no items".to_string()]);
    }

    #[test]
    fn test_bad_default_wastage() {
        let mut order = Order::new("PO-BAD");
        order.items.push(valid_item());
        order.defaults.default_wastage_percent = Some(-5.0);
        let result = validate_order(&order, &table());
        assert_eq!(result.warnings, vec!["Default wastage -5% is outside 0-100"]);
    }
}
