//! print-order-rs - Quantity and length calculation for textile print orders.
//!
//! Given order lines describing printed panels or continuous fabric lengths,
//! this library derives each line's print length, fabric length (with
//! wastage), stock-unit lengths and panel count, and folds them into order
//! totals with reproducible per-field rounding.
//!
//! # Example
//!
//! ```
//! use print_order_rs::{CalcConfig, LengthUnit, LineItem, Order, OrderEditor, QtyUnit};
//!
//! let mut editor = OrderEditor::new(Order::new("PO-0001"), &CalcConfig::default());
//! editor.add_row(LineItem {
//!     design_height: 100.0,
//!     design_gap: 2.0,
//!     qty: 10.0,
//!     qty_unit: QtyUnit::Panel,
//!     length_unit: LengthUnit::Inch,
//!     stock_unit: "Meter".into(),
//!     ..Default::default()
//! });
//! assert_eq!(editor.order().totals.total_print_length, 25.908);
//! ```

pub mod calc;
pub mod cascade;
pub mod config;
pub mod editor;
pub mod error;
pub mod model;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use calc::{
    compute_line, recompute_totals, ConversionTable, FieldPrecision, PrecisionContext,
    PrecisionField, PrecisionPolicy,
};
pub use cascade::{apply_all_defaults, apply_default, DefaultField, DefaultUpdate};
pub use config::{CalcConfig, RoundingMethod};
pub use editor::{ChangeEvent, OrderEditor, RecalcScope, RefreshHook};
pub use error::{CalcError, Result};
pub use model::{
    LengthUnit, LineDerived, LineField, LineItem, LineUpdate, Order, OrderDefaults, OrderTotals,
    QtyType, QtyUnit,
};
pub use report::render_summary;
pub use validation::{validate_order, ValidationResult};

/// Load an order document from a JSON file.
pub fn load_order_file(path: &std::path::Path) -> Result<Order> {
    if !path.exists() {
        return Err(CalcError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    Order::from_json_str(&content)
}

/// Load an order and recalculate it.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Parse the order document (unknown units fail here)
/// 2. Recalculate every line and the totals
///
/// Defaults are not re-applied: a stored document already carries them.
pub fn calculate_order_file(input_path: &std::path::Path, config: &CalcConfig) -> Result<Order> {
    let mut order = load_order_file(input_path)?;
    let table = config.conversion_table();
    let precision = config.field_precision();
    recompute_totals(&mut order, &table, &precision);
    Ok(order)
}
