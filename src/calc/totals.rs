//! Order total aggregation.

use super::conversion::ConversionTable;
use super::line::{compute_line, round_inputs};
use super::precision::{PrecisionContext, PrecisionField, PrecisionPolicy};
use crate::model::{Order, OrderTotals, QtyType, QtyUnit};
use tracing::debug;

/// Recalculate every line and the order totals from scratch.
///
/// Totals are the rounded sum of each line's already-rounded stock values, so
/// calling this twice with no edits in between yields bit-identical results.
/// Panel lines (and a panel default) are held to the print quantity type.
pub fn recompute_totals(
    order: &mut Order,
    table: &ConversionTable,
    policy: &dyn PrecisionPolicy,
) -> OrderTotals {
    if order.defaults.default_qty_unit == Some(QtyUnit::Panel) {
        order.defaults.default_qty_type = Some(QtyType::PrintQty);
    }

    let mut totals = OrderTotals::default();

    for (idx, item) in order.items.iter_mut().enumerate() {
        item.enforce_panel_invariant();
        round_inputs(item, policy);
        item.derived = compute_line(item, table, policy);

        debug!(
            "Line {}: print {} fabric {} panels {}",
            idx + 1,
            item.derived.stock_print_length,
            item.derived.stock_fabric_length,
            item.derived.panel_qty
        );

        totals.total_print_length += item.derived.stock_print_length;
        totals.total_fabric_length += item.derived.stock_fabric_length;
        totals.total_panel_qty += item.derived.panel_qty;
    }

    let ctx = PrecisionContext::Order;
    totals.total_print_length =
        policy.round(totals.total_print_length, PrecisionField::TotalPrintLength, ctx);
    totals.total_fabric_length =
        policy.round(totals.total_fabric_length, PrecisionField::TotalFabricLength, ctx);
    totals.total_panel_qty =
        policy.round(totals.total_panel_qty, PrecisionField::TotalPanelQty, ctx);

    debug!(
        "Recalculated {} line(s): print {} fabric {} panels {}",
        order.items.len(),
        totals.total_print_length,
        totals.total_fabric_length,
        totals.total_panel_qty
    );

    order.totals = totals;
    totals
}
