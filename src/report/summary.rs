//! Plain-text order summary in bracketed sections.

use crate::model::{LineItem, Order};
use std::fmt;

/// Displays an order's calculated quantities.
pub struct OrderSummary<'a>(pub &'a Order);

/// Render the summary of an already recalculated order.
pub fn render_summary(order: &Order) -> String {
    OrderSummary(order).to_string()
}

impl fmt::Display for OrderSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.0;

        writeln!(f, "[ORDER]")?;
        writeln!(f, "name={}", order.name)?;
        writeln!(f, "items={}", order.items.len())?;

        for (idx, item) in order.items.iter().enumerate() {
            writeln!(f)?;
            write_item(f, idx + 1, item)?;
        }

        writeln!(f)?;
        writeln!(f, "[TOTALS]")?;
        writeln!(f, "total_print_length={:.3}", order.totals.total_print_length)?;
        writeln!(f, "total_fabric_length={:.3}", order.totals.total_fabric_length)?;
        writeln!(f, "total_panel_qty={:.3}", order.totals.total_panel_qty)
    }
}

fn write_item(f: &mut fmt::Formatter<'_>, row: usize, item: &LineItem) -> fmt::Result {
    let d = &item.derived;

    writeln!(f, "[ITEM {}]", row)?;
    writeln!(f, "qty={:.3} {} ({})", item.qty, item.qty_unit, item.qty_type)?;
    writeln!(f, "wastage={:.3}%", item.wastage_percent)?;
    writeln!(f, "panel_length={:.3} {}", d.panel_length_inch, item.length_unit)?;
    writeln!(f, "print_length={:.3}", d.print_length)?;
    writeln!(f, "fabric_length={:.3}", d.fabric_length)?;
    writeln!(f, "stock_print_length={:.3} {}", d.stock_print_length, item.stock_unit)?;
    writeln!(f, "stock_fabric_length={:.3} {}", d.stock_fabric_length, item.stock_unit)?;
    writeln!(f, "panel_qty={:.3}", d.panel_qty)
}
