//! Per-line print and fabric length calculation.

use super::conversion::ConversionTable;
use super::precision::{PrecisionContext, PrecisionField, PrecisionPolicy};
use crate::config::TOTAL_LOSS_PERCENT;
use crate::model::{LengthUnit, LineDerived, LineItem, QtyType, QtyUnit};

/// Round the line's entered values to their declared precision.
pub fn round_inputs(item: &mut LineItem, policy: &dyn PrecisionPolicy) {
    let snapshot = item.clone();
    let ctx = PrecisionContext::Line(&snapshot);

    item.design_height = policy.round(item.design_height, PrecisionField::DesignHeight, ctx);
    item.design_gap = policy.round(item.design_gap, PrecisionField::DesignGap, ctx);
    item.qty = policy.round(item.qty, PrecisionField::Qty, ctx);
    item.wastage_percent = policy.round(item.wastage_percent, PrecisionField::WastagePercent, ctx);
}

/// Calculate the derived lengths and panel count of one line.
///
/// Algorithm:
/// 1. Panel length = design height + gap, scaled to meters and yards
/// 2. Conversion factor from the line's length unit to its stock unit
/// 3. Length orders: the quantity is whichever of print/fabric length
///    `qty_type` names; the other is derived through wastage
/// 4. Panel orders: print length = panels x panel length, normalised by the
///    conversion factor; fabric length derived through wastage
/// 5. Print and fabric lengths rounded at the print length precision
/// 6. Stock lengths = rounded lengths x conversion factor
/// 7. Panel count = stock print length / panel length in meters
/// 8. Panel geometry rounded for storage; steps 4 and 7 use the exact values
///
/// Wastage at or above 100% yields a zero derived length, and a zero panel
/// length yields a zero panel count. Neither is an error.
pub fn compute_line(
    item: &LineItem,
    table: &ConversionTable,
    policy: &dyn PrecisionPolicy,
) -> LineDerived {
    let ctx = PrecisionContext::Line(item);
    let inch = LengthUnit::Inch.as_str();
    let meter = LengthUnit::Meter.as_str();
    let yard = LengthUnit::Yard.as_str();

    let panel_length_inch = item.design_height + item.design_gap;
    let panel_length_meter = panel_length_inch * table.factor(inch, meter);
    let panel_length_yard = panel_length_meter / table.factor(yard, meter);

    let waste = item.wastage_percent / TOTAL_LOSS_PERCENT;
    let conversion_factor = table.factor(item.length_unit.as_str(), &item.stock_unit);

    let (print_length, fabric_length) = match item.qty_unit {
        QtyUnit::Length(_) => {
            let print_length = match item.qty_type {
                QtyType::PrintQty => item.qty,
                QtyType::FabricQty => remove_wastage(item.qty, waste),
            };
            let fabric_length = match item.qty_type {
                QtyType::FabricQty => item.qty,
                QtyType::PrintQty => add_wastage(item.qty, waste),
            };
            (print_length, fabric_length)
        }
        QtyUnit::Panel => {
            let print_length = item.qty * panel_length_meter / conversion_factor;
            (print_length, add_wastage(print_length, waste))
        }
    };

    // Both share one precision so the wastage-linked pair round consistently.
    let print_length = policy.round(print_length, PrecisionField::PrintLength, ctx);
    let fabric_length = policy.round(fabric_length, PrecisionField::PrintLength, ctx);

    let stock_print_length = policy.round(
        print_length * conversion_factor,
        PrecisionField::StockPrintLength,
        ctx,
    );
    let stock_fabric_length = policy.round(
        fabric_length * conversion_factor,
        PrecisionField::StockFabricLength,
        ctx,
    );

    let panel_qty = if panel_length_meter != 0.0 {
        stock_print_length / panel_length_meter
    } else {
        0.0
    };
    let panel_qty = policy.round(panel_qty, PrecisionField::PanelQty, ctx);

    LineDerived {
        panel_length_inch: policy.round(panel_length_inch, PrecisionField::PanelLengthInch, ctx),
        panel_length_meter: policy.round(panel_length_meter, PrecisionField::PanelLengthMeter, ctx),
        panel_length_yard: policy.round(panel_length_yard, PrecisionField::PanelLengthYard, ctx),
        print_length,
        fabric_length,
        stock_print_length,
        stock_fabric_length,
        panel_qty,
    }
}

/// Fabric length needed to print `print_length` at `waste` (0-1).
pub fn add_wastage(print_length: f64, waste: f64) -> f64 {
    if waste < 1.0 {
        print_length / (1.0 - waste)
    } else {
        0.0
    }
}

/// Print length obtained from `fabric_length` at `waste` (0-1).
pub fn remove_wastage(fabric_length: f64, waste: f64) -> f64 {
    if waste < 1.0 {
        fabric_length * (1.0 - waste)
    } else {
        0.0
    }
}
