//! Per-field decimal precision supplied by the host schema.

use super::rounding::flt;
use crate::config::{RoundingMethod, DEFAULT_FLOAT_PRECISION};
use crate::model::LineItem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fields whose stored value is rounded to a declared precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrecisionField {
    DesignHeight,
    DesignGap,
    Qty,
    WastagePercent,
    PanelLengthInch,
    PanelLengthMeter,
    PanelLengthYard,
    PrintLength,
    StockPrintLength,
    StockFabricLength,
    PanelQty,
    TotalPrintLength,
    TotalFabricLength,
    TotalPanelQty,
}

/// Where a precision is being looked up.
#[derive(Debug, Clone, Copy)]
pub enum PrecisionContext<'a> {
    /// A field on this line item.
    Line(&'a LineItem),
    /// A field on the order itself.
    Order,
}

/// Decimal precision lookup, injected into the calculator.
pub trait PrecisionPolicy {
    /// Decimal places for `field` in `context`.
    fn precision(&self, field: PrecisionField, context: PrecisionContext<'_>) -> u32;

    /// Rounding method applied at that precision.
    fn rounding(&self) -> RoundingMethod {
        RoundingMethod::Legacy
    }

    /// Round `value` as stored in `field`.
    fn round(&self, value: f64, field: PrecisionField, context: PrecisionContext<'_>) -> f64 {
        flt(value, self.precision(field, context), self.rounding())
    }
}

impl<F> PrecisionPolicy for F
where
    F: Fn(PrecisionField, PrecisionContext<'_>) -> u32,
{
    fn precision(&self, field: PrecisionField, context: PrecisionContext<'_>) -> u32 {
        self(field, context)
    }
}

/// Table of declared precisions with a fallback for undeclared fields.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldPrecision {
    default: u32,
    rounding: RoundingMethod,
    declared: HashMap<PrecisionField, u32>,
}

impl Default for FieldPrecision {
    fn default() -> Self {
        Self::new(DEFAULT_FLOAT_PRECISION, RoundingMethod::default())
    }
}

impl FieldPrecision {
    /// Create a table where every field uses `default` places.
    pub fn new(default: u32, rounding: RoundingMethod) -> Self {
        Self {
            default,
            rounding,
            declared: HashMap::new(),
        }
    }

    /// Declare the precision of one field.
    pub fn declare(&mut self, field: PrecisionField, places: u32) -> &mut Self {
        self.declared.insert(field, places);
        self
    }
}

impl PrecisionPolicy for FieldPrecision {
    fn precision(&self, field: PrecisionField, _context: PrecisionContext<'_>) -> u32 {
        self.declared.get(&field).copied().unwrap_or(self.default)
    }

    fn rounding(&self) -> RoundingMethod {
        self.rounding
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_precision_fallback() {
        let mut precision = FieldPrecision::default();
        precision.declare(PrecisionField::PanelQty, 1);

        assert_eq!(
            precision.precision(PrecisionField::PanelQty, PrecisionContext::Order),
            1
        );
        assert_eq!(
            precision.precision(PrecisionField::PrintLength, PrecisionContext::Order),
            3
        );
        assert_eq!(
            precision.round(2.345, PrecisionField::PanelQty, PrecisionContext::Order),
            2.3
        );
    }

    #[test]
    fn test_closure_policy_sees_context() {
        let policy = |field: PrecisionField, context: PrecisionContext<'_>| match (field, context) {
            (PrecisionField::PrintLength, PrecisionContext::Line(item)) if item.is_panel() => 1,
            _ => 2,
        };

        let panel = LineItem {
            qty_unit: crate::model::QtyUnit::Panel,
            ..Default::default()
        };
        let length = LineItem::default();

        assert_eq!(
            policy.round(1.26, PrecisionField::PrintLength, PrecisionContext::Line(&panel)),
            1.3
        );
        assert_eq!(
            policy.round(1.266, PrecisionField::PrintLength, PrecisionContext::Line(&length)),
            1.27
        );
        assert_eq!(policy.rounding(), RoundingMethod::Legacy);
    }
}
