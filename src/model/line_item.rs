//! Line item definition representing one printed design on the order.

use super::units::{LengthUnit, QtyType, QtyUnit};
use serde::{Deserialize, Serialize};

/// Values written by the line calculator. Never edited directly by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineDerived {
    /// Design height plus gap, in the line's length unit.
    pub panel_length_inch: f64,
    /// Panel length scaled by the inch-to-meter factor.
    pub panel_length_meter: f64,
    /// Panel length in yards.
    pub panel_length_yard: f64,
    /// Printed length, excluding wastage.
    pub print_length: f64,
    /// Fabric consumed, including wastage.
    pub fabric_length: f64,
    /// Print length in the stock unit.
    pub stock_print_length: f64,
    /// Fabric length in the stock unit.
    pub stock_fabric_length: f64,
    /// Number of panels the print length covers.
    pub panel_qty: f64,
}

/// A single design line on a print order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    /// Design height.
    pub design_height: f64,
    /// Gap between panels.
    pub design_gap: f64,
    /// Ordered quantity: a panel count or a length.
    pub qty: f64,
    /// Unit of `qty`.
    pub qty_unit: QtyUnit,
    /// Whether `qty` is a print or fabric quantity.
    pub qty_type: QtyType,
    /// Wastage percentage (0-100).
    pub wastage_percent: f64,
    /// Unit the design geometry is entered in.
    pub length_unit: LengthUnit,
    /// Inventory unit of the line's item.
    pub stock_unit: String,
    /// Calculated fields.
    #[serde(flatten)]
    pub derived: LineDerived,
}

/// Editable line item fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineField {
    DesignHeight,
    DesignGap,
    Qty,
    QtyUnit,
    QtyType,
    WastagePercent,
    LengthUnit,
    StockUnit,
}

/// A typed write to one line item field.
#[derive(Debug, Clone, PartialEq)]
pub enum LineUpdate {
    DesignHeight(f64),
    DesignGap(f64),
    Qty(f64),
    QtyUnit(QtyUnit),
    QtyType(QtyType),
    WastagePercent(f64),
    LengthUnit(LengthUnit),
    StockUnit(String),
}

impl LineUpdate {
    /// The field this update writes.
    pub fn field(&self) -> LineField {
        match self {
            LineUpdate::DesignHeight(_) => LineField::DesignHeight,
            LineUpdate::DesignGap(_) => LineField::DesignGap,
            LineUpdate::Qty(_) => LineField::Qty,
            LineUpdate::QtyUnit(_) => LineField::QtyUnit,
            LineUpdate::QtyType(_) => LineField::QtyType,
            LineUpdate::WastagePercent(_) => LineField::WastagePercent,
            LineUpdate::LengthUnit(_) => LineField::LengthUnit,
            LineUpdate::StockUnit(_) => LineField::StockUnit,
        }
    }
}

impl LineItem {
    /// Create a new line with a design height and stock unit.
    pub fn new(design_height: f64, stock_unit: impl Into<String>) -> Self {
        Self {
            design_height,
            stock_unit: stock_unit.into(),
            ..Default::default()
        }
    }

    /// Apply a field write, including its side effects.
    ///
    /// Returns every field that was written, the requested one first. Setting
    /// the quantity unit to Panel forces the print quantity type; setting it to
    /// a length unit also moves the line's length unit to match.
    pub fn set(&mut self, update: LineUpdate) -> Vec<LineField> {
        let mut written = vec![update.field()];
        match update {
            LineUpdate::DesignHeight(v) => self.design_height = v,
            LineUpdate::DesignGap(v) => self.design_gap = v,
            LineUpdate::Qty(v) => self.qty = v,
            LineUpdate::QtyUnit(unit) => {
                self.qty_unit = unit;
                match unit {
                    QtyUnit::Panel => {
                        self.qty_type = QtyType::PrintQty;
                        written.push(LineField::QtyType);
                    }
                    QtyUnit::Length(length_unit) => {
                        self.length_unit = length_unit;
                        written.push(LineField::LengthUnit);
                    }
                }
            }
            LineUpdate::QtyType(v) => self.qty_type = v,
            LineUpdate::WastagePercent(v) => self.wastage_percent = v,
            LineUpdate::LengthUnit(v) => self.length_unit = v,
            LineUpdate::StockUnit(v) => self.stock_unit = v,
        }
        written
    }

    /// Check if `field` still holds its blank-row value.
    pub fn is_blank(&self, field: LineField) -> bool {
        let blank = LineItem::default();
        match field {
            LineField::DesignHeight => self.design_height == 0.0,
            LineField::DesignGap => self.design_gap == 0.0,
            LineField::Qty => self.qty == 0.0,
            LineField::QtyUnit => self.qty_unit == blank.qty_unit,
            LineField::QtyType => self.qty_type == blank.qty_type,
            LineField::WastagePercent => self.wastage_percent == 0.0,
            LineField::LengthUnit => self.length_unit == blank.length_unit,
            LineField::StockUnit => self.stock_unit.is_empty(),
        }
    }

    /// Force the print quantity type on panel lines. Returns true if changed.
    pub fn enforce_panel_invariant(&mut self) -> bool {
        if self.qty_unit.is_panel() && self.qty_type != QtyType::PrintQty {
            self.qty_type = QtyType::PrintQty;
            return true;
        }
        false
    }

    /// Check if the quantity counts panels.
    pub fn is_panel(&self) -> bool {
        self.qty_unit.is_panel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_panel_forces_print_qty() {
        let mut item = LineItem {
            qty_type: QtyType::FabricQty,
            ..Default::default()
        };
        let written = item.set(LineUpdate::QtyUnit(QtyUnit::Panel));
        assert_eq!(item.qty_type, QtyType::PrintQty);
        assert_eq!(written, vec![LineField::QtyUnit, LineField::QtyType]);
    }

    #[test]
    fn test_set_length_qty_unit_moves_length_unit() {
        let mut item = LineItem {
            length_unit: LengthUnit::Inch,
            qty_type: QtyType::FabricQty,
            ..Default::default()
        };
        let written = item.set(LineUpdate::QtyUnit(QtyUnit::Length(LengthUnit::Yard)));
        assert_eq!(item.length_unit, LengthUnit::Yard);
        assert_eq!(item.qty_type, QtyType::FabricQty);
        assert_eq!(written, vec![LineField::QtyUnit, LineField::LengthUnit]);
    }

    #[test]
    fn test_set_plain_fields() {
        let mut item = LineItem::new(100.0, "Meter");
        assert_eq!(item.set(LineUpdate::Qty(12.0)), vec![LineField::Qty]);
        item.set(LineUpdate::DesignGap(2.0));
        item.set(LineUpdate::WastagePercent(5.0));
        item.set(LineUpdate::StockUnit("Yard".into()));
        assert_eq!(item.qty, 12.0);
        assert_eq!(item.design_gap, 2.0);
        assert_eq!(item.wastage_percent, 5.0);
        assert_eq!(item.stock_unit, "Yard");
    }

    #[test]
    fn test_is_blank() {
        let mut item = LineItem::new(100.0, "");
        assert!(!item.is_blank(LineField::DesignHeight));
        assert!(item.is_blank(LineField::Qty));
        assert!(item.is_blank(LineField::QtyUnit));
        assert!(item.is_blank(LineField::StockUnit));

        item.set(LineUpdate::QtyUnit(QtyUnit::Panel));
        item.set(LineUpdate::WastagePercent(5.0));
        assert!(!item.is_blank(LineField::QtyUnit));
        assert!(!item.is_blank(LineField::WastagePercent));
        assert!(item.is_blank(LineField::LengthUnit));
    }

    #[test]
    fn test_enforce_panel_invariant() {
        let mut item = LineItem {
            qty_unit: QtyUnit::Panel,
            qty_type: QtyType::FabricQty,
            ..Default::default()
        };
        assert!(item.enforce_panel_invariant());
        assert_eq!(item.qty_type, QtyType::PrintQty);
        assert!(!item.enforce_panel_invariant());

        let mut item = LineItem {
            qty_type: QtyType::FabricQty,
            ..Default::default()
        };
        assert!(!item.enforce_panel_invariant());
        assert_eq!(item.qty_type, QtyType::FabricQty);
    }

    #[test]
    fn test_deserialize_with_derived_fields() {
        let item: LineItem = serde_json::from_str(
            r#"{
                "design_height": 100,
                "qty": 10,
                "qty_unit": "Panel",
                "length_unit": "Inch",
                "stock_unit": "Meter",
                "print_length": 7.5
            }"#,
        )
        .unwrap();
        assert!(item.is_panel());
        assert_eq!(item.qty_type, QtyType::PrintQty);
        assert_eq!(item.derived.print_length, 7.5);
    }
}
