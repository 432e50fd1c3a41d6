//! Cascading order defaults into line items.

use crate::model::{
    LengthUnit, LineField, LineItem, LineUpdate, Order, OrderDefaults, QtyType, QtyUnit,
};
use tracing::debug;

/// Order defaults eligible for cascading into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefaultField {
    Gap,
    Qty,
    QtyUnit,
    QtyType,
    Wastage,
    LengthUnit,
}

impl DefaultField {
    /// All cascading defaults, in the order they are applied to a new line.
    pub const ALL: [DefaultField; 6] = [
        DefaultField::Gap,
        DefaultField::Qty,
        DefaultField::QtyUnit,
        DefaultField::QtyType,
        DefaultField::Wastage,
        DefaultField::LengthUnit,
    ];

    /// The line field this default writes.
    pub fn line_field(&self) -> LineField {
        match self {
            DefaultField::Gap => LineField::DesignGap,
            DefaultField::Qty => LineField::Qty,
            DefaultField::QtyUnit => LineField::QtyUnit,
            DefaultField::QtyType => LineField::QtyType,
            DefaultField::Wastage => LineField::WastagePercent,
            DefaultField::LengthUnit => LineField::LengthUnit,
        }
    }
}

/// A typed write to one order default. `None` clears it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultUpdate {
    Gap(Option<f64>),
    Qty(Option<f64>),
    QtyUnit(Option<QtyUnit>),
    QtyType(Option<QtyType>),
    Wastage(Option<f64>),
    LengthUnit(Option<LengthUnit>),
}

impl DefaultUpdate {
    /// The default this update writes.
    pub fn field(&self) -> DefaultField {
        match self {
            DefaultUpdate::Gap(_) => DefaultField::Gap,
            DefaultUpdate::Qty(_) => DefaultField::Qty,
            DefaultUpdate::QtyUnit(_) => DefaultField::QtyUnit,
            DefaultUpdate::QtyType(_) => DefaultField::QtyType,
            DefaultUpdate::Wastage(_) => DefaultField::Wastage,
            DefaultUpdate::LengthUnit(_) => DefaultField::LengthUnit,
        }
    }
}

impl OrderDefaults {
    /// The line write for `field`, or `None` when the default is unset or zero.
    pub fn line_update(&self, field: DefaultField) -> Option<LineUpdate> {
        match field {
            DefaultField::Gap => is_set(self.default_gap).map(LineUpdate::DesignGap),
            DefaultField::Qty => is_set(self.default_qty).map(LineUpdate::Qty),
            DefaultField::QtyUnit => self.default_qty_unit.map(LineUpdate::QtyUnit),
            DefaultField::QtyType => self.default_qty_type.map(LineUpdate::QtyType),
            DefaultField::Wastage => is_set(self.default_wastage_percent).map(LineUpdate::WastagePercent),
            DefaultField::LengthUnit => self.default_length_unit.map(LineUpdate::LengthUnit),
        }
    }
}

fn is_set(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

/// Write one order default and its dependent defaults.
///
/// A panel quantity unit forces the print quantity type; a length quantity
/// unit also becomes the default length unit. Returns every default written,
/// the requested one first.
pub fn set_default(defaults: &mut OrderDefaults, update: DefaultUpdate) -> Vec<DefaultField> {
    let mut written = vec![update.field()];
    match update {
        DefaultUpdate::Gap(v) => defaults.default_gap = v,
        DefaultUpdate::Qty(v) => defaults.default_qty = v,
        DefaultUpdate::QtyUnit(v) => {
            defaults.default_qty_unit = v;
            match v {
                Some(QtyUnit::Panel) => {
                    defaults.default_qty_type = Some(QtyType::PrintQty);
                    written.push(DefaultField::QtyType);
                }
                Some(QtyUnit::Length(unit)) => {
                    defaults.default_length_unit = Some(unit);
                    written.push(DefaultField::LengthUnit);
                }
                None => {}
            }
        }
        DefaultUpdate::QtyType(v) => defaults.default_qty_type = v,
        DefaultUpdate::Wastage(v) => defaults.default_wastage_percent = v,
        DefaultUpdate::LengthUnit(v) => defaults.default_length_unit = v,
    }
    written
}

/// Write the order's current `field` default into every line.
///
/// Lines are left untouched when the default is unset or zero. Does not
/// recalculate. Returns the number of lines written.
pub fn apply_default(order: &mut Order, field: DefaultField) -> usize {
    let Some(update) = order.defaults.line_update(field) else {
        debug!("Default {:?} is unset, lines keep their values", field);
        return 0;
    };

    for item in &mut order.items {
        item.set(update.clone());
    }
    debug!("Applied default {:?} to {} line(s)", field, order.items.len());
    order.items.len()
}

/// Write every set default into one line. Returns the line fields written.
pub fn apply_all_defaults(defaults: &OrderDefaults, item: &mut LineItem) -> Vec<LineField> {
    let mut written = Vec::new();
    for field in DefaultField::ALL {
        if let Some(update) = defaults.line_update(field) {
            written.extend(item.set(update));
        }
    }
    written
}

/// Write set defaults only into fields the line leaves blank.
///
/// Values the caller supplied are kept, including against the side effects
/// of a defaulted quantity unit; a panel unit still forces the print quantity
/// type. Returns the line fields written.
pub fn fill_blank_defaults(defaults: &OrderDefaults, item: &mut LineItem) -> Vec<LineField> {
    let supplied = item.clone();
    let mut written = Vec::new();
    for field in DefaultField::ALL {
        if !supplied.is_blank(field.line_field()) {
            continue;
        }
        if let Some(update) = defaults.line_update(field) {
            written.extend(item.set(update));
        }
    }

    if !supplied.is_blank(LineField::LengthUnit) {
        item.length_unit = supplied.length_unit;
    }
    if !supplied.is_blank(LineField::QtyType) && !item.is_panel() {
        item.qty_type = supplied.qty_type;
    }
    let forced_print_qty = item.is_panel();
    written.retain(|field| {
        supplied.is_blank(*field) || (*field == LineField::QtyType && forced_print_qty)
    });
    written.dedup();
    written
}
