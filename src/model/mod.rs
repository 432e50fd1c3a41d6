//! Data model types for print orders.

mod line_item;
mod order;
mod units;

pub use line_item::{LineDerived, LineField, LineItem, LineUpdate};
pub use order::{Order, OrderDefaults, OrderTotals};
pub use units::{LengthUnit, QtyType, QtyUnit};
