//! Quantity calculation: unit conversion, rounding, line and total math.

mod conversion;
mod line;
mod precision;
mod rounding;
mod totals;

pub use conversion::ConversionTable;
pub use line::{add_wastage, compute_line, remove_wastage, round_inputs};
pub use precision::{FieldPrecision, PrecisionContext, PrecisionField, PrecisionPolicy};
pub use rounding::flt;
pub use totals::recompute_totals;
