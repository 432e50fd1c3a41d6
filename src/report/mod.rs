//! Text output of calculated orders.

mod summary;

pub use summary::{render_summary, OrderSummary};
