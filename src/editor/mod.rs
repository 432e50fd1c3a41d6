//! Change handling: recalculation rules and the editing session.

mod session;
mod trigger;

pub use session::{NoRefresh, OrderEditor, RefreshHook};
pub use trigger::{line_field_triggers, recalc_scope, ChangeEvent, RecalcScope};
