//! Input validation module.

mod validate;

pub use validate::*;
