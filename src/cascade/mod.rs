//! Order default propagation.

mod defaults;

pub use defaults::{
    apply_all_defaults, apply_default, fill_blank_defaults, set_default, DefaultField,
    DefaultUpdate,
};
