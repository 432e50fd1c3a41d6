//! Configuration constants and settings for the calculation engine.

use crate::calc::{ConversionTable, FieldPrecision, PrecisionField};
use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Conversion factor: inch to meter.
pub const INCH_TO_METER: f64 = 0.0254;

/// Conversion factor: yard to meter.
pub const YARD_TO_METER: f64 = 0.9144;

/// Conversion factor: meter to meter.
pub const METER_TO_METER: f64 = 1.0;

/// Built-in length conversion pairs, keyed `{from}_to_{to}` in lowercase.
pub const BUILTIN_CONVERSIONS: &[(&str, f64)] = &[
    ("inch_to_meter", INCH_TO_METER),
    ("yard_to_meter", YARD_TO_METER),
    ("meter_to_meter", METER_TO_METER),
];

/// Decimal places used for any field without a declared precision.
pub const DEFAULT_FLOAT_PRECISION: u32 = 3;

/// Decimal places a value is normalised to before rounding, absorbing binary noise.
pub const NOISE_DECIMALS: i32 = 8;

/// Wastage percentage at which all fabric is considered lost.
pub const TOTAL_LOSS_PERCENT: f64 = 100.0;

/// Rounding method applied when storing derived values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMethod {
    /// Half away from zero; an exact half at zero precision rounds to even.
    #[default]
    Legacy,
    /// Banker's rounding at every precision.
    HalfEven,
}

/// Calculation settings supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Rounding method for every rounded field.
    pub rounding: RoundingMethod,
    /// Precision for fields missing from `precisions`.
    pub default_precision: u32,
    /// Per-field declared precision.
    pub precisions: BTreeMap<PrecisionField, u32>,
    /// Extra conversion pairs on top of the built-ins, keyed `{from}_to_{to}`.
    pub extra_factors: BTreeMap<String, f64>,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            rounding: RoundingMethod::default(),
            default_precision: DEFAULT_FLOAT_PRECISION,
            precisions: BTreeMap::new(),
            extra_factors: BTreeMap::new(),
        }
    }
}

impl CalcConfig {
    /// Parse a config from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CalcError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Build the conversion table: built-ins plus any registered extras.
    pub fn conversion_table(&self) -> ConversionTable {
        let mut table = ConversionTable::default();
        for (key, factor) in &self.extra_factors {
            table.register_key(key, *factor);
        }
        table
    }

    /// Build the per-field precision policy.
    pub fn field_precision(&self) -> FieldPrecision {
        let mut precision = FieldPrecision::new(self.default_precision, self.rounding);
        for (field, places) in &self.precisions {
            precision.declare(*field, *places);
        }
        precision
    }
}
