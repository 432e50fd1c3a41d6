//! Length unit conversion factors.

use crate::config::BUILTIN_CONVERSIONS;
use std::collections::BTreeMap;
use tracing::debug;

/// Multiplicative factors keyed by `{from}_to_{to}`, stored lowercase.
///
/// Lookups never fail: a pair with no registered factor converts with
/// identity so that unexpected stock units still calculate.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable {
    factors: BTreeMap<String, f64>,
}

impl Default for ConversionTable {
    fn default() -> Self {
        let mut table = Self::empty();
        for (key, factor) in BUILTIN_CONVERSIONS {
            table.register_key(key, *factor);
        }
        table
    }
}

impl ConversionTable {
    /// Create a table with no pairs registered.
    pub fn empty() -> Self {
        Self {
            factors: BTreeMap::new(),
        }
    }

    /// Build the lookup key for a unit pair.
    pub fn key(from: &str, to: &str) -> String {
        format!("{}_to_{}", from, to).to_lowercase()
    }

    /// Register a factor for `from` -> `to`.
    pub fn register(&mut self, from: &str, to: &str, factor: f64) {
        self.factors.insert(Self::key(from, to), factor);
    }

    /// Register a factor under a prebuilt `{from}_to_{to}` key.
    pub fn register_key(&mut self, key: &str, factor: f64) {
        self.factors.insert(key.to_lowercase(), factor);
    }

    /// Registered factor for a pair, if any. A zero factor counts as unregistered.
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        self.factors
            .get(&Self::key(from, to))
            .copied()
            .filter(|factor| *factor != 0.0)
    }

    /// Factor for `from` -> `to`, falling back to 1.
    pub fn factor(&self, from: &str, to: &str) -> f64 {
        self.get(from, to).unwrap_or_else(|| {
            debug!("No conversion registered for {}, using 1", Self::key(from, to));
            1.0
        })
    }

    /// Check if a pair has a usable factor.
    pub fn is_registered(&self, from: &str, to: &str) -> bool {
        self.get(from, to).is_some()
    }
}
