//! Unit and quantity-type enums accepted at the document boundary.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit a length is entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LengthUnit {
    #[default]
    Meter,
    Inch,
    Yard,
}

impl LengthUnit {
    /// Display name, as used in conversion keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "Meter",
            LengthUnit::Inch => "Inch",
            LengthUnit::Yard => "Yard",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meter" => Ok(LengthUnit::Meter),
            "inch" => Ok(LengthUnit::Inch),
            "yard" => Ok(LengthUnit::Yard),
            _ => Err(CalcError::UnsupportedUnit {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for LengthUnit {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<LengthUnit> for String {
    fn from(unit: LengthUnit) -> Self {
        unit.as_str().to_string()
    }
}

/// Unit a line quantity is expressed in: a panel count or a continuous length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QtyUnit {
    Panel,
    Length(LengthUnit),
}

impl QtyUnit {
    /// Whether the quantity counts panels.
    pub fn is_panel(&self) -> bool {
        matches!(self, QtyUnit::Panel)
    }
}

impl Default for QtyUnit {
    fn default() -> Self {
        QtyUnit::Length(LengthUnit::default())
    }
}

impl fmt::Display for QtyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QtyUnit::Panel => f.write_str("Panel"),
            QtyUnit::Length(unit) => unit.fmt(f),
        }
    }
}

impl FromStr for QtyUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("panel") {
            return Ok(QtyUnit::Panel);
        }
        s.parse().map(QtyUnit::Length)
    }
}

impl TryFrom<String> for QtyUnit {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QtyUnit> for String {
    fn from(unit: QtyUnit) -> Self {
        unit.to_string()
    }
}

impl From<LengthUnit> for QtyUnit {
    fn from(unit: LengthUnit) -> Self {
        QtyUnit::Length(unit)
    }
}

/// Which length the entered quantity states directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QtyType {
    /// Quantity is the printed length; fabric length is derived with wastage.
    #[default]
    PrintQty,
    /// Quantity is the fabric consumed; print length is derived with wastage.
    FabricQty,
}

impl QtyType {
    /// Display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            QtyType::PrintQty => "Print Qty",
            QtyType::FabricQty => "Fabric Qty",
        }
    }
}

impl fmt::Display for QtyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QtyType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "print qty" => Ok(QtyType::PrintQty),
            "fabric qty" => Ok(QtyType::FabricQty),
            _ => Err(CalcError::UnsupportedQtyType {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for QtyType {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QtyType> for String {
    fn from(qty_type: QtyType) -> Self {
        qty_type.as_str().to_string()
    }
}
