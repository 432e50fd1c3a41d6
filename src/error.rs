//! Error types for print order calculation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for print order processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Malformed order or config document (-3)
    ParseError = -3,
    /// Unrecognized quantity unit or length unit (E100)
    UnsupportedUnit = 100,
    /// Unrecognized quantity type (E101)
    UnsupportedQtyType = 101,
    /// Row index does not exist (E200)
    RowOutOfRange = 200,
    /// Batch scope closed without being opened (E201)
    BatchNotOpen = 201,
}

/// Main error type for the calculation engine.
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Unsupported unit '{value}': expected Panel, Inch, Yard or Meter")]
    UnsupportedUnit { value: String },

    #[error("Unsupported quantity type '{value}': expected 'Print Qty' or 'Fabric Qty'")]
    UnsupportedQtyType { value: String },

    #[error("Row {row} out of range: order has {len} item(s)")]
    RowOutOfRange { row: usize, len: usize },

    #[error("end_batch called without a matching begin_batch")]
    BatchNotOpen,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CalcError::FileNotFound { .. } => ErrorCode::FileNotFound,
            CalcError::UnsupportedUnit { .. } => ErrorCode::UnsupportedUnit,
            CalcError::UnsupportedQtyType { .. } => ErrorCode::UnsupportedQtyType,
            CalcError::RowOutOfRange { .. } => ErrorCode::RowOutOfRange,
            CalcError::BatchNotOpen => ErrorCode::BatchNotOpen,
            CalcError::Io(_) => ErrorCode::FileNotFound,
            CalcError::Json(_) => ErrorCode::ParseError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for calculation operations.
pub type Result<T> = std::result::Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = CalcError::UnsupportedUnit {
            value: "Furlong".into(),
        };
        assert_eq!(err.code(), ErrorCode::UnsupportedUnit);
        assert_eq!(err.code_value(), 100);

        let err = CalcError::RowOutOfRange { row: 4, len: 2 };
        assert_eq!(err.code_value(), 200);
        assert_eq!(err.to_string(), "Row 4 out of range: order has 2 item(s)");
    }

    #[test]
    fn test_json_error_maps_to_parse_error() {
        let err: CalcError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), ErrorCode::ParseError);
    }
}
