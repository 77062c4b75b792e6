//! Error types for civil time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing or validating civil date-time fields.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Text could not be parsed as a date or date-time.
    Parse(String),
    /// A calendar field is out of range.
    InvalidField {
        field: &'static str,
        value: f64,
    },
    /// UTC offset outside [-14, +14] hours.
    InvalidOffset(f64),
    /// Value cannot be represented as a `chrono` date-time.
    Unrepresentable,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::InvalidField { field, value } => {
                write!(f, "invalid {field}: {value}")
            }
            Self::InvalidOffset(h) => write!(f, "UTC offset {h}h outside [-14, 14]"),
            Self::Unrepresentable => write!(f, "date-time not representable"),
        }
    }
}

impl Error for TimeError {}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}
