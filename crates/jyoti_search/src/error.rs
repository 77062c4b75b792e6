//! Error types for boundary search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_vedic_base::VedicError;

use crate::element::ElementKind;

/// Errors from search operations.
///
/// Non-convergence of a single crossing is not an error: it is reported on
/// the [`crate::Crossing`] itself.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid search or panchang configuration.
    InvalidConfig(&'static str),
    /// Sector index outside the element's range.
    InvalidIndex { kind: ElementKind, index: u32 },
    /// The Sun does not rise on the requested day (polar latitudes).
    NoSunrise,
    /// Error from the rise/set or classification layer.
    Vedic(VedicError),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid search config: {msg}"),
            Self::InvalidIndex { kind, index } => write!(
                f,
                "{} index {index} out of range 0..{}",
                kind.name(),
                kind.sectors()
            ),
            Self::NoSunrise => write!(f, "the sun does not rise on this day at this location"),
            Self::Vedic(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SearchError {}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}
