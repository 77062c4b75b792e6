//! Error type for ephemeris configuration.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building an [`crate::Ephemeris`].
///
/// Position evaluation itself is infallible.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    InvalidConfig(&'static str),
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid ephemeris config: {msg}"),
        }
    }
}

impl Error for EphemError {}
