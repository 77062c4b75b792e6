//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Invalid rise/set configuration.
    InvalidConfig(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid rise/set config: {msg}"),
        }
    }
}

impl Error for VedicError {}
