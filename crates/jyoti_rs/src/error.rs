//! Unified error type for the convenience API.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyoti_ephem::EphemError;
use jyoti_search::SearchError;
use jyoti_vedic_base::VedicError;

/// Errors from the convenience API.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum JyotiError {
    /// [`crate::init`] was called after the engine was already set.
    AlreadyInitialized,
    Ephem(EphemError),
    Vedic(VedicError),
    Search(SearchError),
}

impl Display for JyotiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "ephemeris already initialized"),
            Self::Ephem(e) => write!(f, "ephemeris: {e}"),
            Self::Vedic(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "search: {e}"),
        }
    }
}

impl Error for JyotiError {}

impl From<EphemError> for JyotiError {
    fn from(e: EphemError) -> Self {
        Self::Ephem(e)
    }
}

impl From<VedicError> for JyotiError {
    fn from(e: VedicError) -> Self {
        Self::Vedic(e)
    }
}

impl From<SearchError> for JyotiError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}
