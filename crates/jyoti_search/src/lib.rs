//! Event-boundary search for the panchanga elements.
//!
//! This crate provides:
//! - A generic transit solver for angular functions of time
//! - A data-driven element table (tithi, karana, nakshatra, pada, yoga)
//! - Current-boundary search, forward span scanning and next-occurrence
//!   lookup for any element
//! - A sunrise-anchored daily panchang with kshaya/vriddhi tithi detection

pub mod boundary;
pub mod element;
pub mod error;
pub mod panchang;
pub mod panchang_types;
pub mod search_util;

pub use boundary::{
    BoundaryEvent, CivilBoundary, DEFAULT_LOOKAHEAD_DAYS, MAX_LOOKAHEAD_DAYS, element_spans,
    find_element_boundary, find_element_boundary_with, next_occurrence,
};
pub use element::{ELEMENT_TABLE, ElementFunction, ElementKind, ElementSpec};
pub use error::SearchError;
pub use panchang::{daily_panchang, panchang_at_sunrise};
pub use panchang_types::{PanchangConfig, PanchangElement, PanchangInfo, TithiTransition};
pub use search_util::{Crossing, TransitConfig, find_crossing};
