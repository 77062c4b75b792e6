//! Convenience wrapper for the jyoti panchanga engine.
//!
//! Provides a process-wide ephemeris and high-level functions that accept
//! local civil date-times directly, removing the need to manage an
//! `Ephemeris` handle or convert civil time to UT and TT by hand.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use jyoti_rs::*;
//!
//! let date = CivilDateTime::date(2024, 1, 15, 5.75)?;
//! let info = panchang(&date, &GeoLocation::KATHMANDU)?;
//! println!("{} / {}", info.tithi.name(), info.nakshatra.name());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod convenience;
pub mod error;
pub mod global;

// Primary re-exports; callers should only need `use jyoti_rs::*`
pub use convenience::{
    body_longitude, find_element_boundary, kundali, moonrise_moonset, next_occurrence, panchang,
    sidereal_longitude, sidereal_longitude_with, sunrise_sunset,
};
pub use error::JyotiError;
pub use global::{init, is_initialized};

// Re-export the types the convenience functions take and return.
pub use jyoti_ephem::{Body, EclipticPosition, EphemerisConfig, LuminaryTheory, NodeMode};
pub use jyoti_frames::AyanamshaSystem;
pub use jyoti_search::{
    BoundaryEvent, CivilBoundary, Crossing, ElementKind, PanchangElement, PanchangInfo,
    TithiTransition,
};
pub use jyoti_time::{CivilDateTime, Instant, Tt, Ut};
pub use jyoti_vedic_base::{
    GeoLocation, Karana, Kundali, Nakshatra, Paksha, Rashi, RiseSetPair, RiseSetResult, Tithi,
    Vaar, Yoga,
};
