use jyoti_ephem::{Body, EclipticPosition};
use jyoti_frames::AyanamshaSystem;
use jyoti_search::{
    BoundaryEvent, DEFAULT_LOOKAHEAD_DAYS, ElementKind, PanchangConfig, PanchangInfo,
};
use jyoti_time::{CivilDateTime, Instant, Tt, Ut};
use jyoti_vedic_base::{GeoLocation, Kundali, RiseSetConfig, RiseSetPair};

use crate::error::JyotiError;
use crate::global::engine;

/// Dynamical-time instant of a civil date-time.
fn civil_to_tt(date: &CivilDateTime) -> Instant<Tt> {
    Instant::<Ut>::from_civil(date).to_tt()
}

/// Tropical ecliptic position of `body` at a civil date-time.
pub fn body_longitude(body: Body, date: &CivilDateTime) -> EclipticPosition {
    engine().body_longitude(body, civil_to_tt(date))
}

/// Sidereal ecliptic position of `body` at a civil date-time, using the
/// configured ayanamsha.
pub fn sidereal_longitude(body: Body, date: &CivilDateTime) -> EclipticPosition {
    engine().sidereal_position(body, civil_to_tt(date))
}

/// Sidereal ecliptic position of `body` at a civil date-time in an explicit
/// ayanamsha system, leaving the process-wide configuration untouched.
pub fn sidereal_longitude_with(
    body: Body,
    date: &CivilDateTime,
    system: AyanamshaSystem,
) -> EclipticPosition {
    engine().sidereal_position_with(body, civil_to_tt(date), system)
}

/// The span of `kind` in force at a civil date-time.
pub fn find_element_boundary(kind: ElementKind, date: &CivilDateTime) -> BoundaryEvent {
    jyoti_search::find_element_boundary(&engine(), kind, civil_to_tt(date))
}

/// The next span of sector `index` starting at or after a civil date-time,
/// searching up to a year ahead.
pub fn next_occurrence(
    kind: ElementKind,
    index: u32,
    date: &CivilDateTime,
) -> Result<Option<BoundaryEvent>, JyotiError> {
    Ok(jyoti_search::next_occurrence(
        &engine(),
        kind,
        index,
        civil_to_tt(date),
        DEFAULT_LOOKAHEAD_DAYS,
    )?)
}

/// Sunrise and sunset on the civil date of `date`.
pub fn sunrise_sunset(
    date: &CivilDateTime,
    location: &GeoLocation,
) -> Result<RiseSetPair, JyotiError> {
    location.validate()?;
    Ok(jyoti_vedic_base::sunrise_sunset(
        date,
        location,
        &RiseSetConfig::default(),
    ))
}

/// Moonrise and moonset on the civil date of `date`.
pub fn moonrise_moonset(
    date: &CivilDateTime,
    location: &GeoLocation,
) -> Result<RiseSetPair, JyotiError> {
    location.validate()?;
    Ok(jyoti_vedic_base::moonrise_moonset(
        date,
        location,
        &RiseSetConfig::default(),
        &engine(),
    ))
}

/// Sunrise-anchored panchang for the civil date of `date`.
pub fn panchang(date: &CivilDateTime, location: &GeoLocation) -> Result<PanchangInfo, JyotiError> {
    location.validate()?;
    Ok(jyoti_search::daily_panchang(
        &engine(),
        date,
        location,
        &PanchangConfig::default(),
    )?)
}

/// Birth chart for a civil date-time.
pub fn kundali(date: &CivilDateTime, location: &GeoLocation) -> Result<Kundali, JyotiError> {
    Ok(jyoti_vedic_base::kundali(
        &engine(),
        Instant::<Ut>::from_civil(date),
        location,
    )?)
}
