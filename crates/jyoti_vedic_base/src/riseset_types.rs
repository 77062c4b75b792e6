//! Types for sunrise/sunset and moonrise/moonset calculations.
//!
//! Provides the observer location, event kinds, configuration and result
//! types used by [`crate::riseset`].

use jyoti_time::{CivilDateTime, Instant, Ut};

use crate::error::VedicError;

/// Observer on the Earth's surface with a civil clock.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Civil UTC offset in hours (fractional offsets such as +5.75 allowed).
    pub utc_offset_hours: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, utc_offset_hours: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            utc_offset_hours,
        }
    }

    /// Kathmandu, Nepal (UTC+05:45).
    pub const KATHMANDU: Self = Self {
        latitude_deg: 27.7,
        longitude_deg: 85.3,
        utc_offset_hours: 5.75,
    };

    /// Check ranges. The numeric core does not re-validate.
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(VedicError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(VedicError::InvalidLocation("longitude must be within [-180, 180]"));
        }
        if !self.utc_offset_hours.is_finite() || self.utc_offset_hours.abs() > 14.0 {
            return Err(VedicError::InvalidLocation("utc offset must be within ±14 hours"));
        }
        Ok(())
    }

    /// Local civil fields of a UT instant at this location.
    pub fn civil(&self, t: Instant<Ut>) -> CivilDateTime {
        t.to_civil(self.utc_offset_hours)
    }
}

/// Horizon crossing kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiseSetEvent {
    Sunrise,
    Sunset,
    Moonrise,
    Moonset,
}

impl RiseSetEvent {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::Moonrise => "moonrise",
            Self::Moonset => "moonset",
        }
    }

    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise | Self::Moonrise)
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiseSetConfig {
    /// Apparent altitude of the Sun's centre at rise/set, degrees.
    /// Default −0.833 (34′ refraction plus 16′ semidiameter).
    pub sun_altitude_deg: f64,
    /// Altitude of the Moon's centre at rise/set, degrees. Default +0.125
    /// (parallax minus refraction and semidiameter).
    pub moon_altitude_deg: f64,
    /// Hour-angle refinement passes for the Moon. Default 4.
    pub moon_refinements: u32,
    /// Ratio of sidereal to solar day. Default 1.0027379.
    pub sidereal_rate: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            sun_altitude_deg: -0.833,
            moon_altitude_deg: 0.125,
            moon_refinements: 4,
            sidereal_rate: 1.002_737_9,
        }
    }
}

impl RiseSetConfig {
    pub fn validate(&self) -> Result<(), VedicError> {
        if !self.sun_altitude_deg.is_finite() || self.sun_altitude_deg.abs() > 18.0 {
            return Err(VedicError::InvalidConfig("sun_altitude_deg must be within ±18°"));
        }
        if !self.moon_altitude_deg.is_finite() || self.moon_altitude_deg.abs() > 5.0 {
            return Err(VedicError::InvalidConfig("moon_altitude_deg must be within ±5°"));
        }
        if self.moon_refinements == 0 || self.moon_refinements > 50 {
            return Err(VedicError::InvalidConfig("moon_refinements must be within 1..=50"));
        }
        if !self.sidereal_rate.is_finite() || !(0.9..1.1).contains(&self.sidereal_rate) {
            return Err(VedicError::InvalidConfig("sidereal_rate must be close to 1.0027"));
        }
        Ok(())
    }
}

/// Result of one rise/set search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiseSetResult {
    /// Event occurs at the given universal time.
    Event {
        instant: Instant<Ut>,
        event: RiseSetEvent,
    },
    /// Body stays below the horizon all day.
    NeverRises,
    /// Body stays above the horizon all day.
    NeverSets,
    /// The body does cross the horizon, but not within this civil day.
    /// Happens to the Moon roughly once a month.
    NoEventOnDay,
}

impl RiseSetResult {
    pub fn instant(&self) -> Option<Instant<Ut>> {
        match self {
            Self::Event { instant, .. } => Some(*instant),
            _ => None,
        }
    }

    /// Local civil time of the event, if any.
    pub fn civil(&self, location: &GeoLocation) -> Option<CivilDateTime> {
        self.instant().map(|t| location.civil(t))
    }

    pub fn is_event(&self) -> bool {
        matches!(self, Self::Event { .. })
    }
}

/// Rise and set for one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiseSetPair {
    pub rise: RiseSetResult,
    pub set: RiseSetResult,
}
