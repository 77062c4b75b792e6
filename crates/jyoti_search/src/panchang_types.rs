//! Value types for the daily panchang.

use jyoti_time::{CivilDateTime, Instant, Ut};
use jyoti_vedic_base::{
    GeoLocation, Karana, Nakshatra, Paksha, RiseSetConfig, RiseSetResult, Tithi, Vaar, Yoga,
};

use crate::boundary::BoundaryEvent;
use crate::element::ElementKind;
use crate::error::SearchError;
use crate::search_util::TransitConfig;

/// Solver and horizon settings for a panchang.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanchangConfig {
    pub transit: TransitConfig,
    pub riseset: RiseSetConfig,
}

impl PanchangConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        self.transit.validate()?;
        self.riseset.validate()?;
        Ok(())
    }
}

/// One element in force at sunrise, with its span.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanchangElement {
    pub kind: ElementKind,
    pub index: u32,
    pub name: String,
    pub boundary: BoundaryEvent,
}

/// How the tithi sequence behaves between this sunrise and the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TithiTransition {
    /// The next sunrise has the following tithi.
    Normal,
    /// The given tithi begins and ends between the two sunrises, so no
    /// sunrise falls in it.
    Kshaya(Tithi),
    /// The same tithi prevails at both sunrises.
    Vriddhi,
}

impl TithiTransition {
    /// Classify from the tithi indices at two consecutive sunrises.
    pub fn from_indices(today: u32, tomorrow: u32) -> Self {
        let advance = (tomorrow + 30 - today % 30) % 30;
        match advance {
            0 => Self::Vriddhi,
            2 => Self::Kshaya(Tithi::from_index(((today + 1) % 30) as u8)),
            _ => Self::Normal,
        }
    }
}

/// The panchang for one civil day, anchored at local sunrise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanchangInfo {
    /// Local date and time of sunrise.
    pub date: CivilDateTime,
    pub location: GeoLocation,
    pub sunrise: Instant<Ut>,
    pub next_sunrise: Option<Instant<Ut>>,
    pub sunset: RiseSetResult,
    pub moonrise: RiseSetResult,
    pub moonset: RiseSetResult,
    /// Weekday of the sunrise's civil date.
    pub vaar: Vaar,
    pub paksha: Paksha,
    pub tithi: Tithi,
    pub karana: Karana,
    pub nakshatra: Nakshatra,
    /// Pada within the nakshatra, 1–4.
    pub pada: u8,
    pub yoga: Yoga,
    /// All five elements in table order.
    pub elements: Vec<PanchangElement>,
    pub tithi_transition: TithiTransition,
}

impl PanchangInfo {
    pub fn element(&self, kind: ElementKind) -> Option<&PanchangElement> {
        self.elements.iter().find(|e| e.kind == kind)
    }
}
