//! Graha positions and the whole-sign kundali.

use jyoti_ephem::{Body, Ephemeris};
use jyoti_time::{Instant, Tt, Ut};

use crate::error::VedicError;
use crate::lagna::sidereal_lagna_deg;
use crate::nakshatra::{NakshatraInfo, nakshatra_from_longitude};
use crate::rashi::{Rashi, RashiInfo, navamsa_rashi, rashi_from_longitude};
use crate::riseset_types::GeoLocation;

/// One graha placed in the sidereal zodiac.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrahaPosition {
    pub body: Body,
    /// Sidereal longitude, degrees.
    pub longitude: f64,
    /// Degrees/day.
    pub speed: f64,
    pub retrograde: bool,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
    pub navamsa: Rashi,
    /// Whole-sign house from the lagna, 1-12.
    pub house: u8,
}

/// Sidereal position of one body with its sign, mansion and house.
pub fn graha_position(
    ephem: &Ephemeris,
    body: Body,
    t: Instant<Tt>,
    lagna: Rashi,
) -> GrahaPosition {
    let pos = ephem.sidereal_position(body, t);
    let rashi = rashi_from_longitude(pos.longitude);
    GrahaPosition {
        body,
        longitude: pos.longitude,
        speed: pos.speed,
        retrograde: pos.retrograde,
        rashi,
        nakshatra: nakshatra_from_longitude(pos.longitude),
        navamsa: navamsa_rashi(pos.longitude),
        house: rashi.rashi.house_from(lagna),
    }
}

/// Birth chart: sidereal lagna plus the nine grahas in whole-sign houses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kundali {
    pub instant: Instant<Ut>,
    pub location: GeoLocation,
    /// Sidereal ascendant, degrees.
    pub lagna_longitude: f64,
    pub lagna: RashiInfo,
    pub lagna_nakshatra: NakshatraInfo,
    pub lagna_navamsa: Rashi,
    /// In [`Body::all`] order.
    pub grahas: Vec<GrahaPosition>,
}

impl Kundali {
    pub fn graha(&self, body: Body) -> Option<&GrahaPosition> {
        self.grahas.iter().find(|g| g.body == body)
    }

    /// Grahas occupying a whole-sign house (1-12).
    pub fn occupants(&self, house: u8) -> impl Iterator<Item = &GrahaPosition> {
        self.grahas.iter().filter(move |g| g.house == house)
    }
}

/// Cast the kundali for a universal-time instant and location.
pub fn kundali(
    ephem: &Ephemeris,
    t: Instant<Ut>,
    location: &GeoLocation,
) -> Result<Kundali, VedicError> {
    location.validate()?;
    let lagna_longitude = sidereal_lagna_deg(ephem, t, location);
    let lagna = rashi_from_longitude(lagna_longitude);
    let tt = t.to_tt();
    let grahas = Body::all()
        .iter()
        .map(|&body| graha_position(ephem, body, tt, lagna.rashi))
        .collect();
    log::debug!("kundali at {t}: lagna {} {:.2}°", lagna.rashi.name(), lagna.degrees_in_rashi);
    Ok(Kundali {
        instant: t,
        location: *location,
        lagna_longitude,
        lagna,
        lagna_nakshatra: nakshatra_from_longitude(lagna_longitude),
        lagna_navamsa: navamsa_rashi(lagna_longitude),
        grahas,
    })
}
