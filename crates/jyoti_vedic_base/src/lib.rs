//! Vedic classification and horizon calculations built on the ephemeris.
//!
//! This crate provides:
//! - Sector classifiers and names for tithi, karana, nakshatra/pada, yoga,
//!   rashi and vaar
//! - Sunrise/sunset and moonrise/moonset for a civil date and location
//! - Lagna (ascendant) and whole-sign kundali positions

pub mod error;
pub mod graha;
pub mod karana;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod riseset;
pub mod riseset_types;
pub mod tithi;
pub mod vaar;
pub mod yoga;

pub use error::VedicError;
pub use graha::{GrahaPosition, Kundali, graha_position, kundali};
pub use karana::{
    ALL_KARANAS, KARANA_SPAN, Karana, KaranaInfo, karana_from_elongation, karana_from_index,
};
pub use lagna::{lagna_longitude_deg, mc_longitude_deg, sidereal_lagna_deg};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, navamsa_rashi, rashi_from_longitude};
pub use riseset::{moonrise_moonset, sun_transit_jd, sunrise_sunset};
pub use riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetPair, RiseSetResult};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SPAN, Tithi, TithiInfo, tithi_from_elongation};
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
pub use yoga::{ALL_YOGAS, YOGA_SPAN, Yoga, YogaInfo, yoga_from_sum};
