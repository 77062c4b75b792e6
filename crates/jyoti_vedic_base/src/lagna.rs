//! Lagna (ascendant) and MC (midheaven).
//!
//! Standard spherical astronomy on the local sidereal time θ, the mean
//! obliquity ε and the latitude φ:
//!
//! - `Asc = atan2(cos θ, −(sin θ·cos ε + tan φ·sin ε))`
//! - `MC  = atan2(sin θ, cos θ·cos ε)`
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 13.

use jyoti_ephem::Ephemeris;
use jyoti_frames::mean_obliquity_deg;
use jyoti_math::normalize_360;
use jyoti_time::{Instant, Ut, jd_to_centuries, local_sidereal_time_deg};

use crate::riseset_types::GeoLocation;

fn ascendant_from_lst(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let (st, ct) = lst_deg.to_radians().sin_cos();
    let (se, ce) = obliquity_deg.to_radians().sin_cos();
    let tan_phi = latitude_deg.to_radians().tan();
    normalize_360(ct.atan2(-(st * ce + tan_phi * se)).to_degrees())
}

fn mc_from_lst(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let (st, ct) = lst_deg.to_radians().sin_cos();
    normalize_360(st.atan2(ct * obliquity_deg.to_radians().cos()).to_degrees())
}

/// Tropical ecliptic longitude of the ascendant, degrees in [0, 360).
pub fn lagna_longitude_deg(t: Instant<Ut>, location: &GeoLocation) -> f64 {
    let lst = local_sidereal_time_deg(t.jd(), location.longitude_deg);
    let eps = mean_obliquity_deg(jd_to_centuries(t.jd()));
    ascendant_from_lst(lst, location.latitude_deg, eps)
}

/// Tropical ecliptic longitude of the midheaven, degrees in [0, 360).
pub fn mc_longitude_deg(t: Instant<Ut>, location: &GeoLocation) -> f64 {
    let lst = local_sidereal_time_deg(t.jd(), location.longitude_deg);
    mc_from_lst(lst, mean_obliquity_deg(jd_to_centuries(t.jd())))
}

/// Ascendant in the ephemeris' configured sidereal zodiac.
pub fn sidereal_lagna_deg(ephem: &Ephemeris, t: Instant<Ut>, location: &GeoLocation) -> f64 {
    normalize_360(lagna_longitude_deg(t, location) - ephem.ayanamsha(t.to_tt()))
}
