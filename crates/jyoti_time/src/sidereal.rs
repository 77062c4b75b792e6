//! Greenwich mean sidereal time and local sidereal time.
//!
//! GMST is built from the Earth Rotation Angle plus the IAU 2006 precession
//! polynomial. Inputs are Julian Days on the universal (UT) axis; this
//! crate does not distinguish UT1 from UT since ΔT is itself a model.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::TAU;

use jyoti_math::{normalize_360, polynomial};

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// GMST polynomial coefficients in arcseconds, ascending powers of T.
const GMST_POLY_ARCSEC: [f64; 6] = [
    0.014506,
    4612.156534,
    1.3915817,
    -0.00000044,
    -0.000029956,
    -0.0000000368,
];

/// Earth Rotation Angle in radians, [0, 2π).
pub fn earth_rotation_angle_rad(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich mean sidereal time in degrees, [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let era_deg = earth_rotation_angle_rad(jd_ut).to_degrees();
    normalize_360(era_deg + polynomial(t, &GMST_POLY_ARCSEC) / 3600.0)
}

/// Local sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    normalize_360(gmst_deg(jd_ut) + longitude_east_deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let deg = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((deg - 280.46).abs() < 0.1, "ERA = {deg}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-01-01 0h UT: GMST = 6h 39m 51.17s ≈ 99.9674°
        let g = gmst_deg(2_451_544.5);
        assert!((g - 99.967).abs() < 0.01, "GMST = {g}");
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 April 10, 0h UT: 13h 10m 46.3668s = 197.693195°
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693_195).abs() < 0.001, "GMST = {g}");
    }

    #[test]
    fn gmst_advances_a_sidereal_day() {
        let d = normalize_360(gmst_deg(2_460_001.5) - gmst_deg(2_460_000.5));
        // 360.9856° per solar day, i.e. 0.9856° after wrapping
        assert!((d - 0.9856).abs() < 1e-3, "daily advance = {d}");
    }

    #[test]
    fn lst_adds_longitude() {
        let jd = 2_460_310.5;
        let lst = local_sidereal_time_deg(jd, 85.3);
        assert!((lst - normalize_360(gmst_deg(jd) + 85.3)).abs() < 1e-12);
    }

    #[test]
    fn ranges() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_440_000.5] {
            assert!((0.0..TAU).contains(&earth_rotation_angle_rad(jd)));
            assert!((0.0..360.0).contains(&gmst_deg(jd)));
        }
    }
}
