//! Sun and Moon from the Surya Siddhanta mean-motion model.
//!
//! Mean longitudes are linear in the Ahargana (days since the Kali epoch),
//! scaled by the number of revolutions each body completes in a Mahayuga.
//! A single manda (equation of centre) correction turns the mean into the
//! true longitude. The result is referred to the fixed sidereal zodiac.
//!
//! Source: Surya Siddhanta, ch. 1 (revolution counts) and ch. 2 (manda
//! epicycles), in Burgess's translation (1860).

use jyoti_math::normalize_360;

/// Sidereal days (star revolutions) in a Mahayuga.
pub const STAR_REVOLUTIONS: f64 = 1_582_237_828.0;
/// Solar revolutions in a Mahayuga.
pub const SUN_REVOLUTIONS: f64 = 4_320_000.0;
/// Lunar revolutions in a Mahayuga.
pub const MOON_REVOLUTIONS: f64 = 57_753_336.0;
/// Revolutions of the lunar apogee (candrocca) in a Mahayuga.
pub const MOON_APOGEE_REVOLUTIONS: f64 = 488_203.0;
/// Civil (savana) days in a Mahayuga.
pub const CIVIL_DAYS: f64 = STAR_REVOLUTIONS - SUN_REVOLUTIONS;

/// Solar apogee, 77°17′.
const SUN_APOGEE_DEG: f64 = 77.0 + 17.0 / 60.0;
/// Solar manda epicycle, 13°50′ (in degrees of a 360° deferent).
const SUN_EPICYCLE_DEG: f64 = 13.0 + 50.0 / 60.0;
/// Lunar manda epicycle, 31°50′.
const MOON_EPICYCLE_DEG: f64 = 31.0 + 50.0 / 60.0;
/// Offset between the candrocca count and the apogee at the epoch.
const MOON_APOGEE_OFFSET_DEG: f64 = 90.0;

/// Mean longitude in degrees after `ahargana` days, for a body making
/// `revolutions` turns per Mahayuga.
pub fn mean_longitude_deg(ahargana: f64, revolutions: f64) -> f64 {
    let turns = revolutions * ahargana / CIVIL_DAYS;
    360.0 * (turns - turns.floor())
}

/// Manda correction in degrees for anomaly `anomaly_deg` and epicycle
/// `epicycle_deg`: `asin(epicycle / 360 · sin(anomaly))`.
pub fn manda_correction_deg(anomaly_deg: f64, epicycle_deg: f64) -> f64 {
    (epicycle_deg / 360.0 * anomaly_deg.to_radians().sin())
        .asin()
        .to_degrees()
}

/// True sidereal longitude of the Sun in degrees, [0, 360).
pub fn sun_longitude_deg(ahargana: f64) -> f64 {
    let mean = mean_longitude_deg(ahargana, SUN_REVOLUTIONS);
    normalize_360(mean - manda_correction_deg(mean - SUN_APOGEE_DEG, SUN_EPICYCLE_DEG))
}

/// Longitude of the lunar apogee in degrees, [0, 360).
pub fn moon_apogee_deg(ahargana: f64) -> f64 {
    normalize_360(mean_longitude_deg(ahargana, MOON_APOGEE_REVOLUTIONS) + MOON_APOGEE_OFFSET_DEG)
}

/// True sidereal longitude of the Moon in degrees, [0, 360).
pub fn moon_longitude_deg(ahargana: f64) -> f64 {
    let mean = mean_longitude_deg(ahargana, MOON_REVOLUTIONS);
    let apogee = moon_apogee_deg(ahargana);
    normalize_360(mean - manda_correction_deg(mean - apogee, MOON_EPICYCLE_DEG))
}
