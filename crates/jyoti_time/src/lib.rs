//! Time coordinates for the jyoti ephemeris.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions (proleptic Julian before 1582-10-15,
//!   Gregorian after)
//! - Typed instants on the dynamical (TT) and universal (UT) time axes
//! - ΔT estimation linking the two axes
//! - Ahargana, the day count from the Kali epoch
//! - Greenwich mean and local sidereal time
//! - Civil date-time fields with `chrono` interop

pub mod ahargana;
pub mod civil;
pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use ahargana::{KALI_EPOCH_JD, ahargana_to_jd, jd_to_ahargana};
pub use civil::CivilDateTime;
pub use delta_t::{delta_t_hours, delta_t_seconds, delta_t_seconds_for_year};
pub use error::TimeError;
pub use instant::{Instant, TimeScale, Tt, Ut};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar,
    jd_to_centuries, jd_to_decimal_year, weekday,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_deg, local_sidereal_time_deg};
