//! Coordinate frames for ephemeris computations.
//!
//! Provides cartesian ↔ spherical conversion, the orbital-plane rotation,
//! ecliptic → equatorial conversion, the mean obliquity, general precession,
//! and the ayanamsha offset between the tropical and sidereal zodiacs.

pub mod ayanamsha;
pub mod obliquity;
pub mod precession;
pub mod rotation;
pub mod spherical;

pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
pub use rotation::{ecliptic_to_equatorial, orbital_to_ecliptic};
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
