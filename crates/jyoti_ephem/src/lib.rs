//! Low-precision analytic ephemeris for the nine grahas.
//!
//! This crate provides:
//! - Sun and Moon from the Surya Siddhanta mean-motion model (natively
//!   sidereal) or from truncated classical series (natively tropical)
//! - Mercury through Saturn from linear osculating elements and a
//!   fixed-iteration Kepler solver
//! - Mean and true lunar nodes (Rahu, Ketu)
//! - An [`Ephemeris`] that evaluates any [`Body`] to an [`EclipticPosition`]
//!   with finite-difference speed and retrograde flag
//!
//! Every function is pure; an `Ephemeris` holds only its configuration and
//! can be shared freely across threads.

pub mod body;
pub mod classical;
pub mod engine;
pub mod error;
pub mod kepler;
pub mod lunar_nodes;
pub mod surya_siddhanta;

pub use body::Body;
pub use engine::{
    EclipticPosition, Ephemeris, EphemerisConfig, LuminaryTheory, SPEED_STEP_DAYS,
};
pub use error::EphemError;
pub use kepler::{OrbitalElements, geocentric_lon_lat, heliocentric_ecliptic, solve_kepler};
pub use lunar_nodes::{NODE_SPEED_DEG_PER_DAY, NodeMode, ketu_deg, mean_rahu_deg, rahu_deg};
