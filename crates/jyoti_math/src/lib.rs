//! Small numeric building blocks shared by the jyoti crates.
//!
//! - Angle normalization into [0, 360) and (-180, 180]
//! - Finite-difference rate of change for wrap-around quantities
//! - Three-point (quadratic) interpolation over equally spaced samples

pub mod angle;
pub mod interpolate;
pub mod numeric;

pub use angle::{normalize_360, normalize_pm180, sector_index, unwrap_near};
pub use interpolate::{Quadratic3, interpolate3};
pub use numeric::{angular_rate, polynomial};
