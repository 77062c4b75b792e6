//! Degree-based angle normalization.
//!
//! Every angle crossing a crate boundary is expressed in degrees in
//! [0, 360). Differences that may wrap are folded into (-180, 180] before
//! they are used as a correction step or compared with a tolerance.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Normalize an angle difference to (-180, 180] degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let mut d = normalize_360(deg);
    if d > 180.0 {
        d -= 360.0;
    }
    d
}

/// Index of the equal sector containing `deg`, for a circle cut into
/// `sectors` pieces of `step` degrees.
///
/// The result is always in `0..sectors`, even when floating-point rounding
/// puts the normalized value a hair below 360.
pub fn sector_index(deg: f64, step: f64, sectors: u32) -> u32 {
    let idx = (normalize_360(deg) / step).floor() as u32;
    idx.min(sectors - 1)
}

/// Shift `deg` by whole turns so that it lies within 180 degrees of
/// `reference`. Used to unwrap a sequence of samples across 0/360.
pub fn unwrap_near(deg: f64, reference: f64) -> f64 {
    reference + normalize_pm180(deg - reference)
}
