//! Mean obliquity of the ecliptic.
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), eq. 22.2, truncated
//! to the linear term. Good to a few arcseconds within a few centuries of
//! J2000, which is ample for horizon and ascendant work.

/// Mean obliquity at J2000.0 in degrees (84381.448″).
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_291;

/// Mean obliquity in degrees for `t` Julian centuries since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    OBLIQUITY_J2000_DEG - 0.013_004_2 * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_value() {
        assert_eq!(mean_obliquity_deg(0.0), OBLIQUITY_J2000_DEG);
    }

    #[test]
    fn decreasing() {
        assert!(mean_obliquity_deg(1.0) < mean_obliquity_deg(0.0));
        // ~47″ per century
        let d = (mean_obliquity_deg(0.0) - mean_obliquity_deg(1.0)) * 3600.0;
        assert!((d - 46.8).abs() < 0.1, "drift = {d}″");
    }
}
