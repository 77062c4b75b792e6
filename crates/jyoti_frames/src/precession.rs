//! General precession in ecliptic longitude.
//!
//! The accumulated westward motion of the equinox since J2000.0, truncated
//! to the quadratic term of the IAU 2006 series (Capitaine, Wallace &
//! Chapront 2003, Table 1). The cubic and higher terms stay below 0.1″
//! within ±5 centuries.

/// General precession p_A in arcseconds for `t` centuries since J2000.0.
///
/// The dominant linear term is ~5028.80″/century ≈ 1.3969°/century.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    5028.796195 * t + 1.1054348 * t * t
}

/// General precession p_A in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn one_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn past_is_negative() {
        assert!(general_precession_longitude_arcsec(-1.0) < 0.0);
    }

    #[test]
    fn degrees_consistent() {
        let t = 0.24;
        assert!(
            (general_precession_longitude_deg(t) * 3600.0
                - general_precession_longitude_arcsec(t))
            .abs()
                < 1e-9
        );
    }
}
