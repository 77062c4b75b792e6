//! ΔT = TT − UT estimation.
//!
//! Piecewise polynomial fits from Espenak & Meeus (2006, revised 2014),
//! <https://www.eclipsewise.com/help/deltatpoly2014.html>. Outside the
//! fitted span (before −500 or after 3000) the long-term parabola
//! `−20 + 32·u²` is used, so every finite instant has a value.
//!
//! Each segment is a polynomial in years from its own origin (2000 for
//! 1986–2005, 2005 and 2015 after that), not one polynomial in centuries
//! since J2000. Adjacent segments meet to within 0.05 s from 1900 on.

use jyoti_math::polynomial;

use crate::julian::{SECONDS_PER_DAY, jd_to_decimal_year};

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds_for_year(year: f64) -> f64 {
    if year < -500.0 || year > 3000.0 {
        let u = (year - 1820.0) / 100.0;
        return polynomial(u, &[-20.0, 0.0, 32.0]);
    }
    if year < 500.0 {
        let u = year / 100.0;
        return polynomial(
            u,
            &[
                10583.6,
                -1014.41,
                33.78311,
                -5.952053,
                -0.1798452,
                0.022174192,
                0.0090316521,
            ],
        );
    }
    if year < 1600.0 {
        let u = (year - 1000.0) / 100.0;
        return polynomial(
            u,
            &[
                1574.2,
                -556.01,
                71.23472,
                0.319781,
                -0.8503463,
                -0.005050998,
                0.0083572073,
            ],
        );
    }

    let (origin, coeffs): (f64, &[f64]) = if year < 1700.0 {
        (1600.0, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
    } else if year < 1800.0 {
        (
            1700.0,
            &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1_174_000.0],
        )
    } else if year < 1860.0 {
        (
            1800.0,
            &[
                13.72,
                -0.332447,
                0.0068612,
                0.0041116,
                -0.00037436,
                0.0000121272,
                -0.0000001699,
                0.000000000875,
            ],
        )
    } else if year < 1900.0 {
        (
            1860.0,
            &[
                7.62,
                0.5737,
                -0.251754,
                0.01680668,
                -0.0004473624,
                1.0 / 233_174.0,
            ],
        )
    } else if year < 1920.0 {
        (1900.0, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197])
    } else if year < 1941.0 {
        (1920.0, &[21.20, 0.84493, -0.076100, 0.0020936])
    } else if year < 1961.0 {
        (1950.0, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
    } else if year < 1986.0 {
        (1975.0, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
    } else if year < 2005.0 {
        (
            2000.0,
            &[
                63.86,
                0.3345,
                -0.060374,
                0.0017275,
                0.000651814,
                0.00002373599,
            ],
        )
    } else if year < 2015.0 {
        (2005.0, &[64.69, 0.2930])
    } else {
        (2015.0, &[67.62, 0.3645, 0.0039755])
    };
    polynomial(year - origin, coeffs)
}

/// ΔT in seconds at a Julian Day.
pub fn delta_t_seconds(jd: f64) -> f64 {
    delta_t_seconds_for_year(jd_to_decimal_year(jd))
}

/// ΔT in hours at a Julian Day.
pub fn delta_t_hours(jd: f64) -> f64 {
    delta_t_seconds(jd) / 3600.0
}

/// ΔT in days at a Julian Day.
pub(crate) fn delta_t_days(jd: f64) -> f64 {
    delta_t_seconds(jd) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_2000() {
        let dt = delta_t_seconds_for_year(2000.0);
        assert!((dt - 63.86).abs() < 1e-9, "ΔT(2000) = {dt}");
    }

    #[test]
    fn year_2024_plausible() {
        let dt = delta_t_seconds_for_year(2024.0);
        assert!(dt > 69.0 && dt < 73.0, "ΔT(2024) = {dt}");
    }

    #[test]
    fn year_1900_near_zero() {
        let dt = delta_t_seconds_for_year(1900.0);
        assert!((dt + 2.79).abs() < 1e-9, "ΔT(1900) = {dt}");
    }

    #[test]
    fn continuous_at_2005() {
        let before = delta_t_seconds_for_year(2005.0 - 1e-9);
        let after = delta_t_seconds_for_year(2005.0);
        assert!((before - after).abs() < 0.1, "{before} vs {after}");
    }

    #[test]
    fn segments_meet_across_the_twentieth_century() {
        for edge in [1920.0, 1941.0, 1961.0, 1986.0, 2005.0, 2015.0] {
            let before = delta_t_seconds_for_year(edge - 1e-9);
            let after = delta_t_seconds_for_year(edge);
            assert!((before - after).abs() < 0.05, "{edge}: {before} vs {after}");
        }
    }

    #[test]
    fn outside_fitted_span_uses_parabola() {
        let dt = delta_t_seconds_for_year(3500.0);
        let u = (3500.0 - 1820.0) / 100.0;
        assert!((dt - (-20.0 + 32.0 * u * u)).abs() < 1e-9);
        assert!(delta_t_seconds_for_year(-1000.0).is_finite());
    }

    #[test]
    fn hours_and_seconds_agree() {
        let jd = 2_460_310.5;
        assert!((delta_t_hours(jd) * 3600.0 - delta_t_seconds(jd)).abs() < 1e-9);
        assert!((delta_t_days(jd) * SECONDS_PER_DAY - delta_t_seconds(jd)).abs() < 1e-9);
    }
}
