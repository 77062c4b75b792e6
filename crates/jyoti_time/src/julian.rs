//! Julian Day ↔ calendar conversion.
//!
//! Source: Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 7. Dates on or
//! after 1582-10-15 use the Gregorian calendar, earlier dates the Julian
//! calendar, so the count is continuous across the reform.

/// Julian Day of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// First Julian Day number of the Gregorian calendar (1582-10-15).
const GREGORIAN_START_JDN: f64 = 2_299_161.0;

fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    (year, month, day.floor() as i64) >= (1582, 10, 15)
}

/// Calendar date to Julian Day.
///
/// `day` may carry a fractional part for the time of day, so
/// `calendar_to_jd(2000, 1, 1.5) == 2451545.0`.
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let gregorian = is_gregorian(year, month, day);
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let b = if gregorian {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Julian Day to calendar date `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < GREGORIAN_START_JDN {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Decimal year on the 365.25-day scale, anchored at J2000.0.
pub fn jd_to_decimal_year(jd: f64) -> f64 {
    2000.0 + 100.0 * jd_to_centuries(jd)
}

/// Day of week for a Julian Day: 0 = Sunday ... 6 = Saturday.
///
/// Uses the civil date containing `jd` (days begin at midnight).
pub fn weekday(jd: f64) -> u32 {
    ((jd + 1.5).floor() as i64).rem_euclid(7) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(calendar_to_jd(2000, 1, 1.5), J2000_JD);
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 October 4.81 (Sputnik launch)
        assert!((calendar_to_jd(1957, 10, 4.81) - 2_436_116.31).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7b_julian_calendar() {
        // 333 January 27.5, Julian calendar
        assert!((calendar_to_jd(333, 1, 27.5) - 1_842_713.0).abs() < 1e-9);
    }

    #[test]
    fn reform_is_contiguous() {
        let last_julian = calendar_to_jd(1582, 10, 4.0);
        let first_gregorian = calendar_to_jd(1582, 10, 15.0);
        assert_eq!(first_gregorian - last_julian, 1.0);
    }

    #[test]
    fn inverse_meeus_example_7c() {
        let (y, m, d) = jd_to_calendar(2_436_116.31);
        assert_eq!((y, m), (1957, 10));
        assert!((d - 4.81).abs() < 1e-6);
    }

    #[test]
    fn inverse_before_reform() {
        let (y, m, d) = jd_to_calendar(1_842_713.0);
        assert_eq!((y, m), (333, 1));
        assert!((d - 27.5).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_century_of_first_days() {
        for year in 1900..=2100 {
            for month in [1_u32, 2, 3, 6, 12] {
                let jd = calendar_to_jd(year, month, 1.0);
                let (y, m, d) = jd_to_calendar(jd);
                assert_eq!((y, m), (year, month));
                assert!((d - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn weekday_known_dates() {
        // 2000-01-01 was a Saturday, 2024-01-01 a Monday
        assert_eq!(weekday(calendar_to_jd(2000, 1, 1.0)), 6);
        assert_eq!(weekday(calendar_to_jd(2024, 1, 1.75)), 1);
    }

    #[test]
    fn centuries_and_years() {
        assert_eq!(jd_to_centuries(J2000_JD), 0.0);
        assert!((jd_to_decimal_year(J2000_JD + DAYS_PER_CENTURY) - 2100.0).abs() < 1e-12);
    }
}
