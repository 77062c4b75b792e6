//! Civil (wall-clock) date-time fields.
//!
//! A [`CivilDateTime`] is a human-facing projection of an instant in a
//! fixed UTC offset. It is rebuilt from an instant on demand and never used
//! as the source of truth for calculations.

use std::fmt::{Display, Formatter};

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, Timelike};

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar};

const MILLIS_PER_DAY: i64 = 86_400_000;
const MILLIS_PER_HOUR: i64 = 3_600_000;
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Accepted text layouts for [`CivilDateTime::parse`].
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Calendar fields in a fixed UTC offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Seconds with fraction, in [0, 60).
    pub second: f64,
    /// Offset of local time from UTC in hours (east positive).
    pub utc_offset_hours: f64,
}

fn is_leap_year(year: i32) -> bool {
    if year < 1583 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

impl CivilDateTime {
    /// Validated constructor.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        utc_offset_hours: f64,
    ) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidField {
                field: "month",
                value: month as f64,
            });
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidField {
                field: "day",
                value: day as f64,
            });
        }
        if hour > 23 {
            return Err(TimeError::InvalidField {
                field: "hour",
                value: hour as f64,
            });
        }
        if minute > 59 {
            return Err(TimeError::InvalidField {
                field: "minute",
                value: minute as f64,
            });
        }
        if !(0.0..60.0).contains(&second) {
            return Err(TimeError::InvalidField {
                field: "second",
                value: second,
            });
        }
        if !(-14.0..=14.0).contains(&utc_offset_hours) {
            return Err(TimeError::InvalidOffset(utc_offset_hours));
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            utc_offset_hours,
        })
    }

    /// Local midnight of a calendar date.
    pub fn date(year: i32, month: u32, day: u32, utc_offset_hours: f64) -> Result<Self, TimeError> {
        Self::new(year, month, day, 0, 0, 0.0, utc_offset_hours)
    }

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM` or `YYYY-MM-DDTHH:MM:SS[.f]`
    /// as local time in the given offset.
    pub fn parse(text: &str, utc_offset_hours: f64) -> Result<Self, TimeError> {
        let text = text.trim();
        for fmt in DATETIME_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
                return Self::from_naive(naive, utc_offset_hours);
            }
        }
        let date = NaiveDate::parse_from_str(text, "%Y-%m-%d")?;
        Self::date(date.year(), date.month(), date.day(), utc_offset_hours)
    }

    /// Build from a `chrono` naive date-time read as local time in the given offset.
    pub fn from_naive(naive: NaiveDateTime, utc_offset_hours: f64) -> Result<Self, TimeError> {
        let nanos = naive.nanosecond().min(999_999_999);
        Self::new(
            naive.year(),
            naive.month(),
            naive.day(),
            naive.hour(),
            naive.minute(),
            naive.second() as f64 + nanos as f64 * 1e-9,
            utc_offset_hours,
        )
    }

    /// Build from a `chrono` date-time, keeping its offset.
    pub fn from_datetime(dt: &DateTime<FixedOffset>) -> Result<Self, TimeError> {
        let offset_hours = dt.offset().local_minus_utc() as f64 / 3600.0;
        Self::from_naive(dt.naive_local(), offset_hours)
    }

    /// Local fields as a `chrono` naive date-time (microsecond resolution).
    pub fn to_naive(&self) -> Result<NaiveDateTime, TimeError> {
        let whole = self.second.floor();
        let micros = ((self.second - whole) * 1e6).round().min(999_999.0) as u32;
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_micro_opt(self.hour, self.minute, whole as u32, micros))
            .ok_or(TimeError::Unrepresentable)
    }

    /// As a `chrono` date-time with a fixed offset.
    ///
    /// Offsets are rounded to whole seconds.
    pub fn to_fixed_offset(&self) -> Result<DateTime<FixedOffset>, TimeError> {
        let offset_s = (self.utc_offset_hours * 3600.0).round() as i32;
        let offset = FixedOffset::east_opt(offset_s)
            .ok_or(TimeError::InvalidOffset(self.utc_offset_hours))?;
        self.to_naive()?
            .and_local_timezone(offset)
            .single()
            .ok_or(TimeError::Unrepresentable)
    }

    /// Julian Day (UT) of this local date-time.
    pub fn to_jd_ut(&self) -> f64 {
        let local_hours =
            self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0;
        let day_frac = self.day as f64 + (local_hours - self.utc_offset_hours) / 24.0;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Julian Day (UT) of local midnight starting this civil date.
    pub fn day_start_jd_ut(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64) - self.utc_offset_hours / 24.0
    }

    /// Local fields for a Julian Day (UT) seen from the given offset.
    ///
    /// Time of day is rounded to the nearest millisecond, carrying into the
    /// next day when needed. A Julian Day near 2.4 million only resolves
    /// about 40 µs, so finer fields would be noise.
    pub fn from_jd_ut(jd_ut: f64, utc_offset_hours: f64) -> Self {
        let local = jd_ut + utc_offset_hours / 24.0 + 0.5;
        let mut day_number = local.floor();
        let mut millis = ((local - day_number) * SECONDS_PER_DAY * 1e3).round() as i64;
        if millis >= MILLIS_PER_DAY {
            day_number += 1.0;
            millis -= MILLIS_PER_DAY;
        }
        let (year, month, day) = jd_to_calendar(day_number - 0.5);

        let hour = millis / MILLIS_PER_HOUR;
        let minute = (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
        let second = (millis % MILLIS_PER_MINUTE) as f64 / 1e3;
        Self {
            year,
            month,
            day: day.round() as u32,
            hour: hour as u32,
            minute: minute as u32,
            second,
            utc_offset_hours,
        }
    }

    /// Hours since local midnight.
    pub fn hours_of_day(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 + self.second / 3600.0
    }

    /// Same calendar date, ignoring time of day.
    pub fn same_date(&self, other: &Self) -> bool {
        (self.year, self.month, self.day) == (other.year, other.month, other.day)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let total_min = (self.utc_offset_hours.abs() * 60.0).round() as u32;
        let sign = if self.utc_offset_hours < 0.0 { '-' } else { '+' };
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second.floor() as u32,
            sign,
            total_min / 60,
            total_min % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seconds_apart(a: &CivilDateTime, b: &CivilDateTime) -> f64 {
        (a.to_jd_ut() - b.to_jd_ut()).abs() * SECONDS_PER_DAY
    }

    #[test]
    fn j2000_noon_utc() {
        let c = CivilDateTime::new(2000, 1, 1, 12, 0, 0.0, 0.0).unwrap();
        assert_eq!(c.to_jd_ut(), 2_451_545.0);
    }

    #[test]
    fn offset_shifts_jd() {
        let kathmandu = CivilDateTime::new(2024, 1, 1, 5, 45, 0.0, 5.75).unwrap();
        assert!((kathmandu.to_jd_ut() - 2_460_310.5).abs() < 1e-9);
    }

    #[test]
    fn roundtrip_1900_to_2100() {
        let mut year = 1900;
        let mut k: u32 = 0;
        while year <= 2100 {
            let month = 1 + k % 12;
            let day = 1 + (k * 7) % 28;
            let hour = (k * 5) % 24;
            let minute = (k * 13) % 60;
            let second = ((k * 17) % 60) as f64;
            let offset = [0.0, 5.75, -3.5, 9.0][(k % 4) as usize];
            let c = CivilDateTime::new(year, month, day, hour, minute, second, offset).unwrap();
            let back = CivilDateTime::from_jd_ut(c.to_jd_ut(), offset);
            assert!(seconds_apart(&c, &back) < 1e-3, "{c} -> {back}");
            assert_eq!((back.year, back.month, back.day), (year, month, day));
            assert_eq!((back.hour, back.minute), (hour, minute), "{c} -> {back}");
            year += 1;
            k += 1;
        }
    }

    #[test]
    fn near_midnight_carries() {
        let jd = CivilDateTime::new(2023, 12, 31, 23, 59, 59.999_999_9, 0.0)
            .unwrap()
            .to_jd_ut();
        let c = CivilDateTime::from_jd_ut(jd, 0.0);
        assert!(c.hour < 24);
        assert!(c.second < 60.0);
    }

    #[test]
    fn reform_boundary() {
        let before = CivilDateTime::date(1582, 10, 4, 0.0).unwrap();
        let after = CivilDateTime::from_jd_ut(before.to_jd_ut() + 1.0, 0.0);
        assert_eq!((after.year, after.month, after.day), (1582, 10, 15));
    }

    #[test]
    fn validation() {
        assert!(CivilDateTime::new(2024, 2, 30, 0, 0, 0.0, 0.0).is_err());
        assert!(CivilDateTime::new(2024, 2, 29, 0, 0, 0.0, 0.0).is_ok());
        assert!(CivilDateTime::new(1900, 2, 29, 0, 0, 0.0, 0.0).is_err());
        assert!(CivilDateTime::new(2024, 13, 1, 0, 0, 0.0, 0.0).is_err());
        assert!(CivilDateTime::new(2024, 1, 1, 24, 0, 0.0, 0.0).is_err());
        assert_eq!(
            CivilDateTime::new(2024, 1, 1, 0, 0, 0.0, 15.0),
            Err(TimeError::InvalidOffset(15.0))
        );
    }

    #[test]
    fn parse_formats() {
        let a = CivilDateTime::parse("2024-01-15", 5.75).unwrap();
        assert_eq!((a.year, a.month, a.day, a.hour), (2024, 1, 15, 0));
        let b = CivilDateTime::parse("2024-01-15T06:30", 5.75).unwrap();
        assert_eq!((b.hour, b.minute), (6, 30));
        let c = CivilDateTime::parse("2024-01-15 06:30:15.5", 0.0).unwrap();
        assert!((c.second - 15.5).abs() < 1e-9);
        assert!(matches!(
            CivilDateTime::parse("15/01/2024", 0.0),
            Err(TimeError::Parse(_))
        ));
    }

    #[test]
    fn chrono_roundtrip() {
        let c = CivilDateTime::new(2024, 3, 20, 8, 36, 12.25, 5.5).unwrap();
        let dt = c.to_fixed_offset().unwrap();
        assert_eq!(dt.offset().local_minus_utc(), 19_800);
        let back = CivilDateTime::from_datetime(&dt).unwrap();
        assert!(seconds_apart(&c, &back) < 1e-3);
    }

    #[test]
    fn chrono_agrees_on_utc_instant() {
        let c = CivilDateTime::new(2024, 1, 1, 5, 45, 0.0, 5.75).unwrap();
        let dt = c.to_fixed_offset().unwrap();
        let unix = dt.timestamp() as f64;
        let jd_from_unix = unix / SECONDS_PER_DAY + 2_440_587.5;
        assert!((jd_from_unix - c.to_jd_ut()).abs() < 1e-9);
    }

    #[test]
    fn display_format() {
        let c = CivilDateTime::new(2024, 1, 15, 6, 55, 44.4, 5.75).unwrap();
        assert_eq!(c.to_string(), "2024-01-15T06:55:44+05:45");
        let w = CivilDateTime::new(2024, 1, 15, 6, 5, 4.0, -3.5).unwrap();
        assert_eq!(w.to_string(), "2024-01-15T06:05:04-03:30");
    }
}
