//! Golden-value tests for sunrise/sunset and moonrise/moonset.
//!
//! Reference times are rounded to the minute. The single-pass solar model
//! and the analytic Moon are expected to agree with them to a few minutes.

use jyoti_ephem::{Ephemeris, EphemerisConfig, LuminaryTheory};
use jyoti_time::CivilDateTime;
use jyoti_vedic_base::{
    GeoLocation, RiseSetConfig, RiseSetResult, moonrise_moonset, sunrise_sunset,
};

fn kathmandu_date(day: u32) -> CivilDateTime {
    CivilDateTime::date(2024, 1, day, 5.75).unwrap()
}

fn local_hours(r: &RiseSetResult, loc: &GeoLocation) -> f64 {
    r.civil(loc).expect("event").hours_of_day()
}

#[test]
fn kathmandu_mid_winter_sunrise_and_sunset() {
    let loc = GeoLocation::new(27.7, 85.3, 5.75);
    let pair = sunrise_sunset(&kathmandu_date(15), &loc, &RiseSetConfig::default());
    let rise = local_hours(&pair.rise, &loc);
    let set = local_hours(&pair.set, &loc);
    assert!((6.5..=7.25).contains(&rise), "sunrise {rise} h");
    assert!((17.0..=18.0).contains(&set), "sunset {set} h");
}

#[test]
fn kathmandu_solstices() {
    let loc = GeoLocation::KATHMANDU;
    let c = RiseSetConfig::default();
    let winter = sunrise_sunset(&CivilDateTime::date(2024, 12, 21, 5.75).unwrap(), &loc, &c);
    let summer = sunrise_sunset(&CivilDateTime::date(2024, 6, 21, 5.75).unwrap(), &loc, &c);
    let winter_len = (winter.set.instant().unwrap() - winter.rise.instant().unwrap()) * 24.0;
    let summer_len = (summer.set.instant().unwrap() - summer.rise.instant().unwrap()) * 24.0;
    // 10 h 23 m and 13 h 54 m
    assert!((winter_len - 10.38).abs() < 0.1, "winter day {winter_len} h");
    assert!((summer_len - 13.9).abs() < 0.1, "summer day {summer_len} h");
}

#[test]
fn southern_hemisphere_summer() {
    // Sydney, 2024-01-15: rise 05:59, set 20:09 (AEDT, UTC+11)
    let loc = GeoLocation::new(-33.87, 151.21, 11.0);
    let date = CivilDateTime::date(2024, 1, 15, 11.0).unwrap();
    let pair = sunrise_sunset(&date, &loc, &RiseSetConfig::default());
    let rise = local_hours(&pair.rise, &loc);
    let set = local_hours(&pair.set, &loc);
    assert!((rise - 5.98).abs() < 0.1, "sunrise {rise}");
    assert!((set - 20.15).abs() < 0.1, "sunset {set}");
}

#[test]
fn moon_delay_over_a_week() {
    // The Moon rises later each day; across the 1st..3rd of January 2024
    // the delay is about 53 minutes per day.
    let eph = Ephemeris::default();
    let loc = GeoLocation::KATHMANDU;
    let c = RiseSetConfig::default();
    let rises: Vec<f64> = (1..=3)
        .map(|d| local_hours(&moonrise_moonset(&kathmandu_date(d), &loc, &c, &eph).rise, &loc))
        .collect();
    for w in rises.windows(2) {
        let delay = (w[1] - w[0]) * 60.0;
        assert!((35.0..75.0).contains(&delay), "delay {delay} min");
    }
}

#[test]
fn each_lunar_month_has_one_missing_moonrise() {
    let eph = Ephemeris::default();
    let loc = GeoLocation::KATHMANDU;
    let c = RiseSetConfig::default();
    let missing: Vec<u32> = (1..=31)
        .filter(|&d| {
            moonrise_moonset(&kathmandu_date(d), &loc, &c, &eph).rise == RiseSetResult::NoEventOnDay
        })
        .collect();
    assert!(missing.contains(&4), "missing moonrise days: {missing:?}");
    assert!((1..=2).contains(&missing.len()), "missing moonrise days: {missing:?}");
}

#[test]
fn luminary_theory_changes_moonrise_by_minutes_only() {
    let loc = GeoLocation::KATHMANDU;
    let c = RiseSetConfig::default();
    let ss = Ephemeris::default();
    let classical = Ephemeris::new(EphemerisConfig {
        luminaries: LuminaryTheory::Classical,
        ..Default::default()
    })
    .unwrap();
    let d = kathmandu_date(10);
    let a = local_hours(&moonrise_moonset(&d, &loc, &c, &ss).rise, &loc);
    let b = local_hours(&moonrise_moonset(&d, &loc, &c, &classical).rise, &loc);
    assert!((a - b).abs() < 1.0, "surya siddhanta {a} vs classical {b}");
}
