//! Sunrise/sunset and moonrise/moonset.
//!
//! The Sun uses a single-pass hour-angle solution around the solar
//! transit: mean anomaly, equation of centre, ecliptic longitude,
//! declination at a fixed obliquity, then the hour angle at the configured
//! altitude. Over half a day the Sun moves little enough for that to hold
//! to civil precision.
//!
//! The Moon moves ~13°/day, so it is sampled at the day and its two
//! neighbours, interpolated quadratically and refined on the hour angle
//! (Meeus, _Astronomical Algorithms_, ch. 15). Because a lunar event found
//! from one UT day can land on the adjacent civil day, the search runs
//! from yesterday, today and tomorrow and keeps whatever falls inside the
//! local day.

use jyoti_ephem::{Body, Ephemeris};
use jyoti_frames::{ecliptic_to_equatorial, mean_obliquity_deg};
use jyoti_math::{Quadratic3, normalize_360, normalize_pm180, unwrap_near};
use jyoti_time::{CivilDateTime, Instant, J2000_JD, Tt, Ut, calendar_to_jd, delta_t_hours, gmst_deg};

use crate::riseset_types::{GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetPair, RiseSetResult};

/// Fixed obliquity for the single-pass solar declination, degrees.
const SUN_OBLIQUITY_DEG: f64 = 23.44;

/// Longitude of the Earth's perihelion used by the solar transit, degrees.
const PERIHELION_DEG: f64 = 102.9372;

/// GMST advance per solar day, degrees.
const SIDEREAL_DEG_PER_DAY: f64 = 360.985_647;

/// Solar quantities at the local transit.
#[derive(Debug, Clone, Copy)]
struct SolarDay {
    transit_jd: f64,
    declination_deg: f64,
}

/// The solar day whose transit falls nearest `noon_jd_ut`.
fn solar_day(noon_jd_ut: f64, longitude_deg: f64) -> SolarDay {
    let n = (noon_jd_ut - J2000_JD + longitude_deg / 360.0).round();
    let j_star = n - longitude_deg / 360.0;
    let m = normalize_360(357.5291 + 0.985_600_28 * j_star);
    let m_rad = m.to_radians();
    let center = 1.9148 * m_rad.sin() + 0.02 * (2.0 * m_rad).sin() + 0.0003 * (3.0 * m_rad).sin();
    let lambda = normalize_360(m + center + 180.0 + PERIHELION_DEG);
    let lambda_rad = lambda.to_radians();
    let transit_jd = J2000_JD + j_star + 0.0053 * m_rad.sin() - 0.0069 * (2.0 * lambda_rad).sin();
    let sin_dec = lambda_rad.sin() * SUN_OBLIQUITY_DEG.to_radians().sin();
    SolarDay {
        transit_jd,
        declination_deg: sin_dec.asin().to_degrees(),
    }
}

/// Cosine of the hour angle at which a body of declination `dec_deg`
/// reaches `altitude_deg`. Outside [-1, 1] the crossing does not exist.
fn cos_hour_angle(altitude_deg: f64, latitude_deg: f64, dec_deg: f64) -> f64 {
    let (sp, cp) = latitude_deg.to_radians().sin_cos();
    let (sd, cd) = dec_deg.to_radians().sin_cos();
    (altitude_deg.to_radians().sin() - sp * sd) / (cp * cd)
}

/// Julian Day (UT) of the Sun's upper transit on the UT date starting at
/// `jd_0h_ut`, for an east-positive longitude.
pub fn sun_transit_jd(jd_0h_ut: f64, longitude_deg: f64) -> f64 {
    solar_day(jd_0h_ut + 0.5 - longitude_deg / 360.0, longitude_deg).transit_jd
}

/// Julian Day (UT) of 0h UT on the calendar date of `date`.
fn date_0h_jd(date: &CivilDateTime) -> f64 {
    calendar_to_jd(date.year, date.month, date.day as f64)
}

/// Sunrise and sunset for the civil date of `date` at `location`.
///
/// Only the calendar fields of `date` are used. Polar day and night come
/// back as [`RiseSetResult::NeverSets`] / [`RiseSetResult::NeverRises`]
/// for both halves of the pair.
pub fn sunrise_sunset(
    date: &CivilDateTime,
    location: &GeoLocation,
    config: &RiseSetConfig,
) -> RiseSetPair {
    let local_noon = date_0h_jd(date) + 0.5 - location.utc_offset_hours / 24.0;
    let day = solar_day(local_noon, location.longitude_deg);
    let cos_w = cos_hour_angle(config.sun_altitude_deg, location.latitude_deg, day.declination_deg);
    if cos_w > 1.0 {
        return RiseSetPair {
            rise: RiseSetResult::NeverRises,
            set: RiseSetResult::NeverRises,
        };
    }
    if cos_w < -1.0 {
        return RiseSetPair {
            rise: RiseSetResult::NeverSets,
            set: RiseSetResult::NeverSets,
        };
    }
    let half_arc = cos_w.acos().to_degrees() / 360.0;
    RiseSetPair {
        rise: RiseSetResult::Event {
            instant: Instant::from_jd(day.transit_jd - half_arc),
            event: RiseSetEvent::Sunrise,
        },
        set: RiseSetResult::Event {
            instant: Instant::from_jd(day.transit_jd + half_arc),
            event: RiseSetEvent::Sunset,
        },
    }
}

/// Apparent-enough geocentric RA/Dec of the Moon, degrees.
fn moon_ra_dec(ephem: &Ephemeris, t: Instant<Tt>) -> (f64, f64) {
    let lon = ephem.tropical_longitude(Body::Moon, t);
    let lat = ephem.moon_latitude(t);
    let obliquity = mean_obliquity_deg(t.centuries_since_j2000());
    ecliptic_to_equatorial(lon, lat, obliquity)
}

/// Outcome of one UT-day window of the lunar search.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Window {
    Event(f64),
    Below,
    Above,
}

/// Lunar rise or set computed from the UT day starting at `jd_0h_ut`.
fn moon_event_from(
    ephem: &Ephemeris,
    jd_0h_ut: f64,
    location: &GeoLocation,
    config: &RiseSetConfig,
    rising: bool,
) -> Window {
    let dt_days = delta_t_hours(jd_0h_ut) / 24.0;
    let samples: [(f64, f64); 3] =
        [-1.0, 0.0, 1.0].map(|k| moon_ra_dec(ephem, Instant::from_jd(jd_0h_ut + k + dt_days)));

    let ra1 = samples[0].0;
    let ra2 = unwrap_near(samples[1].0, ra1);
    let ra3 = unwrap_near(samples[2].0, ra2);
    let ra = Quadratic3::new(ra1, ra2, ra3);
    let dec = Quadratic3::new(samples[0].1, samples[1].1, samples[2].1);

    let h0 = config.moon_altitude_deg;
    let lat = location.latitude_deg;
    let lon = location.longitude_deg;

    let cos_h0 = cos_hour_angle(h0, lat, samples[1].1);
    if cos_h0 > 1.0 {
        return Window::Below;
    }
    if cos_h0 < -1.0 {
        return Window::Above;
    }

    let theta0 = gmst_deg(jd_0h_ut);
    let transit = (ra2 - lon - theta0) / 360.0;
    let half_arc = cos_h0.acos().to_degrees() / 360.0;
    let mut m = if rising {
        transit - half_arc
    } else {
        transit + half_arc
    };
    m = m.rem_euclid(1.0);

    for pass in 0..config.moon_refinements {
        let theta = theta0 + SIDEREAL_DEG_PER_DAY * m;
        let n = m + dt_days;
        let alpha = ra.at(n);
        let delta = dec.at(n);
        let hour_angle = normalize_pm180(theta + lon - alpha);
        let cos_h = cos_hour_angle(h0, lat, delta).clamp(-1.0, 1.0);
        let target = if rising {
            -cos_h.acos().to_degrees()
        } else {
            cos_h.acos().to_degrees()
        };
        let dm = normalize_pm180(target - hour_angle) / (360.0 * config.sidereal_rate);
        log::trace!(
            "moon {} pass {pass}: m={m:.6} dm={dm:.3e}",
            if rising { "rise" } else { "set" }
        );
        m += dm;
    }
    Window::Event(jd_0h_ut + m)
}

/// One lunar event for the civil day `[day_start, day_start + 1)` (UT JD).
fn moon_event_on_day(
    ephem: &Ephemeris,
    jd_0h_ut: f64,
    day_start: f64,
    location: &GeoLocation,
    config: &RiseSetConfig,
    event: RiseSetEvent,
) -> RiseSetResult {
    let rising = event.is_rising();
    let windows = [-1.0, 0.0, 1.0]
        .map(|k| moon_event_from(ephem, jd_0h_ut + k, location, config, rising));

    let mut best: Option<f64> = None;
    for w in windows {
        if let Window::Event(jd) = w {
            if jd < day_start || jd >= day_start + 1.0 {
                continue;
            }
            // neighbouring windows can converge on the same event
            best = Some(best.map_or(jd, |b| b.min(jd)));
        }
    }

    match best {
        Some(jd) => {
            log::debug!("{}: JD {jd:.6} UT", event.name());
            RiseSetResult::Event {
                instant: Instant::<Ut>::from_jd(jd),
                event,
            }
        }
        None if windows.iter().all(|w| *w == Window::Below) => RiseSetResult::NeverRises,
        None if windows.iter().all(|w| *w == Window::Above) => RiseSetResult::NeverSets,
        None => {
            log::debug!("{}: none within the civil day", event.name());
            RiseSetResult::NoEventOnDay
        }
    }
}

/// Moonrise and moonset for the civil date of `date` at `location`.
///
/// Only the calendar fields of `date` are used; the civil day runs from
/// local midnight to local midnight at the location's UTC offset. Either
/// half may be [`RiseSetResult::NoEventOnDay`] when the Moon's ~50 minute
/// daily delay pushes the event past midnight.
pub fn moonrise_moonset(
    date: &CivilDateTime,
    location: &GeoLocation,
    config: &RiseSetConfig,
    ephem: &Ephemeris,
) -> RiseSetPair {
    let jd_0h = date_0h_jd(date);
    let day_start = jd_0h - location.utc_offset_hours / 24.0;
    RiseSetPair {
        rise: moon_event_on_day(ephem, jd_0h, day_start, location, config, RiseSetEvent::Moonrise),
        set: moon_event_on_day(ephem, jd_0h, day_start, location, config, RiseSetEvent::Moonset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CivilDateTime {
        CivilDateTime::date(y, m, d, 5.75).unwrap()
    }

    fn local_hours(r: &RiseSetResult) -> f64 {
        r.civil(&GeoLocation::KATHMANDU).unwrap().hours_of_day()
    }

    #[test]
    fn transit_near_local_noon() {
        // Kathmandu mean noon is 12:00 − 85.3°/15 = 06:18.8 UT; the
        // equation of time adds ~9 minutes in mid January.
        let jt = sun_transit_jd(2_460_324.5, 85.3);
        let ut_hours = (jt - 2_460_324.5) * 24.0;
        assert!((ut_hours - 6.47).abs() < 0.05, "transit {ut_hours} h UT");
    }

    #[test]
    fn kathmandu_winter_sun() {
        let pair = sunrise_sunset(
            &date(2024, 1, 15),
            &GeoLocation::KATHMANDU,
            &RiseSetConfig::default(),
        );
        let rise = local_hours(&pair.rise);
        let set = local_hours(&pair.set);
        assert!((rise - (6.0 + 55.7 / 60.0)).abs() < 0.02, "rise {rise}");
        assert!((set - (17.0 + 29.6 / 60.0)).abs() < 0.02, "set {set}");
    }

    #[test]
    fn date_line_zone_keeps_the_civil_date() {
        // Kiritimati: UTC+14 at 157.4°W, a full day ahead of its solar time
        let loc = GeoLocation::new(1.87, -157.4, 14.0);
        let d = CivilDateTime::date(2024, 1, 15, 14.0).unwrap();
        let pair = sunrise_sunset(&d, &loc, &RiseSetConfig::default());
        let rise = pair.rise.civil(&loc).unwrap();
        let set = pair.set.civil(&loc).unwrap();
        assert!(rise.same_date(&d) && set.same_date(&d), "{rise} / {set}");
        assert!((6.0..7.5).contains(&rise.hours_of_day()), "{rise}");
        assert!((18.0..19.5).contains(&set.hours_of_day()), "{set}");
    }

    #[test]
    fn equator_equinox_day_is_about_twelve_hours() {
        let loc = GeoLocation::new(0.0, 0.0, 0.0);
        let d = CivilDateTime::date(2024, 3, 20, 0.0).unwrap();
        let pair = sunrise_sunset(&d, &loc, &RiseSetConfig::default());
        let length = (pair.set.instant().unwrap() - pair.rise.instant().unwrap()) * 24.0;
        assert!((length - 12.1).abs() < 0.1, "day length {length} h");
    }

    #[test]
    fn polar_night_and_midnight_sun() {
        let tromso_north = GeoLocation::new(78.0, 15.0, 1.0);
        let winter = CivilDateTime::date(2024, 12, 21, 1.0).unwrap();
        let summer = CivilDateTime::date(2024, 6, 21, 1.0).unwrap();
        let c = RiseSetConfig::default();
        assert_eq!(sunrise_sunset(&winter, &tromso_north, &c).rise, RiseSetResult::NeverRises);
        assert_eq!(sunrise_sunset(&summer, &tromso_north, &c).set, RiseSetResult::NeverSets);
    }

    #[test]
    fn hour_angle_cosine_equator() {
        let c = cos_hour_angle(-0.833, 0.0, 0.0);
        assert!((c - (-0.833_f64).to_radians().sin()).abs() < 1e-15);
    }

    #[test]
    fn moonrise_new_year_2024() {
        let eph = Ephemeris::default();
        let pair = moonrise_moonset(
            &date(2024, 1, 1),
            &GeoLocation::KATHMANDU,
            &RiseSetConfig::default(),
            &eph,
        );
        let rise = local_hours(&pair.rise);
        let set = local_hours(&pair.set);
        assert!((rise - 22.0).abs() < 0.2, "moonrise {rise}");
        assert!((set - 10.44).abs() < 0.2, "moonset {set}");
    }

    #[test]
    fn moonrise_skips_a_day() {
        // Rises at 23:46 on the 3rd and 00:39 on the 5th
        let eph = Ephemeris::default();
        let pair = moonrise_moonset(
            &date(2024, 1, 4),
            &GeoLocation::KATHMANDU,
            &RiseSetConfig::default(),
            &eph,
        );
        assert_eq!(pair.rise, RiseSetResult::NoEventOnDay);
        assert!(pair.set.is_event());
    }

    #[test]
    fn lunar_events_stay_inside_the_civil_day() {
        let eph = Ephemeris::default();
        let c = RiseSetConfig::default();
        for d in 1..=28 {
            let day = date(2024, 2, d);
            let pair = moonrise_moonset(&day, &GeoLocation::KATHMANDU, &c, &eph);
            for r in [pair.rise, pair.set] {
                if let Some(civil) = r.civil(&GeoLocation::KATHMANDU) {
                    assert!(civil.same_date(&day), "{civil} not on {d}");
                }
            }
        }
    }
}
