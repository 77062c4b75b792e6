//! Sunrise-anchored daily panchang.
//!
//! The day's tithi, karana, nakshatra, pada and yoga are the sectors in
//! force at local sunrise. Comparing the tithi at this sunrise with the one
//! at the next sunrise reveals kshaya (skipped) and vriddhi (repeated)
//! tithis.

use jyoti_ephem::Ephemeris;
use jyoti_time::{CivilDateTime, Instant, Tt, Ut};
use jyoti_vedic_base::{
    GeoLocation, Nakshatra, Tithi, Yoga, karana_from_index, moonrise_moonset, sunrise_sunset,
    vaar_from_jd,
};

use crate::boundary::boundary_at;
use crate::element::ElementKind;
use crate::error::SearchError;
use crate::panchang_types::{PanchangConfig, PanchangElement, PanchangInfo, TithiTransition};
use crate::search_util::TransitConfig;

/// Panchang for the civil date of `date` at `location`.
///
/// Only the calendar fields of `date` are used. Fails with
/// [`SearchError::NoSunrise`] when the Sun stays below or above the horizon
/// all day.
pub fn daily_panchang(
    ephem: &Ephemeris,
    date: &CivilDateTime,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<PanchangInfo, SearchError> {
    location.validate()?;
    config.validate()?;
    let sunrise = sunrise_sunset(date, location, &config.riseset)
        .rise
        .instant()
        .ok_or(SearchError::NoSunrise)?;
    panchang_at_sunrise(ephem, sunrise, location, config)
}

/// Panchang anchored at a known sunrise instant.
///
/// The civil date is the sunrise's local date. Rise/set times for that date
/// and the following sunrise are computed here.
pub fn panchang_at_sunrise(
    ephem: &Ephemeris,
    sunrise: Instant<Ut>,
    location: &GeoLocation,
    config: &PanchangConfig,
) -> Result<PanchangInfo, SearchError> {
    location.validate()?;
    config.validate()?;

    let offset = location.utc_offset_hours;
    let date = location.civil(sunrise);
    let today = sunrise_sunset(&date, location, &config.riseset);
    let tomorrow = CivilDateTime::from_jd_ut(sunrise.jd() + 1.0, offset);
    let next_sunrise = sunrise_sunset(&tomorrow, location, &config.riseset)
        .rise
        .instant();
    let moon = moonrise_moonset(&date, location, &config.riseset, ephem);

    let anchor = sunrise.to_tt();
    let elements: Vec<PanchangElement> = ElementKind::all()
        .iter()
        .map(|&kind| element_at(ephem, kind, anchor, &config.transit))
        .collect();
    let index_of = |kind: ElementKind| {
        elements
            .iter()
            .find(|e| e.kind == kind)
            .map_or(0, |e| e.index)
    };

    let tithi_index = index_of(ElementKind::Tithi);
    let tithi = Tithi::from_index(tithi_index as u8);
    let tithi_transition = match next_sunrise {
        Some(next) => {
            let next_index = ElementKind::Tithi.index_at(ephem, next.to_tt());
            TithiTransition::from_indices(tithi_index, next_index)
        }
        None => TithiTransition::Normal,
    };
    if tithi_transition != TithiTransition::Normal {
        log::debug!("{date}: tithi transition {tithi_transition:?}");
    }

    let pada_index = index_of(ElementKind::Pada);
    Ok(PanchangInfo {
        date,
        location: *location,
        sunrise,
        next_sunrise,
        sunset: today.set,
        moonrise: moon.rise,
        moonset: moon.set,
        vaar: vaar_from_jd(sunrise.jd(), offset),
        paksha: tithi.paksha(),
        tithi,
        karana: karana_from_index(index_of(ElementKind::Karana) as u8),
        nakshatra: Nakshatra::from_index(index_of(ElementKind::Nakshatra) as u8),
        pada: (pada_index % 4 + 1) as u8,
        yoga: Yoga::from_index(index_of(ElementKind::Yoga) as u8),
        elements,
        tithi_transition,
    })
}

fn element_at(
    ephem: &Ephemeris,
    kind: ElementKind,
    anchor: Instant<Tt>,
    config: &TransitConfig,
) -> PanchangElement {
    let boundary = boundary_at(ephem, kind, anchor, config);
    PanchangElement {
        kind,
        index: boundary.index,
        name: boundary.label(),
        boundary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyoti_vedic_base::Vaar;

    fn jan15() -> CivilDateTime {
        CivilDateTime::date(2024, 1, 15, 5.75).unwrap()
    }

    #[test]
    fn kathmandu_day() {
        let eph = Ephemeris::default();
        let p = daily_panchang(&eph, &jan15(), &GeoLocation::KATHMANDU, &PanchangConfig::default())
            .unwrap();
        assert!(p.date.same_date(&jan15()));
        assert_eq!(p.vaar, Vaar::Somavara);
        assert_eq!(p.elements.len(), 5);
        assert_eq!(p.tithi.index(), 3);
        assert_eq!(p.nakshatra.index(), 23);
        assert_eq!(p.yoga.index(), 16);
        assert!((1..=4).contains(&p.pada));
        let sunrise_h = p.date.hours_of_day();
        assert!(sunrise_h > 6.5 && sunrise_h < 7.25, "{sunrise_h}");
    }

    #[test]
    fn elements_bracket_sunrise() {
        let eph = Ephemeris::default();
        let p = daily_panchang(&eph, &jan15(), &GeoLocation::KATHMANDU, &PanchangConfig::default())
            .unwrap();
        let anchor = p.sunrise.to_tt();
        for e in &p.elements {
            assert!(e.boundary.contains(anchor), "{}", e.name);
            assert_eq!(e.name, e.kind.label(e.index));
        }
        assert_eq!(
            p.element(ElementKind::Karana).map(|e| e.index / 2),
            Some(p.tithi.index() as u32)
        );
    }

    #[test]
    fn next_sunrise_about_a_day_later() {
        let eph = Ephemeris::default();
        let p = daily_panchang(&eph, &jan15(), &GeoLocation::KATHMANDU, &PanchangConfig::default())
            .unwrap();
        let gap = p.next_sunrise.unwrap() - p.sunrise;
        assert!((gap - 1.0).abs() < 0.01);
    }

    #[test]
    fn polar_night_has_no_sunrise() {
        let eph = Ephemeris::default();
        let loc = GeoLocation::new(78.0, 15.0, 1.0);
        let date = CivilDateTime::date(2024, 1, 1, 1.0).unwrap();
        let r = daily_panchang(&eph, &date, &loc, &PanchangConfig::default());
        assert!(matches!(r, Err(SearchError::NoSunrise)));
    }

    #[test]
    fn invalid_location_rejected() {
        let eph = Ephemeris::default();
        let loc = GeoLocation::new(95.0, 0.0, 0.0);
        let r = daily_panchang(&eph, &jan15(), &loc, &PanchangConfig::default());
        assert!(matches!(r, Err(SearchError::Vedic(_))));
    }
}
