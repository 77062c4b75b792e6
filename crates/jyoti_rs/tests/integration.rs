//! Integration tests for jyoti_rs.

use jyoti_rs::*;

fn kathmandu_morning() -> CivilDateTime {
    CivilDateTime::new(2024, 1, 15, 7, 0, 0.0, 5.75).unwrap()
}

#[test]
fn init_is_one_shot() {
    let _ = init(EphemerisConfig::default());
    assert!(is_initialized());
    assert_eq!(
        init(EphemerisConfig::default()),
        Err(JyotiError::AlreadyInitialized)
    );
}

#[test]
fn sidereal_is_tropical_minus_ayanamsha() {
    let date = kathmandu_morning();
    for body in Body::all() {
        let tropical = body_longitude(*body, &date);
        let sidereal = sidereal_longitude(*body, &date);
        let diff = (tropical.longitude - sidereal.longitude).rem_euclid(360.0);
        assert!((diff - 24.19).abs() < 0.05, "{}: {diff}", body.name());
        assert_eq!(tropical.speed, sidereal.speed);
    }
}

#[test]
fn explicit_ayanamsha_is_passed_through() {
    let date = kathmandu_morning();
    let t = Instant::<Ut>::from_civil(&date).to_tt();
    let lahiri = sidereal_longitude_with(Body::Mars, &date, AyanamshaSystem::Lahiri);
    let raman = sidereal_longitude_with(Body::Mars, &date, AyanamshaSystem::Raman);
    let fixed = sidereal_longitude_with(Body::Mars, &date, AyanamshaSystem::FixedReference);
    let tropical = body_longitude(Body::Mars, &date);
    let offset = |p: EclipticPosition| (tropical.longitude - p.longitude).rem_euclid(360.0);
    assert!((offset(raman) - offset(lahiri) + 1.483).abs() < 1e-6);
    let expected = 24.144206 - 0.013972 * t.centuries_since_j2000();
    assert!((offset(fixed) - expected).abs() < 1e-5, "{}", offset(fixed));
    assert_eq!(raman.speed, tropical.speed);
}

#[test]
fn tithi_boundary_contains_date() {
    let date = kathmandu_morning();
    let b = find_element_boundary(ElementKind::Tithi, &date);
    let t = Instant::<Ut>::from_civil(&date).to_tt();
    assert!(b.contains(t));
    let civil = b.to_civil(5.75);
    assert!(civil.start.unwrap().to_jd_ut() < date.to_jd_ut());
    assert!(civil.end.unwrap().to_jd_ut() > date.to_jd_ut());
}

#[test]
fn next_purnima_within_a_month() {
    let date = kathmandu_morning();
    let ev = next_occurrence(ElementKind::Tithi, 14, &date).unwrap().unwrap();
    assert_eq!(ev.label(), "Purnima");
    let days = ev.start_instant().unwrap() - Instant::<Ut>::from_civil(&date).to_tt();
    assert!(days > 0.0 && days < 30.0);
}

#[test]
fn rise_set_and_panchang_agree() {
    let date = kathmandu_morning();
    let loc = GeoLocation::KATHMANDU;
    let sun = sunrise_sunset(&date, &loc).unwrap();
    let p = panchang(&date, &loc).unwrap();
    assert_eq!(sun.rise.instant(), Some(p.sunrise));
    assert_eq!(sun.set, p.sunset);
    let moon = moonrise_moonset(&date, &loc).unwrap();
    assert_eq!(moon.rise, p.moonrise);
    assert_eq!(p.vaar, Vaar::Somavara);
    assert_eq!(p.paksha, Paksha::Shukla);
}

#[test]
fn bad_location_is_rejected_everywhere() {
    let date = kathmandu_morning();
    let bad = GeoLocation::new(27.7, 200.0, 5.75);
    assert!(matches!(sunrise_sunset(&date, &bad), Err(JyotiError::Vedic(_))));
    assert!(matches!(moonrise_moonset(&date, &bad), Err(JyotiError::Vedic(_))));
    assert!(matches!(panchang(&date, &bad), Err(JyotiError::Vedic(_))));
    assert!(matches!(kundali(&date, &bad), Err(JyotiError::Vedic(_))));
}

#[test]
fn invalid_index_surfaces_as_search_error() {
    let r = next_occurrence(ElementKind::Nakshatra, 27, &kathmandu_morning());
    assert!(matches!(r, Err(JyotiError::Search(_))));
}

#[test]
fn kundali_has_nine_grahas() {
    let k = kundali(&kathmandu_morning(), &GeoLocation::KATHMANDU).unwrap();
    assert_eq!(k.grahas.len(), 9);
}
