//! Frame rotations: orbital plane → ecliptic, ecliptic → equatorial.

/// Rotate orbital-plane coordinates `(x, y)` into the ecliptic frame.
///
/// The orbital frame has +x toward perihelion. The rotation applies the
/// argument of perihelion `peri_deg`, the inclination `incl_deg` and the
/// longitude of the ascending node `node_deg`, in that order.
pub fn orbital_to_ecliptic(
    x: f64,
    y: f64,
    node_deg: f64,
    incl_deg: f64,
    peri_deg: f64,
) -> [f64; 3] {
    let (sn, cn) = node_deg.to_radians().sin_cos();
    let (si, ci) = incl_deg.to_radians().sin_cos();
    let (sw, cw) = peri_deg.to_radians().sin_cos();

    [
        (cw * cn - sw * sn * ci) * x + (-sw * cn - cw * sn * ci) * y,
        (cw * sn + sw * cn * ci) * x + (-sw * sn + cw * cn * ci) * y,
        (sw * si) * x + (cw * si) * y,
    ]
}

/// Ecliptic longitude/latitude to right ascension/declination, all in degrees.
///
/// Returns `(ra_deg, dec_deg)` with RA in [0, 360).
///
/// Source: Meeus, _Astronomical Algorithms_ (2nd ed.), eqs. 13.3–13.4.
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (sl, cl) = lon_deg.to_radians().sin_cos();
    let (sb, cb) = lat_deg.to_radians().sin_cos();
    let (se, ce) = obliquity_deg.to_radians().sin_cos();

    let ra = (sl * ce - (sb / cb) * se).atan2(cl);
    let dec = (sb * ce + cb * se * sl).asin();
    (jyoti_math::normalize_360(ra.to_degrees()), dec.to_degrees())
}
