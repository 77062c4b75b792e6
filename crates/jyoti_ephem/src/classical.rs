//! Truncated classical series for the Sun and Moon.
//!
//! Sun: Meeus, _Astronomical Algorithms_ (2nd ed.), ch. 25 low-accuracy
//! method (~0.01°), apparent longitude.
//! Moon: the largest terms of Meeus ch. 47 (ELP-2000/82), ~0.01° in
//! longitude and latitude.
//!
//! Both take `t`, Julian centuries of TT since J2000.0, and return
//! tropical degrees referred to the equinox of date.

use jyoti_math::normalize_360;

/// Apparent geocentric longitude of the Sun in degrees, [0, 360).
pub fn sun_longitude_deg(t: f64) -> f64 {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_360(l0 + c - 0.00569 - 0.00478 * omega.sin())
}

/// Fundamental arguments of the lunar theory, in degrees.
struct LunarArguments {
    /// Moon's mean longitude L′.
    l_prime: f64,
    /// Mean elongation D.
    d: f64,
    /// Sun's mean anomaly M.
    m: f64,
    /// Moon's mean anomaly M′.
    m_prime: f64,
    /// Argument of latitude F.
    f: f64,
    /// Eccentricity factor E for terms involving M.
    e: f64,
    a1: f64,
    a2: f64,
    a3: f64,
}

impl LunarArguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        Self {
            l_prime: 218.3164477 + 481_267.881_234_21 * t - 0.0015786 * t2,
            d: 297.8501921 + 445_267.111_403_4 * t - 0.0018819 * t2,
            m: 357.5291092 + 35_999.050_290_9 * t - 0.0001536 * t2,
            m_prime: 134.9633964 + 477_198.867_505_5 * t + 0.0087414 * t2,
            f: 93.2720950 + 483_202.017_523_3 * t - 0.0036539 * t2,
            e: 1.0 - 0.002516 * t - 0.0000074 * t2,
            a1: 119.75 + 131.849 * t,
            a2: 53.09 + 479_264.290 * t,
            a3: 313.45 + 481_266.484 * t,
        }
    }

    /// Σ coeff · E^|m| · sin(d·D + m·M + m′·M′ + f·F) over a term table.
    fn sum(&self, terms: &[(i8, i8, i8, i8, f64)]) -> f64 {
        terms
            .iter()
            .map(|&(d, m, mp, f, coeff)| {
                let arg = f64::from(d) * self.d
                    + f64::from(m) * self.m
                    + f64::from(mp) * self.m_prime
                    + f64::from(f) * self.f;
                coeff * self.e.powi(i32::from(m.abs())) * arg.to_radians().sin()
            })
            .sum()
    }
}

/// Longitude terms (D, M, M′, F, coefficient in 1e-6 degree).
#[rustfmt::skip]
const LONGITUDE_TERMS: [(i8, i8, i8, i8, f64); 25] = [
    (0,  0,  1,  0,  6_288_774.0),
    (2,  0, -1,  0,  1_274_027.0),
    (2,  0,  0,  0,    658_314.0),
    (0,  0,  2,  0,    213_618.0),
    (0,  1,  0,  0,   -185_116.0),
    (0,  0,  0,  2,   -114_332.0),
    (2,  0, -2,  0,     58_793.0),
    (2, -1, -1,  0,     57_066.0),
    (2,  0,  1,  0,     53_322.0),
    (2, -1,  0,  0,     45_758.0),
    (0,  1, -1,  0,    -40_923.0),
    (1,  0,  0,  0,    -34_720.0),
    (0,  1,  1,  0,    -30_383.0),
    (2,  0,  0, -2,     15_327.0),
    (0,  0,  1,  2,    -12_528.0),
    (0,  0,  1, -2,     10_980.0),
    (4,  0, -1,  0,     10_675.0),
    (0,  0,  3,  0,     10_034.0),
    (4,  0, -2,  0,      8_548.0),
    (2,  1, -1,  0,     -7_888.0),
    (2,  1,  0,  0,     -6_766.0),
    (1,  0, -1,  0,     -5_163.0),
    (1,  1,  0,  0,      4_987.0),
    (2, -1,  1,  0,      4_036.0),
    (2,  0,  2,  0,      3_994.0),
];

/// Latitude terms (D, M, M′, F, coefficient in 1e-6 degree).
#[rustfmt::skip]
const LATITUDE_TERMS: [(i8, i8, i8, i8, f64); 10] = [
    (0,  0,  0,  1,  5_128_122.0),
    (0,  0,  1,  1,    280_602.0),
    (0,  0,  1, -1,    277_693.0),
    (2,  0,  0, -1,    173_237.0),
    (2,  0, -1,  1,     55_413.0),
    (2,  0, -1, -1,     46_271.0),
    (2,  0,  0,  1,     32_573.0),
    (0,  0,  2,  1,     17_198.0),
    (2,  0,  1, -1,      9_266.0),
    (0,  0,  2, -1,      8_822.0),
];

fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

/// Geocentric ecliptic longitude of the Moon in degrees, [0, 360).
pub fn moon_longitude_deg(t: f64) -> f64 {
    let a = LunarArguments::at(t);
    let sum = a.sum(&LONGITUDE_TERMS)
        + 3958.0 * sin_deg(a.a1)
        + 1962.0 * sin_deg(a.l_prime - a.f)
        + 318.0 * sin_deg(a.a2);
    normalize_360(a.l_prime + sum * 1e-6)
}

/// Geocentric ecliptic latitude of the Moon in degrees.
pub fn moon_latitude_deg(t: f64) -> f64 {
    let a = LunarArguments::at(t);
    let sum = a.sum(&LATITUDE_TERMS) - 2235.0 * sin_deg(a.l_prime)
        + 382.0 * sin_deg(a.a3)
        + 175.0 * sin_deg(a.a1 - a.f)
        + 175.0 * sin_deg(a.a1 + a.f)
        + 127.0 * sin_deg(a.l_prime - a.m_prime)
        - 115.0 * sin_deg(a.l_prime + a.m_prime);
    sum * 1e-6
}
