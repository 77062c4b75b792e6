//! Keplerian planets from linear osculating elements.
//!
//! Each element is `value_at_J2000 + rate · d`, with `d` in days since
//! J2000.0. Positions are heliocentric in the ecliptic of date; geocentric
//! coordinates subtract the Earth's position computed from its own element
//! set.
//!
//! Element values: P. Schlyter, "How to compute planetary positions"
//! (Earth elements derived from the Sun's by a 180° shift).

use jyoti_frames::{cartesian_to_spherical, orbital_to_ecliptic};
use jyoti_math::normalize_360;

use crate::body::Body;

/// Fixed-point iterations for Kepler's equation. Every eccentricity in the
/// table is below 0.21, so seven rounds converge to ~1e-5 rad or better.
const KEPLER_ITERATIONS: usize = 7;

/// Linear osculating elements: `(value at J2000, rate per day)` pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Longitude of the ascending node N (degrees).
    pub node: (f64, f64),
    /// Inclination i (degrees).
    pub inclination: (f64, f64),
    /// Argument of perihelion ω (degrees).
    pub perihelion: (f64, f64),
    /// Semi-major axis a (AU).
    pub semi_major_axis: f64,
    /// Eccentricity e.
    pub eccentricity: (f64, f64),
    /// Mean anomaly M (degrees).
    pub mean_anomaly: (f64, f64),
}

impl OrbitalElements {
    pub const MERCURY: Self = Self {
        node: (48.3313, 3.24587e-5),
        inclination: (7.0047, 5.00e-8),
        perihelion: (29.1241, 4.20258e-5),
        semi_major_axis: 0.387098,
        eccentricity: (0.205635, 5.59e-10),
        mean_anomaly: (168.6562, 4.0923344368),
    };

    pub const VENUS: Self = Self {
        node: (76.6799, 2.46590e-5),
        inclination: (3.3946, 2.75e-8),
        perihelion: (54.8910, 1.38374e-5),
        semi_major_axis: 0.723330,
        eccentricity: (0.006773, -1.32e-9),
        mean_anomaly: (48.0052, 1.6021302244),
    };

    pub const EARTH: Self = Self {
        node: (0.0, 0.0),
        inclination: (0.0, 0.0),
        perihelion: (102.9376, 0.0000713),
        semi_major_axis: 1.0,
        eccentricity: (0.016709, -1.151e-9),
        mean_anomaly: (356.0470, 0.985609102),
    };

    pub const MARS: Self = Self {
        node: (49.5574, 2.11081e-5),
        inclination: (1.8497, -1.78e-8),
        perihelion: (286.5016, 2.92961e-5),
        semi_major_axis: 1.523688,
        eccentricity: (0.093405, 2.516e-9),
        mean_anomaly: (18.6021, 0.5240207766),
    };

    pub const JUPITER: Self = Self {
        node: (100.4542, 2.76854e-5),
        inclination: (1.3030, -1.557e-7),
        perihelion: (273.8777, 1.64505e-5),
        semi_major_axis: 5.20256,
        eccentricity: (0.048498, 1.611e-9),
        mean_anomaly: (19.8950, 0.0830853001),
    };

    pub const SATURN: Self = Self {
        node: (113.6634, 2.38980e-5),
        inclination: (2.4886, -1.081e-7),
        perihelion: (339.3939, 2.97661e-5),
        semi_major_axis: 9.55475,
        eccentricity: (0.055546, -9.499e-9),
        mean_anomaly: (316.9670, 0.0334442282),
    };

    /// Element set for a planet; `None` for the luminaries and nodes.
    pub const fn for_body(body: Body) -> Option<Self> {
        match body {
            Body::Mercury => Some(Self::MERCURY),
            Body::Venus => Some(Self::VENUS),
            Body::Mars => Some(Self::MARS),
            Body::Jupiter => Some(Self::JUPITER),
            Body::Saturn => Some(Self::SATURN),
            _ => None,
        }
    }
}

fn linear(pair: (f64, f64), d: f64) -> f64 {
    pair.0 + pair.1 * d
}

/// Solve `M = E − e·sin E` for the eccentric anomaly, all in radians.
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly_rad;
    for _ in 0..KEPLER_ITERATIONS {
        ecc_anomaly = mean_anomaly_rad + e * ecc_anomaly.sin();
    }
    ecc_anomaly
}

/// Heliocentric ecliptic `[x, y, z]` in AU, `d` days after J2000.0.
pub fn heliocentric_ecliptic(elements: &OrbitalElements, d: f64) -> [f64; 3] {
    let node = normalize_360(linear(elements.node, d));
    let incl = linear(elements.inclination, d);
    let peri = normalize_360(linear(elements.perihelion, d));
    let a = elements.semi_major_axis;
    let e = linear(elements.eccentricity, d);
    let m = normalize_360(linear(elements.mean_anomaly, d)).to_radians();

    let ecc_anomaly = solve_kepler(m, e);
    let x = a * (ecc_anomaly.cos() - e);
    let y = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();
    orbital_to_ecliptic(x, y, node, incl, peri)
}

/// Geocentric ecliptic `(longitude, latitude)` in degrees, `d` days after J2000.0.
pub fn geocentric_lon_lat(elements: &OrbitalElements, d: f64) -> (f64, f64) {
    let planet = heliocentric_ecliptic(elements, d);
    let earth = heliocentric_ecliptic(&OrbitalElements::EARTH, d);
    let geo = [
        planet[0] - earth[0],
        planet[1] - earth[1],
        planet[2] - earth[2],
    ];
    let s = cartesian_to_spherical(&geo);
    (s.lon_deg, s.lat_deg)
}
