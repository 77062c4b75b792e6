//! Cartesian ↔ spherical coordinate conversion.

use jyoti_math::normalize_360;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, [0, 360), measured from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, [-90, 90], elevation above the x-y plane.
    pub lat_deg: f64,
    /// Distance from the origin, in the units of the input vector.
    pub distance: f64,
}

/// Convert cartesian `[x, y, z]` to spherical coordinates.
///
/// Latitude uses `atan2(z, ρ)` rather than `asin(z / r)`, which stays
/// accurate near the poles.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let rho = x.hypot(y);
    let r = rho.hypot(z);

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    SphericalCoords {
        lon_deg: normalize_360(y.atan2(x).to_degrees()),
        lat_deg: z.atan2(rho).to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon = s.lon_deg.to_radians();
    let lat = s.lat_deg.to_radians();
    [
        s.distance * lat.cos() * lon.cos(),
        s.distance * lat.cos() * lon.sin(),
        s.distance * lat.sin(),
    ]
}
