//! Lunar nodes: Rahu (ascending) and Ketu (descending).
//!
//! Mean node: linear term of Meeus, _Astronomical Algorithms_ (2nd ed.),
//! eq. 47.7. True node: mean node plus two periodic terms, one in the mean
//! node against twice the Moon–Sun mean elongation, one in twice the
//! Moon's argument of latitude.

use jyoti_math::normalize_360;

/// Nominal daily motion of the nodes (degrees/day). The nodes regress
/// one full turn in ~18.6 years, so the speed is fixed and negative.
pub const NODE_SPEED_DEG_PER_DAY: f64 = -0.0529;

/// Mean or corrected node position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeMode {
    /// Smooth linear regression only.
    Mean,
    /// Mean node plus the two principal periodic terms.
    #[default]
    True,
}

impl NodeMode {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::True => "true",
        }
    }

    /// Look up by identifier (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Mean, Self::True]
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(name))
    }
}

/// Mean Rahu longitude in degrees, [0, 360), `t` centuries (TT) since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    normalize_360(125.04452 - 1934.136261 * t)
}

/// Periodic correction to the mean node, in degrees.
fn node_correction_deg(t: f64, mean_node: f64) -> f64 {
    let moon_mean = normalize_360(218.3164477 + 481_267.881_234_21 * t);
    let sun_mean = normalize_360(280.46646 + 36_000.76983 * t);
    let elongation = normalize_360(moon_mean - sun_mean);
    let arg_latitude = normalize_360(moon_mean - mean_node);
    -1.274 * (mean_node - 2.0 * elongation).to_radians().sin()
        - 0.227 * (2.0 * arg_latitude).to_radians().sin()
}

/// Rahu longitude in degrees, [0, 360), tropical.
pub fn rahu_deg(t: f64, mode: NodeMode) -> f64 {
    let mean = mean_rahu_deg(t);
    match mode {
        NodeMode::Mean => mean,
        NodeMode::True => normalize_360(mean + node_correction_deg(t, mean)),
    }
}

/// Ketu longitude in degrees: always exactly opposite Rahu.
pub fn ketu_deg(t: f64, mode: NodeMode) -> f64 {
    normalize_360(rahu_deg(t, mode) + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T_2024: f64 = (2_460_310.5 - 2_451_545.0) / 36_525.0;

    #[test]
    fn mean_node_at_j2000() {
        assert!((mean_rahu_deg(0.0) - 125.04452).abs() < 1e-12);
    }

    #[test]
    fn mean_node_regresses() {
        let a = mean_rahu_deg(0.0);
        let b = mean_rahu_deg(1.0 / 36_525.0);
        let daily = jyoti_math::normalize_pm180(b - a);
        assert!((daily + 0.052_954).abs() < 1e-5, "daily = {daily}");
    }

    #[test]
    fn rahu_2024_new_year() {
        assert!((mean_rahu_deg(T_2024) - 20.878).abs() < 0.01);
        assert!((rahu_deg(T_2024, NodeMode::True) - 22.379).abs() < 0.01);
    }

    #[test]
    fn correction_is_bounded() {
        let mut t = -0.5;
        while t < 0.5 {
            let d = jyoti_math::normalize_pm180(
                rahu_deg(t, NodeMode::True) - rahu_deg(t, NodeMode::Mean),
            );
            assert!(d.abs() <= 1.274 + 0.227 + 1e-9, "correction = {d}");
            t += 0.0137;
        }
    }

    #[test]
    fn ketu_opposite_rahu() {
        for mode in [NodeMode::Mean, NodeMode::True] {
            let diff = normalize_360(ketu_deg(T_2024, mode) - rahu_deg(T_2024, mode));
            assert!((diff - 180.0).abs() < 1e-9);
        }
    }
}
