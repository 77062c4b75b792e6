//! The [`Ephemeris`]: one entry point for every body.

use jyoti_frames::{AyanamshaSystem, ayanamsha_deg};
use jyoti_math::{angular_rate, normalize_360};
use jyoti_time::{Instant, Tt};

use crate::body::Body;
use crate::classical;
use crate::error::EphemError;
use crate::kepler::{OrbitalElements, geocentric_lon_lat};
use crate::lunar_nodes::{NODE_SPEED_DEG_PER_DAY, NodeMode, ketu_deg, rahu_deg};
use crate::surya_siddhanta;

/// Backward step for finite-difference speeds, in days.
pub const SPEED_STEP_DAYS: f64 = 0.1;

/// Which model supplies the Sun and Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LuminaryTheory {
    /// Surya Siddhanta mean motions with manda correction. Natively
    /// sidereal: the tropical value is the model value plus the configured
    /// ayanamsha.
    #[default]
    SuryaSiddhanta,
    /// Truncated Meeus series. Natively tropical.
    Classical,
}

impl LuminaryTheory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::SuryaSiddhanta => "surya-siddhanta",
            Self::Classical => "classical",
        }
    }

    /// Look up by identifier (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::SuryaSiddhanta, Self::Classical]
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }
}

/// Ephemeris configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EphemerisConfig {
    pub luminaries: LuminaryTheory,
    /// Sidereal frame used by [`Ephemeris::sidereal_longitude`], and the
    /// frame the Surya Siddhanta luminaries are anchored to.
    pub ayanamsha: AyanamshaSystem,
    pub node_mode: NodeMode,
    /// Backward finite-difference step for speeds, in days.
    pub speed_step_days: f64,
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            luminaries: LuminaryTheory::default(),
            ayanamsha: AyanamshaSystem::default(),
            node_mode: NodeMode::default(),
            speed_step_days: SPEED_STEP_DAYS,
        }
    }
}

impl EphemerisConfig {
    pub fn validate(&self) -> Result<(), EphemError> {
        if !self.speed_step_days.is_finite() || self.speed_step_days <= 0.0 {
            return Err(EphemError::InvalidConfig(
                "speed_step_days must be positive and finite",
            ));
        }
        if self.speed_step_days > 1.0 {
            return Err(EphemError::InvalidConfig(
                "speed_step_days must not exceed one day",
            ));
        }
        Ok(())
    }
}

/// Ecliptic position of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EclipticPosition {
    /// Longitude in degrees, [0, 360).
    pub longitude: f64,
    /// Latitude in degrees. Zero for the Sun, Moon and nodes.
    pub latitude: f64,
    /// Longitude speed in degrees/day.
    pub speed: f64,
    /// `speed < 0`.
    pub retrograde: bool,
}

/// Analytic ephemeris for the nine grahas.
///
/// Holds only its configuration; evaluation is pure and `Ephemeris` is
/// `Send + Sync + Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ephemeris {
    config: EphemerisConfig,
}

impl Ephemeris {
    pub fn new(config: EphemerisConfig) -> Result<Self, EphemError> {
        config.validate()?;
        log::debug!(
            "ephemeris: luminaries={} ayanamsha={} nodes={}",
            config.luminaries.name(),
            config.ayanamsha.name(),
            config.node_mode.name()
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &EphemerisConfig {
        &self.config
    }

    /// Configured ayanamsha in degrees.
    pub fn ayanamsha(&self, t: Instant<Tt>) -> f64 {
        ayanamsha_deg(self.config.ayanamsha, t.centuries_since_j2000())
    }

    /// Model value in the model's native frame, when that frame is the
    /// configured sidereal one.
    fn native_sidereal(&self, body: Body, jd_tt: f64) -> Option<f64> {
        if self.config.luminaries != LuminaryTheory::SuryaSiddhanta {
            return None;
        }
        let ahargana = Instant::<Tt>::from_jd(jd_tt).ahargana();
        match body {
            Body::Sun => Some(surya_siddhanta::sun_longitude_deg(ahargana)),
            Body::Moon => Some(surya_siddhanta::moon_longitude_deg(ahargana)),
            _ => None,
        }
    }

    /// Tropical `(longitude, latitude)` in degrees at a TT Julian Day.
    fn tropical_lon_lat(&self, body: Body, jd_tt: f64) -> (f64, f64) {
        let t = Instant::<Tt>::from_jd(jd_tt).centuries_since_j2000();
        if let Some(sidereal) = self.native_sidereal(body, jd_tt) {
            return (normalize_360(sidereal + ayanamsha_deg(self.config.ayanamsha, t)), 0.0);
        }
        match body {
            Body::Sun => (classical::sun_longitude_deg(t), 0.0),
            Body::Moon => (classical::moon_longitude_deg(t), 0.0),
            Body::Rahu => (rahu_deg(t, self.config.node_mode), 0.0),
            Body::Ketu => (ketu_deg(t, self.config.node_mode), 0.0),
            Body::Mercury | Body::Venus | Body::Mars | Body::Jupiter | Body::Saturn => {
                match OrbitalElements::for_body(body) {
                    Some(elements) => geocentric_lon_lat(&elements, jd_tt - jyoti_time::J2000_JD),
                    None => (0.0, 0.0),
                }
            }
        }
    }

    /// Tropical ecliptic longitude only, in degrees.
    ///
    /// Cheaper than [`Ephemeris::body_longitude`]: no speed evaluation.
    pub fn tropical_longitude(&self, body: Body, t: Instant<Tt>) -> f64 {
        self.tropical_lon_lat(body, t.jd()).0
    }

    /// Speed in degrees/day from a backward difference, or the fixed node rate.
    fn speed(&self, body: Body, jd_tt: f64, longitude: f64) -> f64 {
        if body.is_node() {
            return NODE_SPEED_DEG_PER_DAY;
        }
        angular_rate(
            |jd| self.tropical_lon_lat(body, jd).0,
            jd_tt,
            longitude,
            -self.config.speed_step_days,
        )
    }

    /// Tropical ecliptic position, speed and retrograde flag.
    pub fn body_longitude(&self, body: Body, t: Instant<Tt>) -> EclipticPosition {
        let (longitude, latitude) = self.tropical_lon_lat(body, t.jd());
        let speed = self.speed(body, t.jd(), longitude);
        EclipticPosition {
            longitude,
            latitude,
            speed,
            retrograde: speed < 0.0,
        }
    }

    /// Sidereal longitude in the configured ayanamsha, in degrees.
    pub fn sidereal_longitude(&self, body: Body, t: Instant<Tt>) -> f64 {
        self.sidereal_longitude_with(body, t, self.config.ayanamsha)
    }

    /// Sidereal longitude for an explicit ayanamsha system, in degrees.
    ///
    /// `normalize_360(tropical − ayanamsha(system))`. For the Surya
    /// Siddhanta luminaries in the configured system this is the model
    /// value itself.
    pub fn sidereal_longitude_with(
        &self,
        body: Body,
        t: Instant<Tt>,
        system: AyanamshaSystem,
    ) -> f64 {
        if system == self.config.ayanamsha {
            if let Some(native) = self.native_sidereal(body, t.jd()) {
                return native;
            }
        }
        let ayanamsha = ayanamsha_deg(system, t.centuries_since_j2000());
        normalize_360(self.tropical_longitude(body, t) - ayanamsha)
    }

    /// Sidereal position: longitude in the configured ayanamsha, same
    /// latitude, speed and retrograde flag as the tropical position.
    pub fn sidereal_position(&self, body: Body, t: Instant<Tt>) -> EclipticPosition {
        self.sidereal_position_with(body, t, self.config.ayanamsha)
    }

    /// [`Ephemeris::sidereal_position`] for an explicit ayanamsha system.
    pub fn sidereal_position_with(
        &self,
        body: Body,
        t: Instant<Tt>,
        system: AyanamshaSystem,
    ) -> EclipticPosition {
        let tropical = self.body_longitude(body, t);
        EclipticPosition {
            longitude: self.sidereal_longitude_with(body, t, system),
            ..tropical
        }
    }

    /// Moon's ecliptic latitude in degrees, from the classical series
    /// regardless of the luminary theory. Used for horizon work, where the
    /// ±5° latitude moves rise times by several minutes.
    pub fn moon_latitude(&self, t: Instant<Tt>) -> f64 {
        classical::moon_latitude_deg(t.centuries_since_j2000())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t2024() -> Instant<Tt> {
        Instant::from_jd(2_460_310.5)
    }

    fn classical() -> Ephemeris {
        Ephemeris::new(EphemerisConfig {
            luminaries: LuminaryTheory::Classical,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn config_validation() {
        assert!(EphemerisConfig::default().validate().is_ok());
        let bad = EphemerisConfig {
            speed_step_days: 0.0,
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(EphemError::InvalidConfig(_))));
        let nan = EphemerisConfig {
            speed_step_days: f64::NAN,
            ..Default::default()
        };
        assert!(Ephemeris::new(nan).is_err());
    }

    #[test]
    fn surya_siddhanta_sidereal_is_model_value() {
        let eph = Ephemeris::default();
        let t = t2024();
        let sun = eph.sidereal_longitude(Body::Sun, t);
        assert_eq!(sun, surya_siddhanta::sun_longitude_deg(t.ahargana()));
        let trop = eph.tropical_longitude(Body::Sun, t);
        assert!((normalize_360(trop - eph.ayanamsha(t)) - sun).abs() < 1e-9);
    }

    #[test]
    fn other_ayanamsha_shifts_sidereal() {
        let eph = Ephemeris::default();
        let t = t2024();
        let lahiri = eph.sidereal_longitude(Body::Moon, t);
        let raman = eph.sidereal_longitude_with(Body::Moon, t, AyanamshaSystem::Raman);
        let shift = jyoti_math::normalize_pm180(raman - lahiri);
        let expected = AyanamshaSystem::Lahiri.reference_j2000_deg()
            - AyanamshaSystem::Raman.reference_j2000_deg();
        assert!((shift - expected).abs() < 1e-9, "shift = {shift}");
    }

    #[test]
    fn classical_sun_matches_series() {
        let t = t2024();
        let pos = classical().body_longitude(Body::Sun, t);
        let series = classical::sun_longitude_deg(t.centuries_since_j2000());
        assert!((pos.longitude - series).abs() < 1e-12);
        assert!((pos.speed - 1.019).abs() < 0.005, "speed = {}", pos.speed);
        assert!(!pos.retrograde);
        assert_eq!(pos.latitude, 0.0);
    }

    #[test]
    fn moon_speed_plausible() {
        for eph in [Ephemeris::default(), classical()] {
            let pos = eph.body_longitude(Body::Moon, t2024());
            assert!(pos.speed > 11.0 && pos.speed < 16.0, "speed = {}", pos.speed);
            assert!(!pos.retrograde);
        }
    }

    #[test]
    fn nodes_fixed_speed_and_retrograde() {
        let eph = Ephemeris::default();
        for body in [Body::Rahu, Body::Ketu] {
            let pos = eph.body_longitude(body, t2024());
            assert_eq!(pos.speed, NODE_SPEED_DEG_PER_DAY);
            assert!(pos.retrograde);
        }
        let rahu = eph.tropical_longitude(Body::Rahu, t2024());
        let ketu = eph.tropical_longitude(Body::Ketu, t2024());
        assert!((normalize_360(ketu - rahu) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn planets_carry_latitude() {
        let pos = Ephemeris::default().body_longitude(Body::Mercury, t2024());
        assert!(pos.latitude.abs() > 0.5 && pos.latitude.abs() < 7.0);
    }

    #[test]
    fn mercury_retrograde_april_2024() {
        let eph = Ephemeris::default();
        let pos = eph.body_longitude(Body::Mercury, Instant::from_jd(2_460_410.5));
        assert!(pos.retrograde, "speed = {}", pos.speed);
        let direct = eph.body_longitude(Body::Mercury, Instant::from_jd(2_460_462.5));
        assert!(!direct.retrograde, "speed = {}", direct.speed);
    }

    #[test]
    fn sidereal_position_keeps_speed() {
        let eph = Ephemeris::default();
        let trop = eph.body_longitude(Body::Jupiter, t2024());
        let sid = eph.sidereal_position(Body::Jupiter, t2024());
        assert_eq!(trop.speed, sid.speed);
        assert_eq!(trop.retrograde, sid.retrograde);
        let diff = normalize_360(trop.longitude - sid.longitude);
        assert!((diff - eph.ayanamsha(t2024())).abs() < 1e-9);
    }

    #[test]
    fn theory_names() {
        assert_eq!(
            LuminaryTheory::from_name("Classical"),
            Some(LuminaryTheory::Classical)
        );
        assert_eq!(LuminaryTheory::from_name("x"), None);
    }
}
