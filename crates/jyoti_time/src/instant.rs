//! Typed instants on the dynamical and universal time axes.
//!
//! An [`Instant`] is a Julian Day tagged with the time scale it is measured
//! in. Orbital formulas take [`Instant<Tt>`]; civil clock conversions take
//! [`Instant<Ut>`]. The only bridge between the two is ΔT, so the scales
//! cannot be mixed up silently.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::ahargana::{ahargana_to_jd, jd_to_ahargana};
use crate::civil::CivilDateTime;
use crate::delta_t::delta_t_days;
use crate::julian::jd_to_centuries;

/// Marker trait for a time scale.
pub trait TimeScale: Copy + Debug + 'static {
    /// Short label used in `Display` output.
    const LABEL: &'static str;
}

/// Terrestrial (dynamical) Time. Uniform; drives every orbital formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tt;

/// Universal Time. Follows Earth rotation; drives civil clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ut;

impl TimeScale for Tt {
    const LABEL: &'static str = "TT";
}

impl TimeScale for Ut {
    const LABEL: &'static str = "UT";
}

/// A Julian Day on time scale `S`.
#[derive(Clone, Copy)]
pub struct Instant<S: TimeScale> {
    jd: f64,
    _scale: PhantomData<S>,
}

impl<S: TimeScale> Instant<S> {
    /// Create an instant from a Julian Day on scale `S`.
    pub const fn from_jd(jd: f64) -> Self {
        Self {
            jd,
            _scale: PhantomData,
        }
    }

    /// Julian Day on scale `S`.
    pub const fn jd(self) -> f64 {
        self.jd
    }

    /// Julian centuries since J2000.0 on scale `S`.
    pub fn centuries_since_j2000(self) -> f64 {
        jd_to_centuries(self.jd)
    }

    /// Instant shifted by a (possibly fractional, possibly negative) number of days.
    pub fn add_days(self, days: f64) -> Self {
        Self::from_jd(self.jd + days)
    }

    /// Signed days from `other` to `self`.
    pub fn days_since(self, other: Self) -> f64 {
        self.jd - other.jd
    }

    /// The earlier of two instants.
    pub fn min(self, other: Self) -> Self {
        if other.jd < self.jd { other } else { self }
    }

    /// The later of two instants.
    pub fn max(self, other: Self) -> Self {
        if other.jd > self.jd { other } else { self }
    }
}

impl Instant<Tt> {
    /// Convert to Universal Time by removing ΔT.
    pub fn to_ut(self) -> Instant<Ut> {
        Instant::from_jd(self.jd - delta_t_days(self.jd))
    }

    /// Days since the Kali epoch on the dynamical axis.
    pub fn ahargana(self) -> f64 {
        jd_to_ahargana(self.jd)
    }

    /// Instant for a Kali-epoch day count.
    pub fn from_ahargana(ahargana: f64) -> Self {
        Self::from_jd(ahargana_to_jd(ahargana))
    }

    /// Local civil date-time for a UTC offset in hours.
    pub fn to_civil(self, utc_offset_hours: f64) -> CivilDateTime {
        self.to_ut().to_civil(utc_offset_hours)
    }
}

impl Instant<Ut> {
    /// Convert to Terrestrial Time by adding ΔT.
    pub fn to_tt(self) -> Instant<Tt> {
        Instant::from_jd(self.jd + delta_t_days(self.jd))
    }

    /// Instant for a civil date-time (its own UTC offset applies).
    pub fn from_civil(civil: &CivilDateTime) -> Self {
        Self::from_jd(civil.to_jd_ut())
    }

    /// Local civil date-time for a UTC offset in hours.
    pub fn to_civil(self, utc_offset_hours: f64) -> CivilDateTime {
        CivilDateTime::from_jd_ut(self.jd, utc_offset_hours)
    }
}

impl<S: TimeScale> Debug for Instant<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Instant<{}>({})", S::LABEL, self.jd)
    }
}

impl<S: TimeScale> Display for Instant<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6} {}", self.jd, S::LABEL)
    }
}

impl<S: TimeScale> PartialEq for Instant<S> {
    fn eq(&self, other: &Self) -> bool {
        self.jd == other.jd
    }
}

impl<S: TimeScale> PartialOrd for Instant<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.jd.partial_cmp(&other.jd)
    }
}

impl<S: TimeScale> Add<f64> for Instant<S> {
    type Output = Self;

    fn add(self, days: f64) -> Self {
        self.add_days(days)
    }
}

impl<S: TimeScale> AddAssign<f64> for Instant<S> {
    fn add_assign(&mut self, days: f64) {
        self.jd += days;
    }
}

impl<S: TimeScale> Sub<f64> for Instant<S> {
    type Output = Self;

    fn sub(self, days: f64) -> Self {
        self.add_days(-days)
    }
}

impl<S: TimeScale> SubAssign<f64> for Instant<S> {
    fn sub_assign(&mut self, days: f64) {
        self.jd -= days;
    }
}

impl<S: TimeScale> Sub for Instant<S> {
    type Output = f64;

    fn sub(self, other: Self) -> f64 {
        self.days_since(other)
    }
}

#[cfg(feature = "serde")]
impl<S: TimeScale> serde::Serialize for Instant<S> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_f64(self.jd)
    }
}

#[cfg(feature = "serde")]
impl<'de, S: TimeScale> serde::Deserialize<'de> for Instant<S> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let jd = f64::deserialize(deserializer)?;
        Ok(Self::from_jd(jd))
    }
}
