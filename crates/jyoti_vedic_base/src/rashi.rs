//! Rashi (sidereal sign) and navamsa classification.
//!
//! Twelve signs of 30° starting at 0° Mesha. A sign is further split into
//! nine navamsas of 3°20′, counted continuously around the zodiac so that
//! the navamsa sign is `floor(lon / 3°20′) mod 12`.

use jyoti_math::{normalize_360, sector_index};

/// Span of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// Span of one navamsa in degrees.
const NAVAMSA_SPAN: f64 = RASHI_SPAN / 9.0;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western sign name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Rashi for a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Whole-sign house of this rashi counted from the lagna rashi, 1-12.
    pub const fn house_from(self, lagna: Rashi) -> u8 {
        (self.index() + 12 - lagna.index()) % 12 + 1
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

/// Degrees-minutes-seconds of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    pub seconds: f64,
}

impl Dms {
    /// Split decimal degrees; the sign is dropped.
    pub fn from_deg(deg: f64) -> Self {
        let d = deg.abs();
        let degrees = d.floor() as u16;
        let rem = (d - degrees as f64) * 60.0;
        let minutes = rem.floor() as u8;
        Self {
            degrees,
            minutes,
            seconds: (rem - minutes as f64) * 60.0,
        }
    }

    pub fn to_deg(&self) -> f64 {
        self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds / 3600.0
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}′{:02.0}″", self.degrees, self.minutes, self.seconds.floor())
    }
}

/// Result of a rashi lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Decimal degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
}

/// Classify a sidereal longitude in degrees.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = sector_index(lon, RASHI_SPAN, 12) as u8;
    let degrees_in_rashi = lon - idx as f64 * RASHI_SPAN;
    RashiInfo {
        rashi: Rashi::from_index(idx),
        degrees_in_rashi,
        dms: Dms::from_deg(degrees_in_rashi),
    }
}

/// Navamsa (D9) sign of a sidereal longitude.
pub fn navamsa_rashi(sidereal_lon_deg: f64) -> Rashi {
    let idx = sector_index(sidereal_lon_deg, NAVAMSA_SPAN, 108);
    Rashi::from_index((idx % 12) as u8)
}
