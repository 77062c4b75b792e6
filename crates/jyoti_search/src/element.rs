//! The panchanga element table.
//!
//! Every element is one row: which angular function of time it follows,
//! the sector width and the sector count. All boundary logic is written
//! once against this table.

use jyoti_ephem::{Body, Ephemeris};
use jyoti_math::{normalize_360, sector_index};
use jyoti_time::{Instant, Tt};
use jyoti_vedic_base::{
    KARANA_SPAN, NAKSHATRA_SPAN, Nakshatra, PADA_SPAN, TITHI_SPAN, Tithi, YOGA_SPAN, Yoga,
    karana_from_index,
};

/// Angular quantity an element divides into sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementFunction {
    /// Sidereal Moon − sidereal Sun.
    Elongation,
    /// Sidereal Moon.
    MoonLongitude,
    /// Sidereal Sun + sidereal Moon, mod 360.
    LuniSolarSum,
}

impl ElementFunction {
    /// Value in degrees, [0, 360).
    pub fn evaluate(self, ephem: &Ephemeris, t: Instant<Tt>) -> f64 {
        match self {
            Self::Elongation => normalize_360(
                ephem.sidereal_longitude(Body::Moon, t) - ephem.sidereal_longitude(Body::Sun, t),
            ),
            Self::MoonLongitude => ephem.sidereal_longitude(Body::Moon, t),
            Self::LuniSolarSum => normalize_360(
                ephem.sidereal_longitude(Body::Moon, t) + ephem.sidereal_longitude(Body::Sun, t),
            ),
        }
    }

    /// Mean rate in degrees/day, for first guesses over long spans.
    pub const fn mean_rate_deg_per_day(self) -> f64 {
        match self {
            Self::Elongation => 12.190_749,
            Self::MoonLongitude => 13.176_358,
            Self::LuniSolarSum => 14.161_967,
        }
    }
}

/// The five sector-based panchanga elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    Tithi,
    Karana,
    Nakshatra,
    Pada,
    Yoga,
}

/// One row of the element table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSpec {
    pub kind: ElementKind,
    pub function: ElementFunction,
    /// Sector width, degrees.
    pub step_deg: f64,
    pub sectors: u32,
}

pub const ELEMENT_TABLE: [ElementSpec; 5] = [
    ElementSpec {
        kind: ElementKind::Tithi,
        function: ElementFunction::Elongation,
        step_deg: TITHI_SPAN,
        sectors: 30,
    },
    ElementSpec {
        kind: ElementKind::Karana,
        function: ElementFunction::Elongation,
        step_deg: KARANA_SPAN,
        sectors: 60,
    },
    ElementSpec {
        kind: ElementKind::Nakshatra,
        function: ElementFunction::MoonLongitude,
        step_deg: NAKSHATRA_SPAN,
        sectors: 27,
    },
    ElementSpec {
        kind: ElementKind::Pada,
        function: ElementFunction::MoonLongitude,
        step_deg: PADA_SPAN,
        sectors: 108,
    },
    ElementSpec {
        kind: ElementKind::Yoga,
        function: ElementFunction::LuniSolarSum,
        step_deg: YOGA_SPAN,
        sectors: 27,
    },
];

const ALL_KINDS: [ElementKind; 5] = [
    ElementKind::Tithi,
    ElementKind::Karana,
    ElementKind::Nakshatra,
    ElementKind::Pada,
    ElementKind::Yoga,
];

impl ElementKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "tithi",
            Self::Karana => "karana",
            Self::Nakshatra => "nakshatra",
            Self::Pada => "pada",
            Self::Yoga => "yoga",
        }
    }

    /// Look up by identifier (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_KINDS
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(name))
    }

    pub const fn all() -> &'static [ElementKind; 5] {
        &ALL_KINDS
    }

    pub const fn spec(self) -> &'static ElementSpec {
        &ELEMENT_TABLE[self as usize]
    }

    pub const fn step_deg(self) -> f64 {
        self.spec().step_deg
    }

    pub const fn sectors(self) -> u32 {
        self.spec().sectors
    }

    /// The element's angular function at `t`, degrees.
    pub fn value_at(self, ephem: &Ephemeris, t: Instant<Tt>) -> f64 {
        self.spec().function.evaluate(ephem, t)
    }

    /// Sector containing an angle.
    pub fn index_of(self, value_deg: f64) -> u32 {
        sector_index(value_deg, self.step_deg(), self.sectors())
    }

    /// Sector in force at `t`.
    pub fn index_at(self, ephem: &Ephemeris, t: Instant<Tt>) -> u32 {
        self.index_of(self.value_at(ephem, t))
    }

    /// Lower edge of a sector, degrees. Indices wrap.
    pub fn sector_start_deg(self, index: u32) -> f64 {
        (index % self.sectors()) as f64 * self.step_deg()
    }

    /// Display name of a sector.
    pub fn label(self, index: u32) -> String {
        match self {
            Self::Tithi => Tithi::from_index((index % 30) as u8).name().to_string(),
            Self::Karana => karana_from_index((index % 60) as u8).name().to_string(),
            Self::Nakshatra => Nakshatra::from_index((index % 27) as u8).name().to_string(),
            Self::Pada => {
                let i = index % 108;
                let nakshatra = Nakshatra::from_index((i / 4) as u8);
                format!("{} pada {}", nakshatra.name(), i % 4 + 1)
            }
            Self::Yoga => Yoga::from_index((index % 27) as u8).name().to_string(),
        }
    }
}
