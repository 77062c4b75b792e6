//! Vaar (weekday).

use jyoti_time::weekday;

/// The seven weekdays, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vaar {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivara,
    Vaar::Somavara,
    Vaar::Mangalavara,
    Vaar::Budhavara,
    Vaar::Guruvara,
    Vaar::Shukravara,
    Vaar::Shanivara,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivara => "Ravivara",
            Self::Somavara => "Somavara",
            Self::Mangalavara => "Mangalavara",
            Self::Budhavara => "Budhavara",
            Self::Guruvara => "Guruvara",
            Self::Shukravara => "Shukravara",
            Self::Shanivara => "Shanivara",
        }
    }

    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Ravivara => "Sunday",
            Self::Somavara => "Monday",
            Self::Mangalavara => "Tuesday",
            Self::Budhavara => "Wednesday",
            Self::Guruvara => "Thursday",
            Self::Shukravara => "Friday",
            Self::Shanivara => "Saturday",
        }
    }

    /// 0 = Sunday.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn from_index(index: u8) -> Self {
        ALL_VAARS[(index % 7) as usize]
    }

    pub const fn all() -> &'static [Vaar; 7] {
        &ALL_VAARS
    }
}

/// Weekday of the civil day containing a Julian Day, seen from a UTC
/// offset in hours.
pub fn vaar_from_jd(jd_ut: f64, utc_offset_hours: f64) -> Vaar {
    Vaar::from_index(weekday(jd_ut + utc_offset_hours / 24.0) as u8)
}
