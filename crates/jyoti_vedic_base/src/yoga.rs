//! Yoga (luni-solar combination).
//!
//! The sum of the sidereal Sun and Moon longitudes, taken modulo 360°,
//! is split into 27 yogas of 13°20′.

use jyoti_math::{normalize_360, sector_index};

/// Span of one yoga: 360/27 degrees.
pub const YOGA_SPAN: f64 = 360.0 / 27.0;

/// The 27 yogas from Vishkumbha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Yoga {
    Vishkumbha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order.
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkumbha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkumbha => "Vishkumbha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Yoga for a 0-based index, wrapping modulo 27.
    pub const fn from_index(index: u8) -> Self {
        ALL_YOGAS[(index % 27) as usize]
    }

    /// Yogas traditionally avoided for auspicious work.
    pub const fn is_inauspicious(self) -> bool {
        matches!(
            self,
            Self::Vishkumbha
                | Self::Atiganda
                | Self::Shula
                | Self::Ganda
                | Self::Vyaghata
                | Self::Vajra
                | Self::Vyatipata
                | Self::Parigha
                | Self::Vaidhriti
        )
    }

    pub const fn all() -> &'static [Yoga; 27] {
        &ALL_YOGAS
    }
}

/// Result of a yoga lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YogaInfo {
    pub yoga: Yoga,
    /// Degrees within the yoga, [0, 13.333…).
    pub degrees_in_yoga: f64,
}

/// Classify a Sun + Moon sidereal longitude sum in degrees (any range).
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let idx = sector_index(sum, YOGA_SPAN, 27) as u8;
    YogaInfo {
        yoga: Yoga::from_index(idx),
        degrees_in_yoga: sum - idx as f64 * YOGA_SPAN,
    }
}
