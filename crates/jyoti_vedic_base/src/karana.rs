//! Karana (half-tithi).
//!
//! The 60 half-tithis of a synodic month carry only 11 names. Position 0
//! is the fixed karana Kimstughna, positions 1..=56 cycle through the seven
//! movable karanas eight times, and positions 57..=59 are the fixed
//! Shakuni, Chatushpada and Naga.

use jyoti_math::{normalize_360, sector_index};

/// Span of one karana in elongation degrees.
pub const KARANA_SPAN: f64 = 6.0;

/// The eleven karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// All 11 karanas, movable ones first.
pub const ALL_KARANAS: [Karana; 11] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
    Karana::Shakuni,
    Karana::Chatushpada,
    Karana::Naga,
    Karana::Kimstughna,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Fixed karanas occur once per month; movable ones repeat.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }

    pub const fn all() -> &'static [Karana; 11] {
        &ALL_KARANAS
    }
}

/// Karana name for a half-tithi position (0..60), wrapping modulo 60.
pub const fn karana_from_index(index: u8) -> Karana {
    match index % 60 {
        0 => Karana::Kimstughna,
        57 => Karana::Shakuni,
        58 => Karana::Chatushpada,
        59 => Karana::Naga,
        i => ALL_KARANAS[((i - 1) % 7) as usize],
    }
}

/// Result of a karana lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KaranaInfo {
    pub karana: Karana,
    /// Half-tithi position in the month, 0..60.
    pub index: u8,
    /// Degrees elapsed within the karana, [0, 6).
    pub degrees_in_karana: f64,
}

/// Classify a Moon − Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let elong = normalize_360(elongation_deg);
    let idx = sector_index(elong, KARANA_SPAN, 60) as u8;
    KaranaInfo {
        karana: karana_from_index(idx),
        index: idx,
        degrees_in_karana: elong - idx as f64 * KARANA_SPAN,
    }
}
