//! Tithi (lunar day) and paksha (lunar fortnight).
//!
//! A tithi is one 12° step of the Moon's elongation from the Sun, so a
//! synodic month holds 30 of them: 15 in the waxing (Shukla) fortnight
//! ending at Purnima, 15 in the waning (Krishna) fortnight ending at
//! Amavasya.

use jyoti_math::{normalize_360, sector_index};

/// Span of one tithi in elongation degrees.
pub const TITHI_SPAN: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Paksha {
    /// Waxing half, elongation [0°, 180°).
    Shukla,
    /// Waning half, elongation [180°, 360°).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (0 = Shukla Pratipada, 29 = Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::ShuklaPratipada => "Shukla Pratipada",
            Self::ShuklaDwitiya => "Shukla Dwitiya",
            Self::ShuklaTritiya => "Shukla Tritiya",
            Self::ShuklaChaturthi => "Shukla Chaturthi",
            Self::ShuklaPanchami => "Shukla Panchami",
            Self::ShuklaShashthi => "Shukla Shashthi",
            Self::ShuklaSaptami => "Shukla Saptami",
            Self::ShuklaAshtami => "Shukla Ashtami",
            Self::ShuklaNavami => "Shukla Navami",
            Self::ShuklaDashami => "Shukla Dashami",
            Self::ShuklaEkadashi => "Shukla Ekadashi",
            Self::ShuklaDwadashi => "Shukla Dwadashi",
            Self::ShuklaTrayodashi => "Shukla Trayodashi",
            Self::ShuklaChaturdashi => "Shukla Chaturdashi",
            Self::Purnima => "Purnima",
            Self::KrishnaPratipada => "Krishna Pratipada",
            Self::KrishnaDwitiya => "Krishna Dwitiya",
            Self::KrishnaTritiya => "Krishna Tritiya",
            Self::KrishnaChaturthi => "Krishna Chaturthi",
            Self::KrishnaPanchami => "Krishna Panchami",
            Self::KrishnaShashthi => "Krishna Shashthi",
            Self::KrishnaSaptami => "Krishna Saptami",
            Self::KrishnaAshtami => "Krishna Ashtami",
            Self::KrishnaNavami => "Krishna Navami",
            Self::KrishnaDashami => "Krishna Dashami",
            Self::KrishnaEkadashi => "Krishna Ekadashi",
            Self::KrishnaDwadashi => "Krishna Dwadashi",
            Self::KrishnaTrayodashi => "Krishna Trayodashi",
            Self::KrishnaChaturdashi => "Krishna Chaturdashi",
            Self::Amavasya => "Amavasya",
        }
    }

    /// 0-based index (Shukla Pratipada = 0 .. Amavasya = 29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Tithi for a 0-based index, wrapping modulo 30.
    pub const fn from_index(index: u8) -> Self {
        ALL_TITHIS[(index % 30) as usize]
    }

    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 { Paksha::Shukla } else { Paksha::Krishna }
    }

    /// 1-based day within the paksha (Purnima and Amavasya are 15).
    pub const fn day_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

/// Result of a tithi lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TithiInfo {
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// Degrees elapsed within the tithi, [0, 12).
    pub degrees_in_tithi: f64,
    /// Fraction of the tithi still to run, (0, 1].
    pub remaining_fraction: f64,
}

/// Classify a Moon − Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let elong = normalize_360(elongation_deg);
    let idx = sector_index(elong, TITHI_SPAN, 30);
    let tithi = Tithi::from_index(idx as u8);
    let degrees_in_tithi = elong - idx as f64 * TITHI_SPAN;
    TithiInfo {
        tithi,
        paksha: tithi.paksha(),
        degrees_in_tithi,
        remaining_fraction: 1.0 - degrees_in_tithi / TITHI_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_moon_is_pratipada() {
        let info = tithi_from_elongation(0.0);
        assert_eq!(info.tithi, Tithi::ShuklaPratipada);
        assert_eq!(info.paksha, Paksha::Shukla);
        assert_eq!(info.remaining_fraction, 1.0);
    }

    #[test]
    fn purnima_and_amavasya_close_each_half() {
        assert_eq!(tithi_from_elongation(179.9).tithi, Tithi::Purnima);
        assert_eq!(tithi_from_elongation(180.0).tithi, Tithi::KrishnaPratipada);
        assert_eq!(tithi_from_elongation(359.99).tithi, Tithi::Amavasya);
        assert_eq!(Tithi::Purnima.day_in_paksha(), 15);
        assert_eq!(Tithi::Amavasya.day_in_paksha(), 15);
    }

    #[test]
    fn negative_elongation_wraps() {
        let info = tithi_from_elongation(-6.0);
        assert_eq!(info.tithi, Tithi::Amavasya);
        assert!((info.degrees_in_tithi - 6.0).abs() < 1e-12);
    }

    #[test]
    fn index_round_trip() {
        for (i, t) in ALL_TITHIS.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(Tithi::from_index(i as u8), *t);
        }
        assert_eq!(Tithi::from_index(30), Tithi::ShuklaPratipada);
    }

    #[test]
    fn names_carry_paksha() {
        assert_eq!(Tithi::ShuklaEkadashi.name(), "Shukla Ekadashi");
        assert_eq!(Tithi::KrishnaChaturdashi.name(), "Krishna Chaturdashi");
        assert_eq!(Tithi::KrishnaAshtami.paksha(), Paksha::Krishna);
    }
}
