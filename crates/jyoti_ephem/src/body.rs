//! The nine grahas.

/// Bodies the ephemeris can evaluate: the two luminaries, the five
/// classical planets, and the two lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

/// All nine bodies in traditional graha order (Surya first, Ketu last).
const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Mercury,
    Body::Jupiter,
    Body::Venus,
    Body::Saturn,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mars => "Mars",
            Self::Mercury => "Mercury",
            Self::Jupiter => "Jupiter",
            Self::Venus => "Venus",
            Self::Saturn => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Sanskrit graha name.
    pub const fn graha_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mars => "Mangal",
            Self::Mercury => "Buddh",
            Self::Jupiter => "Guru",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// 0-based index in graha order.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mars => 2,
            Self::Mercury => 3,
            Self::Jupiter => 4,
            Self::Venus => 5,
            Self::Saturn => 6,
            Self::Rahu => 7,
            Self::Ketu => 8,
        }
    }

    /// Sun or Moon.
    pub const fn is_luminary(self) -> bool {
        matches!(self, Self::Sun | Self::Moon)
    }

    /// Rahu or Ketu.
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Look up by English or Sanskrit name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_BODIES.iter().copied().find(|b| {
            b.name().eq_ignore_ascii_case(name) || b.graha_name().eq_ignore_ascii_case(name)
        })
    }

    /// All nine bodies in graha order.
    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }
}
