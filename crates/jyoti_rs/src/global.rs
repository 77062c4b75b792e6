//! Process-wide ephemeris used by the convenience functions.

use std::sync::OnceLock;

use jyoti_ephem::{Ephemeris, EphemerisConfig};

use crate::error::JyotiError;

static ENGINE: OnceLock<Ephemeris> = OnceLock::new();

/// Set the process-wide ephemeris configuration.
///
/// May be called once, before any convenience function runs; afterwards
/// the configuration is fixed. Without a call, the default configuration
/// (Surya Siddhanta luminaries, Lahiri) is used.
pub fn init(config: EphemerisConfig) -> Result<(), JyotiError> {
    let ephem = Ephemeris::new(config)?;
    ENGINE
        .set(ephem)
        .map_err(|_| JyotiError::AlreadyInitialized)
}

/// Whether the ephemeris has been fixed, by [`init`] or by first use.
pub fn is_initialized() -> bool {
    ENGINE.get().is_some()
}

pub(crate) fn engine() -> Ephemeris {
    *ENGINE.get_or_init(Ephemeris::default)
}
