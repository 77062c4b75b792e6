//! Ahargana: the continuous day count from the Kali Yuga epoch.
//!
//! The epoch is midnight at Ujjain preceding 18 February 3102 BCE (Julian
//! calendar), taken as JD 588465.5. The Surya Siddhanta mean motions are
//! linear in this count.

/// Julian Day of the Kali Yuga epoch.
pub const KALI_EPOCH_JD: f64 = 588_465.5;

/// Days elapsed since the Kali epoch.
pub fn jd_to_ahargana(jd: f64) -> f64 {
    jd - KALI_EPOCH_JD
}

/// Julian Day for an Ahargana day count.
pub fn ahargana_to_jd(ahargana: f64) -> f64 {
    ahargana + KALI_EPOCH_JD
}
