//! Generic transit solver.
//!
//! Finds the instant at which an angular function of time reaches a target
//! value modulo 360°, by Newton steps in time on the wrapped residual. The
//! local rate comes from a forward finite difference of the same composite
//! function, so sums and differences of longitudes are differentiated as a
//! whole.

use jyoti_math::{angular_rate, normalize_pm180};
use jyoti_time::{Instant, Tt};

use crate::error::SearchError;

/// Solver tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitConfig {
    /// Newton steps before giving up. Default 5.
    pub max_iterations: u32,
    /// Accept when |target − f(t)| is below this, degrees. Default 1e-4.
    pub epsilon_deg: f64,
    /// Forward step for the rate estimate, days. Default 0.001.
    pub derivative_step_days: f64,
    /// Largest single correction, days. Default 2.
    pub max_step_days: f64,
}

impl Default for TransitConfig {
    fn default() -> Self {
        Self {
            max_iterations: 5,
            epsilon_deg: 1e-4,
            derivative_step_days: 0.001,
            max_step_days: 2.0,
        }
    }
}

impl TransitConfig {
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_iterations == 0 || self.max_iterations > 100 {
            return Err(SearchError::InvalidConfig("max_iterations must be within 1..=100"));
        }
        if !self.epsilon_deg.is_finite() || self.epsilon_deg <= 0.0 {
            return Err(SearchError::InvalidConfig("epsilon_deg must be positive"));
        }
        if !self.derivative_step_days.is_finite()
            || self.derivative_step_days <= 0.0
            || self.derivative_step_days > 0.5
        {
            return Err(SearchError::InvalidConfig(
                "derivative_step_days must be within (0, 0.5]",
            ));
        }
        if !self.max_step_days.is_finite() || self.max_step_days <= 0.0 {
            return Err(SearchError::InvalidConfig("max_step_days must be positive"));
        }
        Ok(())
    }
}

/// A located crossing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crossing {
    pub instant: Instant<Tt>,
    /// `target − f(instant)` folded to (−180, 180], degrees.
    pub residual_deg: f64,
    /// Newton steps taken.
    pub iterations: u32,
    /// Whether |residual| fell below the configured epsilon. When false,
    /// `instant` is the solver's last estimate and may be off.
    pub converged: bool,
}

/// Find `t` near `anchor` with `f(t) ≡ target_deg (mod 360)`.
///
/// Returns `None` only when the local rate of `f` is zero or not finite,
/// so no step can be taken. Running out of iterations still yields the
/// last estimate, flagged `converged: false`.
pub fn find_crossing<F>(
    anchor: Instant<Tt>,
    f: F,
    target_deg: f64,
    config: &TransitConfig,
) -> Option<Crossing>
where
    F: Fn(Instant<Tt>) -> f64,
{
    let g = |jd: f64| f(Instant::from_jd(jd));
    let mut jd = anchor.jd();

    for iteration in 0..config.max_iterations {
        let value = g(jd);
        let residual = normalize_pm180(target_deg - value);
        if residual.abs() < config.epsilon_deg {
            return Some(Crossing {
                instant: Instant::from_jd(jd),
                residual_deg: residual,
                iterations: iteration,
                converged: true,
            });
        }

        let rate = angular_rate(&g, jd, value, config.derivative_step_days);
        if !rate.is_finite() || rate == 0.0 {
            log::debug!("transit to {target_deg:.6}°: flat rate at JD {jd:.6}");
            return None;
        }
        let step = (residual / rate).clamp(-config.max_step_days, config.max_step_days);
        log::trace!(
            "transit to {target_deg:.6}° #{iteration}: residual {residual:.3e}° rate {rate:.4}°/d step {step:.6} d"
        );
        jd += step;
    }

    let residual = normalize_pm180(target_deg - g(jd));
    let converged = residual.abs() < config.epsilon_deg;
    if !converged {
        log::debug!(
            "transit to {target_deg:.6}°: not converged after {} steps, residual {residual:.3e}°",
            config.max_iterations
        );
    }
    Some(Crossing {
        instant: Instant::from_jd(jd),
        residual_deg: residual,
        iterations: config.max_iterations,
        converged,
    })
}
