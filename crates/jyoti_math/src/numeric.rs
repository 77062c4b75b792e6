//! Finite differences and polynomial evaluation.

use crate::angle::normalize_pm180;

/// Rate of change of an angular function, in degrees per unit of `t`.
///
/// Evaluates `f(t + step)` and compares it with the already known
/// `value_at_t`. The difference is folded into (-180, 180] so that a
/// crossing of 0/360 between the two samples does not produce a spurious
/// jump. `step` may be negative for a backward difference.
pub fn angular_rate<F>(f: F, t: f64, value_at_t: f64, step: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    normalize_pm180(f(t + step) - value_at_t) / step
}

/// Evaluate `c[0] + c[1]·x + c[2]·x² + ...` with Horner's scheme.
pub fn polynomial(x: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_of_linear_function() {
        let f = |t: f64| 13.2 * t;
        let r = angular_rate(f, 1.0, f(1.0), 0.001);
        assert!((r - 13.2).abs() < 1e-9, "rate = {r}");
    }

    #[test]
    fn backward_step_matches_forward_for_linear() {
        let f = |t: f64| 0.9856 * t + 10.0;
        let fwd = angular_rate(f, 5.0, f(5.0), 0.1);
        let bwd = angular_rate(f, 5.0, f(5.0), -0.1);
        assert!((fwd - bwd).abs() < 1e-9);
    }

    #[test]
    fn rate_across_wrap() {
        // 359.95 -> 0.05 over 0.1 day is +1 deg/day, not -3599
        let f = |t: f64| crate::normalize_360(359.95 + t);
        let r = angular_rate(f, 0.0, f(0.0), 0.1);
        assert!((r - 1.0).abs() < 1e-9, "rate = {r}");
    }

    #[test]
    fn negative_rate() {
        let f = |t: f64| crate::normalize_360(10.0 - 0.05 * t);
        let r = angular_rate(f, 3.0, f(3.0), -0.1);
        assert!((r + 0.05).abs() < 1e-9, "rate = {r}");
    }

    #[test]
    fn horner_quadratic() {
        assert!((polynomial(2.0, &[1.0, 2.0, 3.0]) - 17.0).abs() < 1e-12);
        assert_eq!(polynomial(5.0, &[]), 0.0);
    }
}
