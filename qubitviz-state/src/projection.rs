//! Pure projections from a state to displayable quantities

use crate::bloch::BlochAngles;
use crate::QubitState;
use qubitviz_core::{ComplexExt, DEFAULT_PRECISION};

/// Measurement probabilities `(|α|², |β|²)`
///
/// The pair sums to 1 for a normalized state; no renormalization happens here.
pub fn probabilities(state: &QubitState) -> (f64, f64) {
    (state.alpha().norm_sqr(), state.beta().norm_sqr())
}

/// Bloch-sphere angles of a state
///
/// θ = 2·atan2(|β|, |α|) lies in [0, π]. φ = arg(β) − arg(α), reduced into
/// (-π, π]. A zero amplitude has phase 0, so both poles report φ = 0.
pub fn bloch_angles(state: &QubitState) -> BlochAngles {
    let alpha = state.alpha();
    let beta = state.beta();

    let theta = 2.0 * beta.norm().atan2(alpha.norm());
    let phi = beta.argument() - alpha.argument();
    BlochAngles::new(theta, phi)
}

/// `"[<α> <β>]"` using the default three-digit precision
pub fn show_state(state: &QubitState) -> String {
    show_state_with(state, DEFAULT_PRECISION)
}

/// `"[<α> <β>]"` with `precision` fractional digits per component
pub fn show_state_with(state: &QubitState, precision: usize) -> String {
    format!(
        "[{} {}]",
        state.alpha().display_with(precision),
        state.beta().display_with(precision)
    )
}

/// `"[θ φ]"` using the default three-digit precision
pub fn show_bloch(state: &QubitState) -> String {
    bloch_angles(state).display_with(DEFAULT_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use qubitviz_core::c64;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    #[test]
    fn test_basis_probabilities() {
        assert_eq!(probabilities(&QubitState::zero()), (1.0, 0.0));
        assert_eq!(probabilities(&QubitState::one()), (0.0, 1.0));
    }

    #[test]
    fn test_unnormalized_probabilities_are_raw() {
        let s = QubitState::new(c64(1.0, 0.0), c64(1.0, 0.0));
        assert_eq!(probabilities(&s), (1.0, 1.0));

        let (p0, p1) = probabilities(&s.normalized().unwrap());
        assert_abs_diff_eq!(p0, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p1, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_pole_angles() {
        let north = bloch_angles(&QubitState::zero());
        assert_abs_diff_eq!(north.theta, 0.0);
        assert_abs_diff_eq!(north.phi, 0.0);

        let south = bloch_angles(&QubitState::one());
        assert_abs_diff_eq!(south.theta, PI, epsilon = 1e-12);
        assert_abs_diff_eq!(south.phi, 0.0);
    }

    #[test]
    fn test_relative_phase() {
        // (|0⟩ + i|1⟩)/√2
        let s = QubitState::new(c64(FRAC_1_SQRT_2, 0.0), c64(0.0, FRAC_1_SQRT_2));
        let angles = bloch_angles(&s);
        assert_abs_diff_eq!(angles.theta, PI / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(angles.phi, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_relative_phase_is_reduced() {
        // arg(β) − arg(α) = 0.9π − (−0.9π) = 1.8π, reported as −0.2π
        let alpha = c64((-0.9 * PI).cos(), (-0.9 * PI).sin()).scale(FRAC_1_SQRT_2);
        let beta = c64((0.9 * PI).cos(), (0.9 * PI).sin()).scale(FRAC_1_SQRT_2);
        let angles = bloch_angles(&QubitState::new(alpha, beta));
        assert_abs_diff_eq!(angles.phi, -0.2 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_global_phase_does_not_move_the_point() {
        let s = QubitState::new(c64(0.6, 0.0), c64(0.0, 0.8));
        let rotated = QubitState::new(s.alpha() * c64(0.0, 1.0), s.beta() * c64(0.0, 1.0));
        let a = bloch_angles(&s);
        let b = bloch_angles(&rotated);
        assert_abs_diff_eq!(a.theta, b.theta, epsilon = 1e-12);
        assert_abs_diff_eq!(a.phi, b.phi, epsilon = 1e-12);
    }

    #[test]
    fn test_show_state() {
        assert_eq!(show_state(&QubitState::zero()), "[1.000+0.000i 0.000+0.000i]");
        let s = QubitState::new(c64(FRAC_1_SQRT_2, 0.0), c64(-FRAC_1_SQRT_2, 0.0));
        assert_eq!(show_state(&s), "[0.707+0.000i -0.707+0.000i]");
        assert_eq!(show_state_with(&s, 1), "[0.7+0.0i -0.7+0.0i]");
        assert_eq!(s.to_string(), show_state(&s));
    }

    #[test]
    fn test_show_bloch() {
        assert_eq!(show_bloch(&QubitState::zero()), "[0.000 0.000]");
        assert_eq!(show_bloch(&QubitState::one()), "[3.142 0.000]");
    }
}
