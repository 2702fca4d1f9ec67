//! Bloch-sphere geometry for single-qubit states
//!
//! A pure single-qubit state can be written as
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! up to a global phase, where θ ∈ [0, π] is the polar angle and φ the
//! relative phase. [`BlochAngles`] carries that pair; [`BlochVector`] is the
//! same point in Cartesian form built from Pauli expectation values.
//!
//! Two coordinate frames are in play. The physics frame has |0⟩ on +z. The
//! renderer frame used by [`BlochAngles::pointer`] is y-up, so |0⟩ points
//! along +y there: `(sin θ·sin φ, cos θ, cos φ·sin θ)`.
//!
//! # Example
//!
//! ```
//! use qubitviz_state::{BlochVector, QubitState};
//!
//! let bloch = BlochVector::from_state(&QubitState::zero());
//! assert!((bloch.z - 1.0).abs() < 1e-10);
//! ```

use crate::QubitState;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Polar angle and relative phase of a state on the Bloch sphere
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]; 0 is |0⟩, π is |1⟩
    pub theta: f64,
    /// Relative phase φ ∈ (-π, π]
    pub phi: f64,
}

impl BlochAngles {
    /// Create angles, reducing `phi` into (-π, π]
    pub fn new(theta: f64, phi: f64) -> Self {
        Self {
            theta,
            phi: wrap_phase(phi),
        }
    }

    /// Unit-radius pointer in the renderer's y-up frame
    ///
    /// Returns `(sin θ·sin φ, cos θ, cos φ·sin θ)`.
    pub fn pointer(&self) -> [f64; 3] {
        let (sin_t, cos_t) = self.theta.sin_cos();
        let (sin_p, cos_p) = self.phi.sin_cos();
        [sin_t * sin_p, cos_t, cos_p * sin_t]
    }

    /// Formatted `"[θ φ]"` with `precision` fractional digits
    pub fn display_with(&self, precision: usize) -> String {
        format!("[{:.*} {:.*}]", precision, self.theta, precision, self.phi)
    }
}

/// Reduce an angle into (-π, π]
pub(crate) fn wrap_phase(angle: f64) -> f64 {
    let r = angle % TAU;
    if r > PI {
        r - TAU
    } else if r <= -PI {
        r + TAU
    } else {
        r
    }
}

/// A point on the Bloch sphere represented in Cartesian coordinates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BlochVector {
    /// X coordinate (-1 to 1)
    pub x: f64,
    /// Y coordinate (-1 to 1)
    pub y: f64,
    /// Z coordinate (-1 to 1), where +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert a single-qubit state to a Bloch vector
    ///
    /// Uses the Pauli expectation values, so the result is independent of the
    /// global phase:
    /// x = ⟨σ_x⟩ = 2Re(α*β), y = ⟨σ_y⟩ = 2Im(α*β), z = ⟨σ_z⟩ = |α|² - |β|²
    pub fn from_state(state: &QubitState) -> Self {
        let alpha = state.alpha();
        let beta = state.beta();
        let alpha_conj_beta = alpha.conj() * beta;

        Self {
            x: 2.0 * alpha_conj_beta.re,
            y: 2.0 * alpha_conj_beta.im,
            z: alpha.norm_sqr() - beta.norm_sqr(),
        }
    }

    /// Point on the unit sphere for the given angles
    pub fn from_angles(angles: &BlochAngles) -> Self {
        let (sin_t, cos_t) = angles.theta.sin_cos();
        let (sin_p, cos_p) = angles.phi.sin_cos();
        Self {
            x: sin_t * cos_p,
            y: sin_t * sin_p,
            z: cos_t,
        }
    }

    /// Convert Bloch vector to spherical coordinates
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        // Handle near-zero vector
        if r < 1e-10 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.z / r).clamp(-1.0, 1.0).acos();
        BlochAngles::new(theta, self.y.atan2(self.x))
    }

    /// Get the magnitude of the Bloch vector
    ///
    /// For pure states, this should be 1.0
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Check if this represents a pure state (magnitude ≈ 1.0)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Get a description of the state
    pub fn describe(&self) -> String {
        let angles = self.to_angles();

        let mut desc = String::new();
        desc.push_str(&format!("Bloch Vector: ({:.4}, {:.4}, {:.4})\n", self.x, self.y, self.z));
        desc.push_str(&format!("Angles: θ={:.4}, φ={:.4}\n", angles.theta, angles.phi));

        // Identify special states
        if (self.z - 1.0).abs() < 0.01 {
            desc.push_str("State: |0⟩ (north pole)\n");
        } else if (self.z + 1.0).abs() < 0.01 {
            desc.push_str("State: |1⟩ (south pole)\n");
        } else if (self.x - 1.0).abs() < 0.01 && self.z.abs() < 0.01 {
            desc.push_str("State: |+⟩\n");
        } else if (self.x + 1.0).abs() < 0.01 && self.z.abs() < 0.01 {
            desc.push_str("State: |−⟩\n");
        } else if (self.y - 1.0).abs() < 0.01 && self.z.abs() < 0.01 {
            desc.push_str("State: |+i⟩\n");
        } else if (self.y + 1.0).abs() < 0.01 && self.z.abs() < 0.01 {
            desc.push_str("State: |−i⟩\n");
        }

        desc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use qubitviz_core::c64;

    const SQRT2_INV: f64 = std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_wrap_phase() {
        assert_abs_diff_eq!(wrap_phase(0.0), 0.0);
        assert_abs_diff_eq!(wrap_phase(PI), PI);
        assert_abs_diff_eq!(wrap_phase(-PI), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_phase(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_phase(-1.5 * PI), 0.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_phase(5.0 * TAU + 0.25), 0.25, epsilon = 1e-9);
    }

    #[test]
    fn test_pointer_poles() {
        let north = BlochAngles::new(0.0, 0.0).pointer();
        assert_abs_diff_eq!(north[1], 1.0);
        assert_abs_diff_eq!(north[0], 0.0);
        assert_abs_diff_eq!(north[2], 0.0);

        let south = BlochAngles::new(PI, 0.0).pointer();
        assert_abs_diff_eq!(south[1], -1.0);
        assert_abs_diff_eq!(south[2], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_pointer_is_unit_length() {
        for (theta, phi) in [(0.3, 1.2), (PI / 2.0, -2.0), (2.9, 3.1)] {
            let p = BlochAngles::new(theta, phi).pointer();
            let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert_abs_diff_eq!(len, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_plus_state_vector() {
        let plus = QubitState::new(c64(SQRT2_INV, 0.0), c64(SQRT2_INV, 0.0));
        let bloch = BlochVector::from_state(&plus);
        assert_abs_diff_eq!(bloch.x, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(bloch.z, 0.0, epsilon = 1e-10);
        assert!(bloch.is_pure(1e-10));
        assert!(bloch.describe().contains("|+⟩"));
    }

    #[test]
    fn test_vector_angle_round_trip() {
        let angles = BlochAngles::new(1.1, -0.7);
        let back = BlochVector::from_angles(&angles).to_angles();
        assert_abs_diff_eq!(back.theta, 1.1, epsilon = 1e-12);
        assert_abs_diff_eq!(back.phi, -0.7, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_vector_angles() {
        let angles = BlochVector::new(0.0, 0.0, 0.0).to_angles();
        assert_eq!(angles, BlochAngles { theta: 0.0, phi: 0.0 });
    }

    #[test]
    fn test_display_with() {
        assert_eq!(BlochAngles::new(PI, 0.0).display_with(3), "[3.142 0.000]");
    }
}
