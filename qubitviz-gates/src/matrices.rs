//! Constant gate matrices
//!
//! Raw `[[Complex64; N]; N]` arrays for the fixed gates of the library, plus
//! the generator for the parameterized phase rotation. Wrap them with
//! [`CMatrix::from_array`](qubitviz_core::CMatrix::from_array) to do arithmetic.

use num_complex::Complex64;

// Compile-time constant helpers
const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

// Single-qubit gate matrices (2x2)

/// Identity gate matrix
/// I = [[1, 0],
///      [0, 1]]
pub const IDENTITY: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, ONE],
];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [[Complex64; 2]; 2] = [
    [ZERO, ONE],
    [ONE, ZERO],
];

/// Pauli-Y gate matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: [[Complex64; 2]; 2] = [
    [ZERO, NEG_I],
    [I, ZERO],
];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, NEG_ONE],
];

// Two-qubit gate matrices (4x4)

/// CNOT gate matrix (Controlled-NOT, control on the first qubit)
/// CNOT = [[1, 0, 0, 0],
///         [0, 1, 0, 0],
///         [0, 0, 0, 1],
///         [0, 0, 1, 0]]
pub const CNOT: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

// Parameterized gates

/// Phase rotation matrix
/// Rφ(φ) = [[1, 0     ],
///          [0, e^(iφ)]]
///
/// Any finite angle in radians is accepted; no range reduction is applied.
#[inline]
pub fn phase(phi: f64) -> [[Complex64; 2]; 2] {
    [
        [ONE, ZERO],
        [ZERO, Complex64::new(phi.cos(), phi.sin())],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_hadamard_entries() {
        assert_relative_eq!(HADAMARD[0][0].re, 1.0 / 2.0_f64.sqrt());
        assert_eq!(HADAMARD[1][1].re, -HADAMARD[0][0].re);
    }

    #[test]
    fn test_cnot_flat_positions() {
        let flat: Vec<Complex64> = CNOT.iter().flatten().copied().collect();
        for (idx, value) in flat.iter().enumerate() {
            let expected = if [0, 5, 11, 14].contains(&idx) { ONE } else { ZERO };
            assert_eq!(*value, expected, "entry {idx}");
        }
    }

    #[test]
    fn test_phase_matrix() {
        let p = phase(PI);
        assert_eq!(p[0][0], ONE);
        assert_relative_eq!(p[1][1].re, -1.0);
        assert_relative_eq!(p[1][1].im, 0.0, epsilon = 1e-15);

        assert_eq!(phase(0.0), IDENTITY);
    }
}
