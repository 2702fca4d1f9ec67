//! Standard gate types backed by the constant matrices

use crate::matrices;
use num_complex::Complex64;
use qubitviz_core::{CMatrix, Gate};

/// Helper macro to implement the matrix() accessor for fixed gates
macro_rules! impl_matrix_method {
    ($gate_type:ty, $matrix_fn:expr, $size:expr) => {
        impl $gate_type {
            /// Returns the pre-computed gate matrix
            #[inline]
            pub const fn matrix() -> &'static [[Complex64; $size]; $size] {
                $matrix_fn
            }
        }
    };
}

// ============================================================================
// Single-Qubit Gates
// ============================================================================

/// Identity gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity;

impl Gate for Identity {
    fn name(&self) -> &str {
        "I"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> CMatrix {
        CMatrix::from_array(Self::matrix())
    }
}

impl_matrix_method!(Identity, &matrices::IDENTITY, 2);

/// Hadamard gate
///
/// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hadamard;

impl Gate for Hadamard {
    fn name(&self) -> &str {
        "H"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> CMatrix {
        CMatrix::from_array(Self::matrix())
    }
}

impl_matrix_method!(Hadamard, &matrices::HADAMARD, 2);

/// Pauli-X gate (NOT gate)
///
/// Bit flip: X|0⟩ = |1⟩, X|1⟩ = |0⟩
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauliX;

impl Gate for PauliX {
    fn name(&self) -> &str {
        "X"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> CMatrix {
        CMatrix::from_array(Self::matrix())
    }
}

impl_matrix_method!(PauliX, &matrices::PAULI_X, 2);

/// Pauli-Y gate
///
/// Combined bit and phase flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauliY;

impl Gate for PauliY {
    fn name(&self) -> &str {
        "Y"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> CMatrix {
        CMatrix::from_array(Self::matrix())
    }
}

impl_matrix_method!(PauliY, &matrices::PAULI_Y, 2);

/// Pauli-Z gate
///
/// Phase flip: Z|0⟩ = |0⟩, Z|1⟩ = -|1⟩
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauliZ;

impl Gate for PauliZ {
    fn name(&self) -> &str {
        "Z"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> CMatrix {
        CMatrix::from_array(Self::matrix())
    }
}

impl_matrix_method!(PauliZ, &matrices::PAULI_Z, 2);

/// Phase rotation gate Rφ
///
/// Leaves |0⟩ alone and multiplies |1⟩ by e^(iφ). Built on demand for each
/// angle; the angle is taken in radians with no range restriction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseRotation {
    angle: f64,
}

impl PhaseRotation {
    /// Create a phase rotation by `angle` radians
    pub fn new(angle: f64) -> Self {
        Self { angle }
    }

    /// Get the rotation angle in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

impl Gate for PhaseRotation {
    fn name(&self) -> &str {
        "Rφ"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn matrix(&self) -> CMatrix {
        CMatrix::from_array(&matrices::phase(self.angle))
    }

    fn description(&self) -> String {
        format!("1-qubit gate 'Rφ' (φ = {:.4})", self.angle)
    }
}

// ============================================================================
// Two-Qubit Gates
// ============================================================================

/// Controlled-NOT gate
///
/// Flips the second qubit when the first is |1⟩. Defined for composing
/// two-qubit operators; the single-qubit visualizer never applies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CNot;

impl Gate for CNot {
    fn name(&self) -> &str {
        "CNOT"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> CMatrix {
        CMatrix::from_array(Self::matrix())
    }
}

impl_matrix_method!(CNot, &matrices::CNOT, 4);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_arity() {
        assert_eq!(Identity.name(), "I");
        assert_eq!(Hadamard.name(), "H");
        assert_eq!(PhaseRotation::new(0.3).name(), "Rφ");
        assert_eq!(CNot.num_qubits(), 2);
        assert_eq!(CNot.dimension(), 4);
        assert_eq!(PauliY.dimension(), 2);
    }

    #[test]
    fn test_matrix_shapes() {
        assert_eq!(Gate::matrix(&Hadamard).shape(), (2, 2));
        assert_eq!(Gate::matrix(&CNot).shape(), (4, 4));
        assert_eq!(Gate::matrix(&PhaseRotation::new(1.0)).shape(), (2, 2));
    }

    #[test]
    fn test_phase_rotation_description() {
        let gate = PhaseRotation::new(0.5);
        assert_eq!(gate.angle(), 0.5);
        assert!(gate.description().contains("0.5000"));
    }
}
