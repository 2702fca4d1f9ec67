//! Gate trait shared by the gate library and the state crate

use crate::CMatrix;
use std::fmt;

/// A unitary operation with a fixed square matrix
///
/// Gates are immutable and stateless; parameterized gates hold their
/// parameters by value. Unitarity (U†U = I) is a documented precondition of
/// every implementation and is not checked when the gate is applied.
///
/// # Example
/// ```
/// use qubitviz_core::{gate::Gate, CMatrix};
///
/// #[derive(Debug)]
/// struct Noop;
///
/// impl Gate for Noop {
///     fn name(&self) -> &str { "I" }
///     fn num_qubits(&self) -> usize { 1 }
///     fn matrix(&self) -> CMatrix { CMatrix::identity(2) }
/// }
///
/// assert_eq!(Noop.dimension(), 2);
/// ```
pub trait Gate: Send + Sync + fmt::Debug {
    /// The name of the gate (e.g., "H", "CNOT", "Rφ")
    fn name(&self) -> &str;

    /// Number of qubits this gate acts on
    fn num_qubits(&self) -> usize;

    /// Whether this gate is hermitian (its own inverse)
    fn is_hermitian(&self) -> bool {
        false
    }

    /// The `2^n × 2^n` unitary matrix of the gate
    fn matrix(&self) -> CMatrix;

    /// Side length of the gate matrix
    fn dimension(&self) -> usize {
        1 << self.num_qubits()
    }

    /// Get a description of this gate
    fn description(&self) -> String {
        format!("{}-qubit gate '{}'", self.num_qubits(), self.name())
    }
}
