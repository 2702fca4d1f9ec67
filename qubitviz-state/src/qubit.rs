//! Single-qubit state vector

use crate::bloch::BlochAngles;
use crate::error::{Result, StateError};
use crate::projection;
use qubitviz_core::{c64, CMatrix, Complex64, Gate};

/// Amplitudes `[α, β]` of a single qubit, stored as a 2×1 column vector
///
/// A state is a value: applying a gate returns a new state and leaves the
/// original untouched. Normalization (`|α|² + |β|² = 1`) is established by
/// [`QubitState::apply`] and [`QubitState::normalized`]; plain construction
/// keeps the amplitudes exactly as given.
///
/// # Example
///
/// ```
/// use qubitviz_gates::Hadamard;
/// use qubitviz_state::QubitState;
///
/// let plus = QubitState::zero().apply(&Hadamard).unwrap();
/// let (p0, p1) = plus.probabilities();
/// assert!((p0 - 0.5).abs() < 1e-12 && (p1 - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QubitState {
    vector: CMatrix,
}

impl QubitState {
    /// Create a state from the two amplitudes
    pub fn new(alpha: Complex64, beta: Complex64) -> Self {
        Self {
            vector: CMatrix::column(&[alpha, beta]),
        }
    }

    /// The |0⟩ state `[1, 0]`
    pub fn zero() -> Self {
        Self::new(c64(1.0, 0.0), c64(0.0, 0.0))
    }

    /// The |1⟩ state `[0, 1]`
    pub fn one() -> Self {
        Self::new(c64(0.0, 0.0), c64(1.0, 0.0))
    }

    /// Wrap an existing 2×1 matrix
    ///
    /// # Errors
    /// Returns [`StateError::InvalidDimension`] for any other shape.
    pub fn from_matrix(vector: CMatrix) -> Result<Self> {
        if vector.shape() != (2, 1) {
            return Err(StateError::InvalidDimension {
                expected: (2, 1),
                actual: vector.shape(),
            });
        }
        Ok(Self { vector })
    }

    /// Amplitude of |0⟩
    #[inline]
    pub fn alpha(&self) -> Complex64 {
        self.vector[(0, 0)]
    }

    /// Amplitude of |1⟩
    #[inline]
    pub fn beta(&self) -> Complex64 {
        self.vector[(1, 0)]
    }

    /// Both amplitudes in basis order
    #[inline]
    pub fn amplitudes(&self) -> [Complex64; 2] {
        [self.alpha(), self.beta()]
    }

    /// The underlying column vector
    #[inline]
    pub fn as_matrix(&self) -> &CMatrix {
        &self.vector
    }

    /// Euclidean norm of the amplitude vector
    pub fn norm(&self) -> f64 {
        self.vector.norm()
    }

    /// Whether `|α|² + |β|²` is within `tolerance` of 1
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.vector.norm_sqr() - 1.0).abs() <= tolerance
    }

    /// Rescale to unit norm
    ///
    /// # Errors
    /// Returns a division-by-zero error for the zero vector.
    pub fn normalized(&self) -> Result<Self> {
        Ok(Self {
            vector: self.vector.normalized()?,
        })
    }

    /// Apply a single-qubit gate: multiply, then renormalize
    ///
    /// # Errors
    /// Fails with a shape mismatch for gates on more than one qubit and with
    /// division by zero if the product is the zero vector.
    pub fn apply(&self, gate: &dyn Gate) -> Result<Self> {
        let product = gate.matrix().try_mul(&self.vector)?;
        Self::from_matrix(product.normalized()?)
    }

    /// Measurement probabilities `(|α|², |β|²)`
    pub fn probabilities(&self) -> (f64, f64) {
        projection::probabilities(self)
    }

    /// Bloch-sphere angles of the state
    pub fn bloch_angles(&self) -> BlochAngles {
        projection::bloch_angles(self)
    }
}

impl Default for QubitState {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for QubitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&projection::show_state(self))
    }
}
