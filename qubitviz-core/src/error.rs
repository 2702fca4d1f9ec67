//! Error types for complex and matrix arithmetic

use thiserror::Error;

/// Errors raised by the linear-algebra primitives
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MathError {
    /// Operand shapes are incompatible for the requested operation
    #[error("Shape mismatch in {op}: {left:?} vs {right:?}")]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// Division by a zero complex number or normalization of a zero vector
    #[error("Division by zero in {context}")]
    DivisionByZero { context: &'static str },

    /// An infinite or NaN value reached an operation that needs finite input
    #[error("Non-finite value in {context}")]
    NonFinite { context: &'static str },

    /// Entry count does not match the declared dimensions
    #[error("Invalid shape {rows}x{cols} for {len} entries")]
    InvalidShape { rows: usize, cols: usize, len: usize },
}

impl MathError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(op: &'static str, left: (usize, usize), right: (usize, usize)) -> Self {
        Self::ShapeMismatch { op, left, right }
    }

    /// Create a division by zero error
    pub fn division_by_zero(context: &'static str) -> Self {
        Self::DivisionByZero { context }
    }

    /// Create a non-finite value error
    pub fn non_finite(context: &'static str) -> Self {
        Self::NonFinite { context }
    }
}
