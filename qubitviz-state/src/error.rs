//! Error types for state operations

use qubitviz_core::MathError;
use qubitviz_gates::GateError;
use thiserror::Error;

/// Errors that can occur while building, evolving or displaying a state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// Underlying matrix arithmetic failed (shape mismatch, zero vector)
    #[error(transparent)]
    Math(#[from] MathError),

    /// Gate selection could not be resolved
    #[error(transparent)]
    Gate(#[from] GateError),

    /// Matrix does not have the shape of a single-qubit state
    #[error("Invalid state shape {actual:?}, expected {expected:?}")]
    InvalidDimension {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Configuration could not be read or is invalid
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Snapshot could not be serialized
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Result type for state operations
pub type Result<T> = std::result::Result<T, StateError>;
