//! Error types for gate lookup and selection

use thiserror::Error;

/// Errors raised when resolving a gate by name or parsing a gate selection
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GateError {
    /// No gate with this name in the library
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// Phase multiplier is not a number, or its angle `multiplier · π` is not finite
    #[error("Invalid phase multiplier '{0}': expected a finite number")]
    InvalidMultiplier(String),
}

/// Result type for gate operations
pub type Result<T> = std::result::Result<T, GateError>;
