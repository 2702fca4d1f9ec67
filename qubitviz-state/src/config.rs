//! Visualizer configuration
//!
//! Loaded from JSON; every field is optional and falls back to the defaults
//! below.
//!
//! ```json
//! {
//!   "precision": 3,
//!   "initial_state": [[1.0, 0.0], [0.0, 0.0]],
//!   "tolerance": 1e-9
//! }
//! ```

use crate::error::{Result, StateError};
use crate::QubitState;
use qubitviz_core::c64;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Largest accepted display precision
pub const MAX_PRECISION: usize = 12;

/// Settings for a [`Visualizer`](crate::Visualizer) session
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
    /// Fractional digits in state and Bloch text
    pub precision: usize,

    /// Starting amplitudes as `[[re, im], [re, im]]`; normalized on load
    pub initial_state: [[f64; 2]; 2],

    /// Allowed deviation of `|α|² + |β|²` from 1 before a snapshot is
    /// flagged as not normalized
    pub tolerance: f64,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            initial_state: [[1.0, 0.0], [0.0, 0.0]],
            tolerance: 1e-9,
        }
    }
}

impl VisualizerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_initial_state(mut self, alpha: [f64; 2], beta: [f64; 2]) -> Self {
        self.initial_state = [alpha, beta];
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| StateError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| StateError::Config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_json_str(&text)?;
        debug!(path = %path.display(), precision = config.precision, "loaded visualizer config");
        Ok(config)
    }

    /// Check ranges and that the initial state can be normalized
    pub fn validate(&self) -> Result<()> {
        if self.precision > MAX_PRECISION {
            return Err(StateError::Config(format!(
                "precision {} exceeds maximum {}",
                self.precision, MAX_PRECISION
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(StateError::Config(format!("invalid tolerance {}", self.tolerance)));
        }
        if self.initial_state.iter().flatten().any(|v| !v.is_finite()) {
            return Err(StateError::Config("initial state must be finite".to_string()));
        }
        self.initial_state().map(|_| ())
    }

    /// The configured starting state, normalized
    pub fn initial_state(&self) -> Result<QubitState> {
        let [[a_re, a_im], [b_re, b_im]] = self.initial_state;
        QubitState::new(c64(a_re, a_im), c64(b_re, b_im)).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use qubitviz_core::MathError;
    use std::io::Write;

    #[test]
    fn test_default_is_ket0() {
        let config = VisualizerConfig::default();
        assert_eq!(config.precision, 3);
        assert_eq!(config.initial_state().unwrap(), QubitState::zero());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = VisualizerConfig::from_json_str(r#"{ "precision": 5 }"#).unwrap();
        assert_eq!(config.precision, 5);
        assert_eq!(config.tolerance, 1e-9);
    }

    #[test]
    fn test_initial_state_is_normalized() {
        let config = VisualizerConfig::new().with_initial_state([1.0, 0.0], [1.0, 0.0]);
        let state = config.initial_state().unwrap();
        assert_abs_diff_eq!(state.alpha().re, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-12);
        assert!(state.is_normalized(1e-12));
    }

    #[test]
    fn test_rejects_zero_initial_state() {
        let err = VisualizerConfig::from_json_str(r#"{ "initial_state": [[0, 0], [0, 0]] }"#)
            .unwrap_err();
        assert!(matches!(err, StateError::Math(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            VisualizerConfig::from_json_str(r#"{ "precision": 40 }"#),
            Err(StateError::Config(_))
        ));
        assert!(matches!(
            VisualizerConfig::from_json_str(r#"{ "tolerance": -1.0 }"#),
            Err(StateError::Config(_))
        ));
        assert!(matches!(
            VisualizerConfig::from_json_str(r#"{ "colour": "blue" }"#),
            Err(StateError::Config(_))
        ));
        assert!(matches!(
            VisualizerConfig::from_json_str("not json"),
            Err(StateError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "precision": 4, "initial_state": [[0, 0], [0, 1]] }}"#).unwrap();

        let config = VisualizerConfig::load(file.path()).unwrap();
        assert_eq!(config.precision, 4);
        assert_eq!(config.initial_state().unwrap(), QubitState::one());
    }

    #[test]
    fn test_load_missing_file() {
        let err = VisualizerConfig::load("/nonexistent/qubitviz.json").unwrap_err();
        assert!(matches!(err, StateError::Config(msg) if msg.contains("qubitviz.json")));
    }
}
