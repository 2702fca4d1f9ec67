//! Interactive visualizer session
//!
//! [`Visualizer`] owns the current state and runs one complete
//! apply → normalize → snapshot cycle per user action. The state is replaced
//! wholesale on success; a failed action leaves it untouched.

use crate::config::VisualizerConfig;
use crate::error::Result;
use crate::snapshot::DisplaySnapshot;
use crate::QubitState;
use qubitviz_core::Gate;
use qubitviz_gates::GateKind;
use tracing::{debug, trace, warn};

/// Current state plus the gates applied so far
#[derive(Debug, Clone)]
pub struct Visualizer {
    config: VisualizerConfig,
    initial: QubitState,
    state: QubitState,
    history: Vec<GateKind>,
}

impl Visualizer {
    /// Start a session from a validated configuration
    pub fn new(config: VisualizerConfig) -> Result<Self> {
        config.validate()?;
        let initial = config.initial_state()?;
        debug!(state = %initial, "visualizer session started");
        Ok(Self {
            config,
            state: initial.clone(),
            initial,
            history: Vec::new(),
        })
    }

    /// The current state
    pub fn state(&self) -> &QubitState {
        &self.state
    }

    /// Gates applied since the start or the last reset
    ///
    /// Every successful action appends one entry; only [`reset`](Self::reset)
    /// clears it.
    pub fn history(&self) -> &[GateKind] {
        &self.history
    }

    /// The session configuration
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// Apply a selected gate and return the new state
    pub fn apply(&mut self, kind: GateKind) -> Result<&QubitState> {
        let gate = kind.gate().map_err(|err| {
            warn!(gate = %kind, error = %err, "gate selection rejected");
            err
        })?;
        self.apply_gate(gate.as_ref())?;
        self.history.push(kind);
        Ok(&self.state)
    }

    /// Parse a selection such as `"h"` or `"phase:0.5"` and apply it
    pub fn apply_named(&mut self, selection: &str) -> Result<&QubitState> {
        let kind: GateKind = selection.parse()?;
        self.apply(kind)
    }

    fn apply_gate(&mut self, gate: &dyn Gate) -> Result<()> {
        match self.state.apply(gate) {
            Ok(next) => {
                trace!(gate = gate.name(), from = %self.state, to = %next, "gate applied");
                self.state = next;
                Ok(())
            }
            Err(err) => {
                warn!(gate = gate.name(), error = %err, "gate application failed");
                Err(err)
            }
        }
    }

    /// Return to the initial state and clear the history
    pub fn reset(&mut self) {
        debug!(steps = self.history.len(), "visualizer reset");
        self.state = self.initial.clone();
        self.history.clear();
    }

    /// Displayable values for the current state
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot::capture(&self.state, self.config.precision, self.config.tolerance)
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        let config = VisualizerConfig::default();
        Self {
            config,
            initial: QubitState::zero(),
            state: QubitState::zero(),
            history: Vec::new(),
        }
    }
}
