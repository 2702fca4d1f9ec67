//! Display snapshot handed to the presentation layer after every update

use crate::bloch::BlochAngles;
use crate::error::{Result, StateError};
use crate::projection;
use crate::QubitState;
use qubitviz_core::{Complex64, ComplexExt};
use serde::{Deserialize, Serialize};

/// Visual encoding of one amplitude as a bar
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AmplitudeBar {
    /// Bar height in percent, `|a|·100`
    pub height_percent: f64,
    /// Bar hue in degrees, `arg(a)·180/π`, in (-180, 180]
    pub hue_degrees: f64,
}

impl AmplitudeBar {
    /// Encode an amplitude
    pub fn from_amplitude(amplitude: Complex64) -> Self {
        Self {
            height_percent: amplitude.norm() * 100.0,
            hue_degrees: amplitude.argument().to_degrees(),
        }
    }
}

/// Everything the presentation layer shows for a state
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplaySnapshot {
    /// `"[<α> <β>]"`
    pub state_text: String,
    /// Bars for α and β
    pub amplitudes: [AmplitudeBar; 2],
    /// Probability bar heights in percent
    pub probability_percent: [f64; 2],
    /// Bloch angles of the state
    pub bloch: BlochAngles,
    /// `"[θ φ]"`
    pub bloch_text: String,
    /// Pointer orientation in the renderer's y-up frame
    pub pointer: [f64; 3],
    /// Whether the state is normalized within the configured tolerance
    pub normalized: bool,
}

impl DisplaySnapshot {
    /// Project `state` into displayable values
    pub fn capture(state: &QubitState, precision: usize, tolerance: f64) -> Self {
        let (p0, p1) = projection::probabilities(state);
        let bloch = projection::bloch_angles(state);

        Self {
            state_text: projection::show_state_with(state, precision),
            amplitudes: [
                AmplitudeBar::from_amplitude(state.alpha()),
                AmplitudeBar::from_amplitude(state.beta()),
            ],
            probability_percent: [p0 * 100.0, p1 * 100.0],
            bloch,
            bloch_text: bloch.display_with(precision),
            pointer: bloch.pointer(),
            normalized: state.is_normalized(tolerance),
        }
    }

    /// Serialize as JSON for a browser or other frontend
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| StateError::Serialization(e.to_string()))
    }
}
