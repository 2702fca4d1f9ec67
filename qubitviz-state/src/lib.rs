//! Single-qubit state, Bloch-sphere projection and visualizer session
//!
//! This crate turns amplitudes into the values a visualizer displays:
//!
//! - [`QubitState`]: the `[α, β]` column vector, replaced on every gate
//! - [`projection`]: probabilities, Bloch angles and text forms
//! - [`BlochAngles`] / [`BlochVector`]: sphere geometry for the pointer
//! - [`DisplaySnapshot`]: amplitude bars, probabilities and pointer in one value
//! - [`Visualizer`]: the apply → normalize → display loop driven by user input
//! - [`VisualizerConfig`]: JSON-loadable session settings
//!
//! # Example
//!
//! ```
//! use qubitviz_gates::GateKind;
//! use qubitviz_state::Visualizer;
//!
//! let mut viz = Visualizer::default();
//! viz.apply(GateKind::Hadamard).unwrap();
//! viz.apply(GateKind::PauliZ).unwrap();
//!
//! let snap = viz.snapshot();
//! assert_eq!(snap.state_text, "[0.707+0.000i -0.707+0.000i]");
//! ```

pub mod bloch;
pub mod config;
pub mod error;
pub mod projection;
pub mod qubit;
pub mod session;
pub mod snapshot;

pub use bloch::{BlochAngles, BlochVector};
pub use config::VisualizerConfig;
pub use error::{Result, StateError};
pub use projection::{bloch_angles, probabilities, show_bloch, show_state};
pub use qubit::QubitState;
pub use session::Visualizer;
pub use snapshot::{AmplitudeBar, DisplaySnapshot};
