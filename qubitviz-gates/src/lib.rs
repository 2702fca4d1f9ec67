//! Quantum gate library for qubitviz
//!
//! This crate provides the fixed catalog of gates the visualizer works with:
//!
//! - **Constant matrices** ([`matrices`]): I, H, X, Y, Z and CNOT as
//!   `[[Complex64; N]; N]` arrays, plus the phase rotation generator
//! - **Gate types** ([`standard`]): unit structs implementing
//!   [`Gate`](qubitviz_core::Gate), and the parameterized [`PhaseRotation`]
//! - **Gate library** ([`library`]): the shared, read-only name → gate map and
//!   the [`GateKind`] selection used by the presentation layer
//!
//! # Example
//!
//! ```
//! use qubitviz_core::{c64, CMatrix, Gate};
//! use qubitviz_gates::{GateKind, PauliX};
//!
//! let ket0 = CMatrix::column(&[c64(1.0, 0.0), c64(0.0, 0.0)]);
//! let ket1 = Gate::matrix(&PauliX).try_mul(&ket0).unwrap();
//! assert_eq!(ket1[(1, 0)], c64(1.0, 0.0));
//!
//! let kind: GateKind = "phase:0.25".parse().unwrap();
//! assert_eq!(kind, GateKind::Phase(0.25));
//! ```

pub mod error;
pub mod library;
pub mod matrices;
pub mod standard;

// Re-export commonly used items
pub use error::GateError;
pub use library::{GateKind, GateLibrary};
pub use standard::*;
