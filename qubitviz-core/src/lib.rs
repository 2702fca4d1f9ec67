//! Core numeric types for the qubitviz single-qubit visualizer
//!
//! This crate provides the small linear-algebra engine everything else is
//! built on:
//! - [`Complex64`]: complex scalar, with checked division and display helpers
//!   from [`ComplexExt`]
//! - [`CMatrix`]: dense row-major complex matrix (column vectors are `n × 1`)
//! - [`MathError`]: shape and division failures
//! - [`Gate`]: trait for named unitary operators
//!
//! # Example
//! ```
//! use qubitviz_core::{c64, CMatrix};
//!
//! let x = CMatrix::from_rows(&[
//!     vec![c64(0.0, 0.0), c64(1.0, 0.0)],
//!     vec![c64(1.0, 0.0), c64(0.0, 0.0)],
//! ])
//! .unwrap();
//! let ket0 = CMatrix::column(&[c64(1.0, 0.0), c64(0.0, 0.0)]);
//!
//! let flipped = x.try_mul(&ket0).unwrap();
//! assert_eq!(flipped[(1, 0)], c64(1.0, 0.0));
//! ```

pub mod complex;
pub mod error;
pub mod gate;
pub mod matrix;

// Re-exports for convenience
pub use complex::{c64, phase_factor, ComplexExt, DEFAULT_PRECISION};
pub use error::MathError;
pub use gate::Gate;
pub use matrix::CMatrix;
pub use num_complex::Complex64;

/// Type alias for results in qubitviz-core
pub type Result<T> = std::result::Result<T, MathError>;
