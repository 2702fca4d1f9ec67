//! Complex scalar helpers
//!
//! The scalar type is [`num_complex::Complex64`]; its operators already cover
//! addition, subtraction, multiplication and conjugation. This module adds the
//! pieces the visualizer needs on top: division that reports a zero divisor
//! instead of producing NaN, a phase convention for the zero value, and the
//! fixed-precision text form shown to the user.

use crate::{MathError, Result};
use num_complex::Complex64;

/// Fractional digits used by [`ComplexExt::display`]
pub const DEFAULT_PRECISION: usize = 3;

/// Shorthand constructor for a complex number
#[inline]
pub const fn c64(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

/// Unit complex number e^(i·angle) = cos(angle) + i·sin(angle)
#[inline]
pub fn phase_factor(angle: f64) -> Complex64 {
    Complex64::new(angle.cos(), angle.sin())
}

/// Extension methods for [`Complex64`]
pub trait ComplexExt: Sized {
    /// Divide `self` by `rhs`
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] when `rhs` is `0 + 0i`.
    fn try_div(self, rhs: Self) -> Result<Self>;

    /// Phase angle atan2(im, re) in (-π, π]
    ///
    /// The zero value (including negative zeros) has phase 0.
    fn argument(&self) -> f64;

    /// Whether both components are exactly zero
    fn is_zero(&self) -> bool;

    /// Text form `"<re>±<|im|>i"` with [`DEFAULT_PRECISION`] digits
    fn display(&self) -> String {
        self.display_with(DEFAULT_PRECISION)
    }

    /// Text form `"<re>±<|im|>i"` with `precision` fractional digits
    fn display_with(&self, precision: usize) -> String;
}

impl ComplexExt for Complex64 {
    fn try_div(self, rhs: Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(MathError::division_by_zero("complex division"));
        }

        // Scale the divisor to unit size so |rhs|² cannot over- or underflow
        let scale = rhs.re.abs().max(rhs.im.abs());
        let unit = rhs.unscale(scale);
        let numer = self * unit.conj();
        Ok(numer.unscale(scale * unit.norm_sqr()))
    }

    fn argument(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        self.im.atan2(self.re)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    fn display_with(&self, precision: usize) -> String {
        let sign = if self.im >= 0.0 { '+' } else { '-' };
        // -0.0 would otherwise print as "-0.000"
        let re = if self.re == 0.0 { 0.0 } else { self.re };

        format!("{:.*}{}{:.*}i", precision, re, sign, precision, self.im.abs())
    }
}
