//! Dense complex matrices
//!
//! [`CMatrix`] stores `rows × cols` entries in row-major order. A column
//! vector is simply a matrix with one column, so states and operators share
//! every operation here.
//!
//! Fallible operations (`try_add`, `try_mul`, `normalized`, ...) return a
//! [`MathError`] instead of producing garbage on bad shapes, a zero norm or
//! non-finite entries.
//! Every operation returns a fresh matrix; operands are never modified.
//!
//! # Example
//!
//! ```
//! use qubitviz_core::{c64, CMatrix};
//!
//! let v = CMatrix::column(&[c64(1.0, 0.0), c64(1.0, 0.0)]);
//! let n = v.normalized().unwrap();
//! assert!((n.norm() - 1.0).abs() < 1e-12);
//! ```

use crate::complex::{ComplexExt, DEFAULT_PRECISION};
use crate::{MathError, Result};
use num_complex::Complex64;
use std::fmt;
use std::ops::{Index, IndexMut};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Dense complex matrix in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct CMatrix {
    rows: usize,
    cols: usize,
    data: Vec<Complex64>,
}

impl CMatrix {
    /// Create a `rows × cols` matrix filled with zeros
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be positive");
        Self {
            rows,
            cols,
            data: vec![ZERO; rows * cols],
        }
    }

    /// Create the `n × n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = ONE;
        }
        m
    }

    /// Create a matrix from row-major entries
    ///
    /// # Errors
    /// Returns [`MathError::InvalidShape`] if a dimension is zero or
    /// `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<Complex64>) -> Result<Self> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(MathError::InvalidShape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a list of rows
    ///
    /// # Errors
    /// Returns [`MathError::InvalidShape`] for an empty or ragged input.
    pub fn from_rows(rows: &[Vec<Complex64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let data: Vec<Complex64> = rows.iter().flatten().copied().collect();
        if rows.iter().any(|row| row.len() != cols) {
            return Err(MathError::InvalidShape {
                rows: rows.len(),
                cols,
                len: data.len(),
            });
        }
        Self::from_vec(rows.len(), cols, data)
    }

    /// Create a square matrix from a fixed-size array, such as a gate constant
    ///
    /// # Panics
    /// Panics if `N` is zero.
    pub fn from_array<const N: usize>(array: &[[Complex64; N]; N]) -> Self {
        Self::zeros(N, N).with_entries(array.iter().flatten().copied())
    }

    /// Create a column vector (`n × 1`)
    ///
    /// # Panics
    /// Panics if `entries` is empty.
    pub fn column(entries: &[Complex64]) -> Self {
        Self::zeros(entries.len(), 1).with_entries(entries.iter().copied())
    }

    fn with_entries(mut self, entries: impl Iterator<Item = Complex64>) -> Self {
        for (slot, value) in self.data.iter_mut().zip(entries) {
            *slot = value;
        }
        self
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix is square
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether the matrix is a column vector
    #[inline]
    pub fn is_column(&self) -> bool {
        self.cols == 1
    }

    /// Row-major entries
    #[inline]
    pub fn entries(&self) -> &[Complex64] {
        &self.data
    }

    /// Entry at `(row, col)`, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Complex64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    fn map(&self, f: impl Fn(Complex64) -> Complex64) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|&z| f(z)).collect(),
        }
    }

    fn zip_with(
        &self,
        rhs: &Self,
        op: &'static str,
        f: impl Fn(Complex64, Complex64) -> Complex64,
    ) -> Result<Self> {
        if self.shape() != rhs.shape() {
            return Err(MathError::shape_mismatch(op, self.shape(), rhs.shape()));
        }
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().zip(&rhs.data).map(|(&a, &b)| f(a, b)).collect(),
        })
    }

    /// Transpose: entry `(j, i)` of the result is entry `(i, j)` of `self`
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Conjugate transpose (A†)
    pub fn dagger(&self) -> Self {
        self.transpose().map(|z| z.conj())
    }

    /// Sum of squared magnitudes of all entries
    ///
    /// Overflows to `inf` for entries beyond about `1e154`; use [`norm`](Self::norm)
    /// when the magnitude itself is needed.
    pub fn norm_sqr(&self) -> f64 {
        self.data.iter().map(Complex64::norm_sqr).sum()
    }

    /// Frobenius norm (Euclidean norm for vectors)
    ///
    /// Entries are scaled by the largest magnitude before squaring, so the
    /// result is finite whenever it is representable. A NaN entry yields NaN.
    pub fn norm(&self) -> f64 {
        let largest = self.data.iter().map(|z| z.norm()).fold(0.0_f64, |acc, n| {
            if n.is_nan() || n > acc {
                n
            } else {
                acc
            }
        });
        if largest == 0.0 || !largest.is_finite() {
            return largest;
        }
        let scaled: f64 = self.data.iter().map(|z| z.unscale(largest).norm_sqr()).sum();
        largest * scaled.sqrt()
    }

    /// Divide every entry by the norm
    ///
    /// # Errors
    /// Returns [`MathError::DivisionByZero`] for the zero matrix and
    /// [`MathError::NonFinite`] when an entry is infinite or NaN.
    pub fn normalized(&self) -> Result<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(MathError::division_by_zero("normalization of a zero vector"));
        }
        if !norm.is_finite() || self.data.iter().any(|z| !z.is_finite()) {
            return Err(MathError::non_finite("normalization"));
        }
        Ok(self.map(|z| z.unscale(norm)))
    }

    /// Multiply every entry by the complex scalar `s`
    pub fn scale(&self, s: Complex64) -> Self {
        self.map(|z| s * z)
    }

    /// Componentwise sum
    ///
    /// # Errors
    /// Returns [`MathError::ShapeMismatch`] unless both shapes are equal.
    pub fn try_add(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, "add", |a, b| a + b)
    }

    /// Componentwise difference
    ///
    /// # Errors
    /// Returns [`MathError::ShapeMismatch`] unless both shapes are equal.
    pub fn try_sub(&self, rhs: &Self) -> Result<Self> {
        self.zip_with(rhs, "subtract", |a, b| a - b)
    }

    /// Matrix product `self · rhs`
    ///
    /// # Errors
    /// Returns [`MathError::ShapeMismatch`] unless `self.cols() == rhs.rows()`.
    pub fn try_mul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(MathError::shape_mismatch("multiply", self.shape(), rhs.shape()));
        }

        let mut result = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            for j in 0..rhs.cols {
                let mut sum = ZERO;
                for k in 0..self.cols {
                    sum += self[(i, k)] * rhs[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        Ok(result)
    }

    /// Kronecker product `self ⊗ rhs`
    ///
    /// For `self` (m×n) and `rhs` (p×q) the result is (m·p)×(n·q) with
    /// entry `(i·p + k, j·q + l) = self(i, j) · rhs(k, l)`.
    pub fn tensor(&self, rhs: &Self) -> Self {
        let mut result = Self::zeros(self.rows * rhs.rows, self.cols * rhs.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                let a_ij = self[(i, j)];
                for k in 0..rhs.rows {
                    for l in 0..rhs.cols {
                        result[(i * rhs.rows + k, j * rhs.cols + l)] = a_ij * rhs[(k, l)];
                    }
                }
            }
        }
        result
    }

    /// Whether every entry is within `epsilon` of the matching entry of `other`
    ///
    /// Matrices of different shapes are never approximately equal.
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.shape() == other.shape()
            && self.data.iter().zip(&other.data).all(|(a, b)| (a - b).norm() <= epsilon)
    }

    /// Whether `U†U ≈ I` within `epsilon`
    pub fn is_unitary(&self, epsilon: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        match self.dagger().try_mul(self) {
            Ok(product) => product.approx_eq(&Self::identity(self.rows), epsilon),
            Err(_) => false,
        }
    }

    /// Bracket notation with `precision` fractional digits per component
    pub fn display_with(&self, precision: usize) -> String {
        let rows: Vec<String> = (0..self.rows)
            .map(|i| {
                let entries: Vec<String> =
                    (0..self.cols).map(|j| self[(i, j)].display_with(precision)).collect();
                format!("[{}]", entries.join(" "))
            })
            .collect();
        format!("[{}]", rows.join(" "))
    }
}

impl Index<(usize, usize)> for CMatrix {
    type Output = Complex64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        &self.data[self.offset(row, col)]
    }
}

impl IndexMut<(usize, usize)> for CMatrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(row < self.rows && col < self.cols, "index ({row}, {col}) out of bounds");
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

impl fmt::Display for CMatrix {
    /// `[[a b] [c d]]`, each entry formatted like [`ComplexExt::display`]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(DEFAULT_PRECISION))
    }
}
