//! Matrices of expressions.
//!
//! A [`Matrix`] is a dense, row-major grid of cells, each holding an [`Expr`] or nothing at all.
//! An unset cell stands for zero in every arithmetic operation, but it is still distinguishable
//! from a cell explicitly set to zero through [`Matrix::get`].
//!
//! ```
//! use algex_math::factor::Factor;
//! use algex_math::matrix::Matrix;
//! use algex_math::terms::Expr;
//!
//! let a = Matrix::identity(2).unwrap();
//! let mut b = Matrix::identity(2).unwrap();
//! b.set(0, 1, Expr::from(Factor::symbol_pow("x", 2))).unwrap();
//!
//! assert_eq!(a.multiply(&b).unwrap().to_string(), "[[1, x^2], [0, 1]]");
//! ```

pub mod error;

use algex_error::Error;
use crate::{factor::Factor, terms::Expr};
use error::{CellCountMismatch, DimensionMismatch, InvalidDimensions, OutOfBounds, ShapeMismatch};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-size matrix of expressions.
///
/// For more information about this type, see the [module-level documentation](self).
///
/// With the `serde` feature, deserialization checks the shape the same way [`Matrix::new`] and
/// [`Matrix::from_cells`] do.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Cells"))]
pub struct Matrix {
    rows: usize,
    cols: usize,

    /// The cells, arranged as `[0, 0], [0, 1], .., [1, 0], ..`.
    data: Vec<Option<Expr>>,
}

/// The unchecked contents of a matrix, as read by a deserializer.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct Cells {
    rows: usize,
    cols: usize,
    data: Vec<Option<Expr>>,
}

#[cfg(feature = "serde")]
impl TryFrom<Cells> for Matrix {
    type Error = Error;

    fn try_from(cells: Cells) -> Result<Self, Self::Error> {
        Matrix::from_cells(cells.rows, cells.cols, cells.data)
    }
}

impl Matrix {
    /// Creates a `rows` x `cols` matrix with every cell unset.
    ///
    /// Returns an [`InvalidDimensions`] error if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::unspanned(InvalidDimensions { rows, cols }));
        }
        Ok(Self::with_shape(rows, cols))
    }

    /// Creates a `rows` x `cols` matrix from its cells, listed row by row. [`None`] leaves a cell
    /// unset.
    ///
    /// Returns an [`InvalidDimensions`] error if either dimension is zero, or a
    /// [`CellCountMismatch`] error if there is not exactly one entry per cell.
    pub fn from_cells(rows: usize, cols: usize, data: Vec<Option<Expr>>) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::unspanned(InvalidDimensions { rows, cols }));
        }
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(Error::unspanned(CellCountMismatch { rows, cols, found: data.len() }));
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix without checking its dimensions.
    fn with_shape(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![None; rows * cols] }
    }

    /// Creates a matrix with the given cells set, and every other cell unset.
    ///
    /// The shape must be valid and every entry in bounds.
    pub(crate) fn from_entries(
        rows: usize,
        cols: usize,
        entries: impl IntoIterator<Item = (usize, usize, Expr)>,
    ) -> Self {
        let mut matrix = Self::with_shape(rows, cols);
        for (row, col, expr) in entries {
            debug_assert!(row < rows && col < cols);
            matrix.data[row * cols + col] = Some(expr);
        }
        matrix
    }

    /// Creates the `n` x `n` identity matrix: the diagonal is one, and every other cell is unset.
    pub fn identity(n: usize) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::unspanned(InvalidDimensions { rows: n, cols: n }));
        }
        Ok(Self::from_entries(n, n, (0..n).map(|i| (i, i, Expr::one()))))
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the index of the given cell in `data`, or an [`OutOfBounds`] error.
    fn index(&self, row: usize, col: usize) -> Result<usize, Error> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::unspanned(OutOfBounds { row, col, rows: self.rows, cols: self.cols }));
        }
        Ok(row * self.cols + col)
    }

    /// Sets the cell at `row`, `col`. Pass [`None`] to unset it.
    pub fn set(&mut self, row: usize, col: usize, expr: impl Into<Option<Expr>>) -> Result<(), Error> {
        let index = self.index(row, col)?;
        self.data[index] = expr.into();
        Ok(())
    }

    /// Returns the cell at `row`, `col`, or [`None`] if the cell is unset.
    pub fn get(&self, row: usize, col: usize) -> Result<Option<&Expr>, Error> {
        let index = self.index(row, col)?;
        Ok(self.data[index].as_ref())
    }

    /// Returns the cell at `row`, `col` without bounds checking against the shape.
    fn cell(&self, row: usize, col: usize) -> Option<&Expr> {
        self.data[row * self.cols + col].as_ref()
    }

    /// Multiplies `self` by `other`, returning a new matrix.
    ///
    /// Each cell of the result is the sum of the products of the corresponding row of `self`
    /// and column of `other`. Pairs with an unset cell contribute nothing, and every cell of the
    /// result is set, even if it is zero.
    ///
    /// Returns a [`DimensionMismatch`] error if `self` does not have as many columns as `other`
    /// has rows.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, Error> {
        if self.cols != other.rows {
            return Err(Error::unspanned(DimensionMismatch {
                lhs_cols: self.cols,
                rhs_rows: other.rows,
            }));
        }

        let mut result = Matrix::with_shape(self.rows, other.cols);
        for r in 0..result.rows {
            for c in 0..result.cols {
                let cell = (0..self.cols)
                    .filter_map(|i| Some(self.cell(r, i)? * other.cell(i, c)?))
                    .sum::<Expr>();
                tracing::trace!(row = r, col = c, terms = cell.len(), "matrix product cell");
                result.data[r * result.cols + c] = Some(cell);
            }
        }
        Ok(result)
    }

    /// Adds the given matrices cell by cell, then adds `extra` to the cell at `[0, 0]`.
    ///
    /// A cell that is unset in every matrix stays unset in the result, unless it is the `[0, 0]`
    /// cell and `extra` is not empty.
    ///
    /// Returns a [`ShapeMismatch`] error if the matrices do not all have the same shape, or an
    /// [`InvalidDimensions`] error if no matrices are given.
    pub fn sum(matrices: &[&Matrix], extra: &[&Expr]) -> Result<Matrix, Error> {
        let Some(first) = matrices.first() else {
            return Err(Error::unspanned(InvalidDimensions { rows: 0, cols: 0 }));
        };

        let expected = (first.rows, first.cols);
        if let Some(other) = matrices.iter().find(|m| (m.rows, m.cols) != expected) {
            return Err(Error::unspanned(ShapeMismatch {
                expected,
                found: (other.rows, other.cols),
            }));
        }

        let mut result = Matrix::with_shape(first.rows, first.cols);
        for (i, cell) in result.data.iter_mut().enumerate() {
            let mut set = matrices.iter()
                .filter_map(|m| m.data[i].as_ref())
                .peekable();
            let extra: &[&Expr] = if i == 0 { extra } else { &[] };
            if set.peek().is_none() && extra.is_empty() {
                continue;
            }
            *cell = Some(set.chain(extra.iter().copied()).sum());
        }
        Ok(result)
    }

    /// Returns the transpose of the matrix.
    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix::with_shape(self.cols, self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                result.data[c * self.rows + r] = self.cell(r, c).cloned();
            }
        }
        result
    }

    /// Applies `f` to every set cell, returning a new matrix. Unset cells stay unset.
    pub fn map(&self, mut f: impl FnMut(&Expr) -> Expr) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|cell| cell.as_ref().map(&mut f)).collect(),
        }
    }

    /// Substitutes `replacement` for the monomial `pattern` in every set cell. See
    /// [`Expr::substitute`].
    pub fn substitute(&self, pattern: &[Factor], replacement: &Expr) -> Result<Matrix, Error> {
        let data = self.data.iter()
            .map(|cell| cell.as_ref().map(|expr| expr.substitute(pattern, replacement)).transpose())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Matrix { rows: self.rows, cols: self.cols, data })
    }
}

/// Two matrices are equal if they have the same shape and equal cells, where an unset cell is
/// equal to zero.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.data.iter().zip(&other.data).all(|(a, b)| match (a, b) {
                (Some(a), Some(b)) => a == b,
                (Some(e), None) | (None, Some(e)) => e.is_zero(),
                (None, None) => true,
            })
    }
}

impl Eq for Matrix {}

/// Renders the matrix as a list of rows, such as `[[1, 0], [0, 1]]`. Unset cells render as `0`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.data.chunks(self.cols).enumerate() {
            if r != 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (c, cell) in row.iter().enumerate() {
                if c != 0 {
                    write!(f, ", ")?;
                }
                match cell {
                    Some(expr) => write!(f, "{}", expr)?,
                    None => write!(f, "0")?,
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
