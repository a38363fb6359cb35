use algex_attrs::ErrorKind;
use algex_error::{ErrorKind, EXPR};
use ariadne::Fmt;

/// A matrix was requested with a zero dimension.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot create a {}x{} matrix", rows, cols),
    help = "both the number of rows and columns must be positive",
)]
pub struct InvalidDimensions {
    /// The requested number of rows.
    pub rows: usize,

    /// The requested number of columns.
    pub cols: usize,
}

/// A cell outside the matrix was accessed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cell [{}, {}] is outside of a {}x{} matrix", row, col, rows, cols),
    help = format!(
        "rows are numbered from 0 to {}, columns from 0 to {}",
        rows.saturating_sub(1).fg(EXPR),
        cols.saturating_sub(1).fg(EXPR),
    ),
)]
pub struct OutOfBounds {
    /// The row that was accessed.
    pub row: usize,

    /// The column that was accessed.
    pub col: usize,

    /// The number of rows in the matrix.
    pub rows: usize,

    /// The number of columns in the matrix.
    pub cols: usize,
}

/// Two matrices cannot be multiplied, since the number of columns of the left matrix is not the
/// number of rows of the right matrix.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot multiply a matrix with {} columns by a matrix with {} rows", lhs_cols, rhs_rows),
    help = "the left matrix must have as many columns as the right matrix has rows",
)]
pub struct DimensionMismatch {
    /// The number of columns of the left matrix.
    pub lhs_cols: usize,

    /// The number of rows of the right matrix.
    pub rhs_rows: usize,
}

/// Matrices of different shapes were summed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!(
        "cannot add a {}x{} matrix to a {}x{} matrix",
        found.0, found.1,
        expected.0, expected.1,
    ),
    help = "every matrix in a sum must have the same number of rows and columns",
)]
pub struct ShapeMismatch {
    /// The shape of the first matrix in the sum, as `(rows, cols)`.
    pub expected: (usize, usize),

    /// The shape of the offending matrix.
    pub found: (usize, usize),
}

/// A matrix was given a number of cells that does not match its shape.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("a {}x{} matrix cannot hold {} cells", rows, cols, found),
    help = "cells are listed row by row, one entry per cell, with unset cells as `null`",
)]
pub struct CellCountMismatch {
    /// The number of rows of the matrix.
    pub rows: usize,

    /// The number of columns of the matrix.
    pub cols: usize,

    /// The number of cells given.
    pub found: usize,
}
