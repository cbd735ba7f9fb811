//! Reduced row echelon form.
//!
//! The pivot of a column is always the topmost nonzero entry among the rows
//! that do not hold a pivot yet; there is no magnitude-based pivoting. An
//! entry counts as zero only if it is exactly zero, so near-zero pivots and
//! cancellation error are carried through unchanged.
//!
//! Two strategies compute the same values:
//! - [`Strategy::Iterative`] works in place on the flat buffer and keeps an
//!   explicit list of pivots between the forward and the backward pass.
//! - [`Strategy::Recursive`] recurses on copies of ever smaller sub-matrices,
//!   one level per pivot or run of free columns on the way forward and one per
//!   row on the way back.

use crate::error::Result;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseElement, MatrixDense};
use crate::rref::{iterative, recursive};

/// Where a pivot was found and the raw value its row was divided by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pivot<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Iterative,
    Recursive,
}

#[derive(Debug, Clone, Default)]
pub struct RrefOptions {
    pub strategy: Strategy,
    /// Moves all-zero rows below the nonzero ones, keeping both groups in
    /// order. Off by default: the elimination itself makes no promise about
    /// where zero rows end up.
    pub sort_zero_rows: bool,
}

impl RrefOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn sort_zero_rows(mut self, sort_zero_rows: bool) -> Self {
        self.sort_zero_rows = sort_zero_rows;
        self
    }
}

/// Reduced row echelon form of `matrix`, same dimensions.
pub fn rref<T: DenseElement>(matrix: MatrixDense<T>) -> MatrixDense<T> {
    let (rows, cols) = matrix.shape();
    let (reduced, pivots) = iterative::rref(matrix);
    log::debug!("rref {rows}x{cols}: rank {}", pivots.len());
    reduced
}

/// Reduced row echelon form of a list of rows. Rows of different lengths are
/// rejected with `RrefError::InvalidInput`.
pub fn rref_rows<T: DenseElement>(rows: Vec<Vec<T>>) -> Result<Vec<Vec<T>>> {
    Ok(rref(MatrixDense::from_list(rows)?).to_list())
}

pub fn rref_with<T: DenseElement>(
    matrix: MatrixDense<T>,
    options: &RrefOptions,
) -> Result<MatrixDense<T>> {
    let (rows, cols) = matrix.shape();

    let mut reduced = match options.strategy {
        Strategy::Iterative => iterative::rref(matrix).0,
        Strategy::Recursive => {
            let lines = recursive::rref(matrix.to_list())?;
            MatrixDense {
                rows,
                cols,
                cells: lines.into_iter().flatten().collect(),
            }
        }
    };

    if options.sort_zero_rows {
        move_zero_rows_to_bottom(&mut reduced);
    }

    log::debug!(
        "rref {rows}x{cols} ({:?}): rank {}",
        options.strategy,
        (0..rows).filter(|&r| !reduced.is_zero_row(r)).count()
    );
    Ok(reduced)
}

/// Stable partition of the rows: nonzero rows first, then all-zero rows.
pub fn move_zero_rows_to_bottom<T: DenseElement>(mat: &mut MatrixDense<T>) {
    let mut next = 0;
    for r in 0..mat.rows {
        if !mat.is_zero_row(r) {
            mat.move_row_up(r, next);
            next += 1;
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
