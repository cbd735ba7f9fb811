use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::{DenseElement, MatrixDense};
use crate::rref::engine::Pivot;

/// Reduces `mat` to row echelon form in place and returns the pivots in
/// row order. Pivot rows are normalized so every pivot is exactly 1.
///
/// The pivot of a column is the topmost nonzero entry among the rows that
/// do not hold a pivot yet. It is moved to the top of those rows, the others
/// keep their relative order.
pub fn forward_eliminate<T: DenseElement>(mat: &mut MatrixDense<T>) -> Vec<Pivot<T>> {
    let (rows, cols) = (mat.rows, mat.cols);
    let mut pivots = Vec::with_capacity(rows.min(cols));
    let mut top = 0;

    for col in 0..cols {
        if top == rows {
            break;
        }

        let pivot_row = match (top..rows).find(|&r| !mat.at(r, col).is_zero()) {
            Some(r) => r,
            None => {
                log::trace!("column {col}: free");
                continue;
            }
        };
        let value = mat.at(pivot_row, col);
        log::trace!("column {col}: pivot {value} at row {pivot_row}");

        mat.move_row_up(pivot_row, top);
        for x in mat.row_mut(top)[col..].iter_mut() {
            *x = *x / value;
        }

        for r in top + 1..rows {
            let factor = mat.at(r, col);
            if !factor.is_zero() {
                mat.add_scaled_row(r, top, -factor, col);
            }
        }

        pivots.push(Pivot {
            row: top,
            col,
            value,
        });
        top += 1;
    }

    pivots
}

/// Clears every entry above each pivot, last pivot first.
pub fn back_substitute<T: DenseElement>(mat: &mut MatrixDense<T>, pivots: &[Pivot<T>]) {
    for pivot in pivots.iter().rev() {
        for r in 0..pivot.row {
            let factor = mat.at(r, pivot.col);
            if !factor.is_zero() {
                mat.add_scaled_row(r, pivot.row, -factor, pivot.col);
            }
        }
    }
}

/// Reduced row echelon form, returns the pivots alongside.
pub fn rref<T: DenseElement>(mut mat: MatrixDense<T>) -> (MatrixDense<T>, Vec<Pivot<T>>) {
    let pivots = forward_eliminate(&mut mat);
    back_substitute(&mut mat, &pivots);
    (mat, pivots)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
