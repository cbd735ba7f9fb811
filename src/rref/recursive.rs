//! Reduced row echelon form by recursion over shrinking sub-matrices.
//!
//! `solve` recurses once per pivot and once per run of free columns, so it
//! never goes deeper than `2 * min(rows, cols) + 2` frames. `back_track`
//! recurses once per row until the columns run out, at most
//! `min(rows, cols) + 1` frames. `rref` refuses matrices with
//! `min(rows, cols)` above [`RECURSION_LIMIT`], which keeps both passes
//! within a 2 MiB thread stack in debug builds.

use crate::error::{Result, RrefError};
use crate::matrix::matrix_dense::DenseElement;
use crate::rref::engine::Pivot;
use crate::rref::helpers::{
    add_scaled_row, drop_leading_column, drop_leading_columns, drop_row_and_leading_column,
    join_square, overlay_prepend, prepend_zero_columns, Rows,
};

pub const RECURSION_LIMIT: usize = 1 << 8;

pub fn rref<T: DenseElement>(rows: Rows<T>) -> Result<Rows<T>> {
    let depth = rows.len().min(rows.first().map_or(0, |row| row.len()));
    if depth > RECURSION_LIMIT {
        return Err(RrefError::RecursionLimit {
            depth,
            limit: RECURSION_LIMIT,
        });
    }

    Ok(back_track(solve(rows, 0), 0))
}

/// Row echelon form of `rows`. `col` is the position of the leading column
/// in the full matrix.
pub fn solve<T: DenseElement>(mut rows: Rows<T>, col: usize) -> Rows<T> {
    if rows.is_empty() || rows[0].is_empty() {
        return rows;
    }

    let pivot = rows
        .iter()
        .enumerate()
        .find(|(_, row)| !row[0].is_zero())
        .map(|(row, line)| Pivot {
            row,
            col,
            value: line[0],
        });

    let pivot = match pivot {
        Some(pivot) => pivot,
        None => {
            // the whole run of zero columns goes in one step
            let width = rows[0].len();
            let free = 1 + (1..width)
                .take_while(|&c| rows.iter().all(|row| row[c].is_zero()))
                .count();
            log::trace!("columns {col}..{}: free", col + free);

            let rest = drop_leading_columns(&rows, free);
            drop(rows);
            return prepend_zero_columns(solve(rest, col + free), free);
        }
    };
    log::trace!("column {col}: pivot {} at row {}", pivot.value, pivot.row);

    let mut head = std::mem::take(&mut rows[pivot.row]);
    for x in head.iter_mut() {
        *x = *x / pivot.value;
    }

    for (r, row) in rows.iter_mut().enumerate() {
        if r != pivot.row && !row[0].is_zero() {
            let multiple = -row[0];
            add_scaled_row(row, &head, multiple);
        }
    }

    let rest = drop_row_and_leading_column(&rows, pivot.row);
    drop(rows);
    join_square(solve(rest, col + 1), head)
}

/// Clears the entries above the leading entry of every row from `row` down,
/// bottom row first. `rows` must be in row echelon form.
pub fn back_track<T: DenseElement>(mut rows: Rows<T>, row: usize) -> Rows<T> {
    if row == rows.len() || rows[0].is_empty() {
        return rows;
    }

    let below = back_track(drop_leading_column(&rows), row + 1);
    overlay_prepend(&mut rows, &below);

    let column = match rows[row].iter().position(|x| !x.is_zero()) {
        Some(column) => column,
        None => return rows,
    };

    let (above, rest) = rows.split_at_mut(row);
    let current = &rest[0];
    for r in above.iter_mut() {
        let multiple = -r[column];
        add_scaled_row(r, current, multiple);
    }

    rows
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve() {
        let echelon = solve(
            vec![vec![0., 2., 4.], vec![2., 4., 6.], vec![1., 3., 5.]],
            0,
        );
        assert_eq!(
            echelon,
            vec![vec![1., 2., 3.], vec![0., 1., 2.], vec![0., 0., 0.]]
        );
    }

    #[test]
    fn test_solve_free_column() {
        let echelon = solve(vec![vec![0., 1., 2.], vec![0., 3., 4.]], 0);
        assert_eq!(echelon, vec![vec![0., 1., 2.], vec![0., 0., 1.]]);
    }

    #[test]
    fn test_back_track() {
        let reduced = back_track(
            vec![vec![1., 2., 3.], vec![0., 1., 2.], vec![0., 0., 0.]],
            0,
        );
        assert_eq!(
            reduced,
            vec![vec![1., 0., -1.], vec![0., 1., 2.], vec![0., 0., 0.]]
        );
    }

    #[test]
    fn test_rref() {
        assert_eq!(
            rref(vec![vec![2., 1., 1., 0.], vec![1., 1., 0., 1.]]).unwrap(),
            vec![vec![1., 0., 1., -1.], vec![0., 1., -1., 2.]]
        );
        assert_eq!(
            rref(vec![vec![1., 2., 3.], vec![2., 4., 6.]]).unwrap(),
            vec![vec![1., 2., 3.], vec![0., 0., 0.]]
        );
    }

    #[test]
    fn test_rref_more_rows_than_columns() {
        assert_eq!(
            rref(vec![vec![1., 2.], vec![3., 4.], vec![5., 6.]]).unwrap(),
            vec![vec![1., 0.], vec![0., 1.], vec![0., 0.]]
        );
        assert_eq!(
            rref(vec![vec![0.], vec![3.], vec![0.]]).unwrap(),
            vec![vec![1.], vec![0.], vec![0.]]
        );
    }

    #[test]
    fn test_rref_degenerate() {
        assert!(rref(Rows::<f64>::new()).unwrap().is_empty());
        assert_eq!(
            rref(vec![Vec::<f64>::new(), vec![]]).unwrap(),
            vec![Vec::<f64>::new(), vec![]]
        );
    }

    #[test]
    fn test_recursion_limit() {
        let square = vec![vec![1.]; RECURSION_LIMIT + 1]
            .into_iter()
            .map(|row: Vec<f64>| row.repeat(RECURSION_LIMIT + 1))
            .collect();
        assert_eq!(
            rref(square),
            Err(RrefError::RecursionLimit {
                depth: RECURSION_LIMIT + 1,
                limit: RECURSION_LIMIT
            })
        );

        // only the smaller dimension counts
        let tall = vec![vec![1.]; 4 * RECURSION_LIMIT];
        let reduced = rref(tall).unwrap();
        assert_eq!(reduced[0], vec![1.]);
        assert!(reduced[1..].iter().all(|row| row == &vec![0.]));
    }

    fn on_small_stack<F: FnOnce() + Send + 'static>(f: F) {
        std::thread::Builder::new()
            .stack_size(2 << 20)
            .spawn(f)
            .unwrap()
            .join()
            .unwrap();
    }

    #[test]
    fn test_wide_zero_matrix_on_small_stack() {
        on_small_stack(|| {
            let zero = vec![vec![0.; 16 * RECURSION_LIMIT]; 2];
            assert_eq!(rref(zero.clone()).unwrap(), zero);
        });
    }

    #[test]
    fn test_free_runs_between_pivots() {
        // pivots at columns 3 and 7, everything else free
        let mut rows = vec![vec![0.; 9]; 2];
        rows[1][3] = 2.;
        rows[0][7] = 4.;
        rows[0][8] = 2.;
        let mut expected = vec![vec![0.; 9]; 2];
        expected[0][3] = 1.;
        expected[1][7] = 1.;
        expected[1][8] = 0.5;
        assert_eq!(rref(rows).unwrap(), expected);
    }

    #[test]
    fn test_depth_at_limit_on_small_stack() {
        on_small_stack(|| {
            // a free column in front of an identity block, min(rows, cols) at the limit
            let n = RECURSION_LIMIT;
            let rows: Rows<f32> = (0..n)
                .map(|r| (0..n + 1).map(|c| if c == r + 1 { 3. } else { 0. }).collect())
                .collect();
            let reduced = rref(rows).unwrap();
            for (r, row) in reduced.iter().enumerate() {
                assert_eq!(row[0], 0.);
                assert!(row[1..].iter().enumerate().all(|(c, x)| *x == if c == r { 1. } else { 0. }));
            }
        });
    }
}
