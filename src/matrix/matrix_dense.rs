use itertools::Itertools;
use num_traits::Float;

use crate::error::{Result, RrefError};
use crate::matrix::matrix::Matrix;
use crate::rref::engine;
use crate::rref::helpers::add_scaled_row;
use crate::rref::iterative::{back_substitute, forward_eliminate};
use std::fmt;
use std::ops;
use std::ops::Range;

pub trait DenseElement:  // Avoid repeating all the traits
    Float
    + std::iter::Sum<Self>
    + std::fmt::Display
    + std::fmt::Debug
{
}

impl<T> DenseElement for T where
    T: Float + std::iter::Sum<T> + std::fmt::Display + std::fmt::Debug
{
}

/// Dense row-major matrix, `cells[row * cols + col]`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixDense<T> {
    pub cols: usize,
    pub rows: usize,
    pub cells: Vec<T>,
}

impl<T: DenseElement> Matrix<T> for MatrixDense<T> {
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);

        if let Some((row, line)) = lines.iter().enumerate().find(|(_, l)| l.len() != cols) {
            return Err(RrefError::InvalidInput {
                row,
                expected: cols,
                got: line.len(),
            });
        }

        Ok(MatrixDense {
            rows,
            cols,
            cells: lines.into_iter().flatten().collect(),
        })
    }

    fn to_list(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn is_rref(&self) -> bool {
        // column of the first nonzero entry of each row
        let leads: Vec<Option<usize>> = (0..self.rows)
            .map(|r| self.row(r).iter().position(|x| !x.is_zero()))
            .collect();
        let pivots: Vec<(usize, usize)> = leads
            .iter()
            .enumerate()
            .filter_map(|(r, lead)| lead.map(|c| (r, c)))
            .collect();

        let zero_rows_last =
            leads.iter().take_while(|lead| lead.is_some()).count() == pivots.len();
        let staircase = pivots.iter().tuple_windows().all(|(a, b)| a.1 < b.1);
        let unit_columns = pivots.iter().all(|&(row, col)| {
            (0..self.rows).all(|r| self.at(r, col) == if r == row { T::one() } else { T::zero() })
        });

        zero_rows_last && staircase && unit_columns
    }

    fn rref(&self) -> MatrixDense<T> {
        engine::rref(self.clone())
    }

    fn rank(&self) -> usize {
        let mut mat = self.clone();
        forward_eliminate(&mut mat).len()
    }

    fn solve_right(&self, target: Vec<T>) -> Result<(Vec<T>, usize)> {
        if target.len() != self.rows {
            return Err(RrefError::DimensionMismatch {
                lhs: self.shape(),
                rhs: (target.len(), 1),
            });
        }

        let column = MatrixDense {
            rows: self.rows,
            cols: 1,
            cells: target,
        };
        let mut aug = self.augment(&column)?;
        let pivots = forward_eliminate(&mut aug);

        // pivot columns increase, only the last one can sit on the target column
        if pivots.last().is_some_and(|p| p.col == self.cols) {
            return Err(RrefError::Inconsistent);
        }
        back_substitute(&mut aug, &pivots);

        let mut x = vec![T::zero(); self.cols];
        for pivot in &pivots {
            x[pivot.col] = aug.at(pivot.row, self.cols);
        }

        Ok((x, pivots.len()))
    }

    fn identity(n: usize) -> MatrixDense<T> {
        MatrixDense {
            rows: n,
            cols: n,
            cells: (0..n)
                .flat_map(|i| (0..n).map(move |j| if i == j { T::one() } else { T::zero() }))
                .collect(),
        }
    }

    fn inverse(&self) -> Result<MatrixDense<T>> {
        if self.rows != self.cols {
            return Err(RrefError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;
        let mut aug = self.augment(&MatrixDense::identity(n))?;
        let pivots = forward_eliminate(&mut aug);
        if pivots.iter().take_while(|p| p.col < n).count() < n {
            return Err(RrefError::Singular);
        }
        back_substitute(&mut aug, &pivots);

        Ok(aug.columns(n..2 * n))
    }

    fn transpose(&self) -> MatrixDense<T> {
        MatrixDense {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T {
        self.cells[row * self.cols + col]
    }
}

impl<T: DenseElement> MatrixDense<T> {
    pub fn new(rows: usize, cols: usize) -> MatrixDense<T> {
        MatrixDense {
            rows,
            cols,
            cells: vec![T::zero(); rows * cols],
        }
    }

    #[inline(always)]
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    #[inline(always)]
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        &mut self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub fn is_zero_row(&self, row: usize) -> bool {
        self.row(row).iter().all(|x| x.is_zero())
    }

    /// `to[from_col..] += from[from_col..] * multiple`, rows addressed in place.
    pub fn add_scaled_row(&mut self, to: usize, from: usize, multiple: T, from_col: usize) {
        debug_assert_ne!(to, from);
        let cols = self.cols;

        let (to_row, from_row) = if to < from {
            let (head, tail) = self.cells.split_at_mut(from * cols);
            (&mut head[to * cols..(to + 1) * cols], &tail[..cols])
        } else {
            let (head, tail) = self.cells.split_at_mut(to * cols);
            (&mut tail[..cols], &head[from * cols..(from + 1) * cols])
        };

        add_scaled_row(&mut to_row[from_col..], &from_row[from_col..], multiple);
    }

    /// Moves row `from` up to index `to`, rows `to..from` shift down by one.
    pub fn move_row_up(&mut self, from: usize, to: usize) {
        debug_assert!(to <= from);
        self.cells[to * self.cols..(from + 1) * self.cols].rotate_right(self.cols);
    }

    /// `[self | rhs]`
    pub fn augment(&self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>> {
        if self.rows != rhs.rows {
            return Err(RrefError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        Ok(MatrixDense {
            rows: self.rows,
            cols: self.cols + rhs.cols,
            cells: (0..self.rows)
                .flat_map(|r| self.row(r).iter().chain(rhs.row(r)).copied())
                .collect(),
        })
    }

    pub fn columns(&self, range: Range<usize>) -> MatrixDense<T> {
        MatrixDense {
            rows: self.rows,
            cols: range.len(),
            cells: (0..self.rows)
                .flat_map(|r| self.row(r)[range.clone()].iter().copied())
                .collect(),
        }
    }

    pub fn is_close(&self, other: &MatrixDense<T>, tolerance: T) -> bool {
        self.shape() == other.shape()
            && self
                .cells
                .iter()
                .zip(other.cells.iter())
                .all(|(a, b)| (*a - *b).abs() <= tolerance)
    }
}

impl<T: DenseElement> ops::Mul<&MatrixDense<T>> for &MatrixDense<T> {
    type Output = Result<MatrixDense<T>>;

    fn mul(self, rhs: &MatrixDense<T>) -> Result<MatrixDense<T>> {
        if self.cols != rhs.rows {
            return Err(RrefError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }

        Ok(MatrixDense {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .flat_map(|i| {
                    (0..rhs.cols)
                        .map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }
}

impl<T: DenseElement> fmt::Display for MatrixDense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .cells
            .iter()
            .map(|x| {
                // no "-0" in the output
                let x = if x.is_zero() { T::zero() } else { *x };
                match f.precision() {
                    Some(precision) => format!("{:.*}", precision, x),
                    None => format!("{}", x),
                }
            })
            .collect();
        let width = cells.iter().map(|c| c.len()).max().unwrap_or(0);

        for r in 0..self.rows {
            let line = cells[r * self.cols..(r + 1) * self.cols]
                .iter()
                .map(|c| format!("{:>width$}", c, width = width))
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
