//! Row and column surgery used by the recursive strategy.
//!
//! A matrix here is a `Vec` of owned rows. Every function assumes the rows
//! are rectangular, which `MatrixDense::from_list` guarantees upstream.

use crate::matrix::matrix_dense::DenseElement;

pub type Rows<T> = Vec<Vec<T>>;

/// `to[i] += from[i] * multiple`
#[inline(always)]
pub fn add_scaled_row<T: DenseElement>(to: &mut [T], from: &[T], multiple: T) {
    debug_assert_eq!(to.len(), from.len());
    for (t, f) in to.iter_mut().zip(from.iter()) {
        *t = *t + *f * multiple;
    }
}

/// Copy of `rows` without column 0.
pub fn drop_leading_column<T: DenseElement>(rows: &[Vec<T>]) -> Rows<T> {
    drop_leading_columns(rows, 1)
}

/// Copy of `rows` without columns `0..n`.
pub fn drop_leading_columns<T: DenseElement>(rows: &[Vec<T>], n: usize) -> Rows<T> {
    rows.iter().map(|row| row[n..].to_vec()).collect()
}

/// Copy of `rows` with a zero inserted in front of every row.
pub fn prepend_zero_column<T: DenseElement>(rows: Rows<T>) -> Rows<T> {
    prepend_zero_columns(rows, 1)
}

/// Copy of `rows` with `n` zeros inserted in front of every row.
pub fn prepend_zero_columns<T: DenseElement>(rows: Rows<T>, n: usize) -> Rows<T> {
    rows.into_iter()
        .map(|row| std::iter::repeat(T::zero()).take(n).chain(row).collect())
        .collect()
}

/// Writes `replacement` into columns `1..` of `target`, column 0 is untouched.
pub fn overlay_prepend<T: DenseElement>(target: &mut [Vec<T>], replacement: &[Vec<T>]) {
    debug_assert_eq!(target.len(), replacement.len());
    for (row, replace) in target.iter_mut().zip(replacement.iter()) {
        row[1..].copy_from_slice(replace);
    }
}

/// Copy of `rows` without row `skip` and without column 0.
pub fn drop_row_and_leading_column<T: DenseElement>(rows: &[Vec<T>], skip: usize) -> Rows<T> {
    rows.iter()
        .enumerate()
        .filter(|(r, _)| *r != skip)
        .map(|(_, row)| row[1..].to_vec())
        .collect()
}

/// `head` on top of `rows`, with `rows` shifted right by a zero column.
pub fn join_square<T: DenseElement>(rows: Rows<T>, head: Vec<T>) -> Rows<T> {
    debug_assert!(rows.iter().all(|row| row.len() + 1 == head.len()));
    std::iter::once(head)
        .chain(prepend_zero_column(rows))
        .collect()
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Rows<f64> {
        vec![vec![1., 2., 3.], vec![4., 5., 6.], vec![7., 8., 9.]]
    }

    #[test]
    fn test_add_scaled_row() {
        let mut to = vec![4., 5., 6.];
        add_scaled_row(&mut to, &[1., 2., 3.], -4.);
        assert_eq!(to, vec![0., -3., -6.]);

        let mut to = vec![1., 1.];
        add_scaled_row(&mut to, &[2., 3.], 0.);
        assert_eq!(to, vec![1., 1.]);
    }

    #[test]
    fn test_drop_leading_column() {
        assert_eq!(
            drop_leading_column(&sample()),
            vec![vec![2., 3.], vec![5., 6.], vec![8., 9.]]
        );
        assert_eq!(
            drop_leading_column(&[vec![1.], vec![2.]]),
            vec![Vec::<f64>::new(), vec![]]
        );
    }

    #[test]
    fn test_prepend_zero_column() {
        assert_eq!(
            prepend_zero_column(vec![vec![2., 3.], vec![5., 6.]]),
            vec![vec![0., 2., 3.], vec![0., 5., 6.]]
        );
        assert_eq!(
            prepend_zero_column(vec![Vec::<f64>::new()]),
            vec![vec![0.]]
        );
    }

    #[test]
    fn test_several_columns() {
        assert_eq!(
            drop_leading_columns(&sample(), 2),
            vec![vec![3.], vec![6.], vec![9.]]
        );
        assert_eq!(drop_leading_columns(&sample(), 0), sample());
        assert_eq!(
            prepend_zero_columns(vec![vec![3.], vec![6.]], 3),
            vec![vec![0., 0., 0., 3.], vec![0., 0., 0., 6.]]
        );
    }

    #[test]
    fn test_overlay_prepend() {
        let mut target = sample();
        overlay_prepend(&mut target, &[vec![0., 0.], vec![-1., -2.], vec![10., 11.]]);
        assert_eq!(
            target,
            vec![vec![1., 0., 0.], vec![4., -1., -2.], vec![7., 10., 11.]]
        );
    }

    #[test]
    fn test_drop_row_and_leading_column() {
        assert_eq!(
            drop_row_and_leading_column(&sample(), 1),
            vec![vec![2., 3.], vec![8., 9.]]
        );
        assert_eq!(
            drop_row_and_leading_column(&sample(), 0),
            vec![vec![5., 6.], vec![8., 9.]]
        );
        assert!(drop_row_and_leading_column(&[vec![1., 2.]], 0).is_empty());
    }

    #[test]
    fn test_join_square() {
        assert_eq!(
            join_square(vec![vec![5., 6.], vec![8., 9.]], vec![1., 2., 3.]),
            vec![vec![1., 2., 3.], vec![0., 5., 6.], vec![0., 8., 9.]]
        );
        assert_eq!(join_square(vec![], vec![1., 2.]), vec![vec![1., 2.]]);
    }
}
