use crate::error::Result;

pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Result<Self>;
    fn to_list(&self) -> Vec<Vec<T>>;
    fn shape(&self) -> (usize, usize);

    fn is_rref(&self) -> bool;
    fn rref(&self) -> Self;
    fn rank(&self) -> usize;
    /// Solves `self * x = target`, free variables are set to zero.
    /// Returns the solution and the rank of `self`.
    fn solve_right(&self, target: Vec<T>) -> Result<(Vec<T>, usize)>;
    fn identity(n: usize) -> Self;
    fn inverse(&self) -> Result<Self>;
    fn transpose(&self) -> Self;
    fn at(&self, row: usize, col: usize) -> T;
}
