use thiserror::Error;

pub type Result<T> = std::result::Result<T, RrefError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RrefError {
    /// Rows of different lengths
    #[error("Invalid input: row {row} has {got} columns, expected {expected}")]
    InvalidInput {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Dimensions not compatible: {lhs:?} and {rhs:?}")]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("Singular matrix")]
    Singular,

    #[error("Impossible system")]
    Inconsistent,

    /// The recursive strategy refuses matrices whose dimension exceeds the cap
    #[error("Recursion depth {depth} exceeds limit {limit}")]
    RecursionLimit { depth: usize, limit: usize },

    #[error("Cannot parse {token:?} on line {line}")]
    Parse { line: usize, token: String },
}
