pub mod matrix {
    pub mod matrix;
    pub mod matrix_dense;
}
pub mod rref {
    pub mod engine;
    pub mod helpers;
    pub mod iterative;
    pub mod recursive;
}

pub mod error;
pub mod text;

pub use error::{Result, RrefError};
pub use matrix::matrix::Matrix;
pub use matrix::matrix_dense::MatrixDense;
pub use rref::engine::{rref, rref_rows, rref_with, RrefOptions, Strategy};

#[cfg(feature = "python")]
mod python {
    use crate::error::RrefError;
    use crate::matrix::matrix::Matrix;
    use crate::matrix::matrix_dense::MatrixDense;
    use crate::rref::engine::{rref_with, RrefOptions, Strategy};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    fn value_error(error: RrefError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }

    fn from_list(matrix: Vec<Vec<f64>>) -> PyResult<MatrixDense<f64>> {
        MatrixDense::from_list(matrix).map_err(value_error)
    }

    #[pyfunction]
    #[pyo3(name = "rref", signature = (matrix, sort_zero_rows = false))]
    fn py_rref(matrix: Vec<Vec<f64>>, sort_zero_rows: bool) -> PyResult<Vec<Vec<f64>>> {
        let options = RrefOptions::new().sort_zero_rows(sort_zero_rows);
        match rref_with(from_list(matrix)?, &options) {
            Ok(result) => Ok(result.to_list()),
            Err(error) => Err(value_error(error)),
        }
    }

    #[pyfunction]
    #[pyo3(name = "rref_recursive")]
    fn py_rref_recursive(matrix: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
        let options = RrefOptions::new().strategy(Strategy::Recursive);
        match rref_with(from_list(matrix)?, &options) {
            Ok(result) => Ok(result.to_list()),
            Err(error) => Err(value_error(error)),
        }
    }

    #[pyfunction]
    #[pyo3(name = "rank")]
    fn py_rank(matrix: Vec<Vec<f64>>) -> PyResult<usize> {
        Ok(from_list(matrix)?.rank())
    }

    #[pyfunction]
    #[pyo3(name = "is_rref")]
    fn py_is_rref(matrix: Vec<Vec<f64>>) -> PyResult<bool> {
        Ok(from_list(matrix)?.is_rref())
    }

    #[pyfunction]
    #[pyo3(name = "inverse")]
    fn py_inverse(matrix: Vec<Vec<f64>>) -> PyResult<Vec<Vec<f64>>> {
        match from_list(matrix)?.inverse() {
            Ok(result) => Ok(result.to_list()),
            Err(error) => Err(value_error(error)),
        }
    }

    #[pyfunction]
    #[pyo3(name = "solve_right")]
    fn py_solve_right(matrix: Vec<Vec<f64>>, target: Vec<f64>) -> PyResult<(Vec<f64>, usize)> {
        from_list(matrix)?.solve_right(target).map_err(value_error)
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    fn rust_rref(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(py_rref, m)?)?;
        m.add_function(wrap_pyfunction!(py_rref_recursive, m)?)?;
        m.add_function(wrap_pyfunction!(py_rank, m)?)?;
        m.add_function(wrap_pyfunction!(py_is_rref, m)?)?;
        m.add_function(wrap_pyfunction!(py_inverse, m)?)?;
        m.add_function(wrap_pyfunction!(py_solve_right, m)?)?;
        Ok(())
    }
}
