//! Plain text matrices: one row per line, entries separated by whitespace
//! and/or commas. Blank lines and lines starting with `#` are skipped.

use crate::error::{Result, RrefError};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_dense::MatrixDense;

pub fn parse_matrix(input: &str) -> Result<MatrixDense<f64>> {
    let mut lines = vec![];

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token.parse::<f64>().map_err(|_| RrefError::Parse {
                    line: idx + 1,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        lines.push(row);
    }

    MatrixDense::from_list(lines)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matrix() {
        let input = "# system\n2 1, 1 0\n\n  1,1,0,1  \n";
        assert_eq!(
            parse_matrix(input).unwrap().to_list(),
            vec![vec![2., 1., 1., 0.], vec![1., 1., 0., 1.]]
        );
        assert_eq!(
            parse_matrix("-1.5e2 0.25").unwrap().to_list(),
            vec![vec![-150., 0.25]]
        );
        assert_eq!(parse_matrix("").unwrap().shape(), (0, 0));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_matrix("1 2\n3 x\n"),
            Err(RrefError::Parse {
                line: 2,
                token: "x".into()
            })
        );
        assert_eq!(
            parse_matrix("1 2\n\n3\n"),
            Err(RrefError::InvalidInput {
                row: 1,
                expected: 2,
                got: 1
            })
        );
    }
}
