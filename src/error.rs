use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("dimensions not compatible: {}x{} and {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("buffer of {len} elements cannot hold a {rows}x{cols} matrix")]
    BufferLength { len: usize, rows: usize, cols: usize },

    #[error("determinant overflows the element type")]
    Overflow,
}

/// Failures while reading a matrix from its textual `size cell cell ...` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("no matrix size found in input")]
    MissingSize,

    #[error("invalid matrix size {0:?}")]
    InvalidSize(String),

    #[error("invalid cell {token:?} at position {position}")]
    InvalidCell { position: usize, token: String },

    #[error("expected {expected} cells, found {found}")]
    MissingCells { expected: usize, found: usize },

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatrixError::IndexOutOfRange {
            row: 3,
            col: 1,
            rows: 2,
            cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "index (3, 1) out of range for a 2x2 matrix"
        );

        let err = MatrixError::DimensionMismatch {
            lhs: (2, 3),
            rhs: (3, 2),
        };
        assert_eq!(err.to_string(), "dimensions not compatible: 2x3 and 3x2");

        let err = InputError::InvalidCell {
            position: 4,
            token: "x".into(),
        };
        assert_eq!(err.to_string(), "invalid cell \"x\" at position 4");
    }
}
