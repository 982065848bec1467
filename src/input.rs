use std::str::FromStr;
use tracing::debug;

use crate::error::InputError;
use crate::matrix::matrix::Matrix;

/// Parses `size c00 c01 ... c(n-1)(n-1)`: a size followed by `size * size`
/// whitespace-separated cells in row-major order. Anything after the last
/// cell is ignored.
pub fn parse_square<T: FromStr>(text: &str) -> Result<Matrix<T>, InputError> {
    let mut tokens = text.split_whitespace();

    let size_token = tokens.next().ok_or(InputError::MissingSize)?;
    let size: usize = size_token
        .parse()
        .map_err(|_| InputError::InvalidSize(size_token.to_string()))?;
    let expected = size
        .checked_mul(size)
        .ok_or_else(|| InputError::InvalidSize(size_token.to_string()))?;

    let mut cells = Vec::with_capacity(expected.min(1 << 16));
    for (position, token) in tokens.by_ref().take(expected).enumerate() {
        let cell = token.parse().map_err(|_| InputError::InvalidCell {
            position,
            token: token.to_string(),
        })?;
        cells.push(cell);
    }

    if cells.len() != expected {
        return Err(InputError::MissingCells {
            expected,
            found: cells.len(),
        });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        debug!(trailing, "ignoring tokens after the last cell");
    }

    Ok(Matrix::from_cells(size, size, cells)?)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
