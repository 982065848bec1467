use crate::error::MatrixError;

/// Flat row-major buffer: cell `(row, col)` lives at `row * cols + col`.
///
/// `cells.len() == rows * cols` holds for every value of this type; the only
/// way to change the shape is to replace the whole storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Storage<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Storage {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }
}

impl<T: Clone> Storage<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Storage {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }
}

impl<T> Storage<T> {
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, MatrixError> {
        if cells.len() != rows * cols {
            return Err(MatrixError::BufferLength {
                len: cells.len(),
                rows,
                cols,
            });
        }
        Ok(Storage { rows, cols, cells })
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    pub fn offset(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        (row < self.rows).then(|| &self.cells[row * self.cols..(row + 1) * self.cols])
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row >= self.rows {
            return None;
        }
        Some(&mut self.cells[row * self.cols..(row + 1) * self.cols])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Storage<U> {
        Storage {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Moves the contents out, leaving `self` as the empty 0x0 storage.
    pub fn take(&mut self) -> Storage<T> {
        std::mem::take(self)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
