use std::ops::{Index, IndexMut};

use crate::error::MatrixError;

/// Read-only view over one row of a matrix.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a, T> {
    pub(crate) row: usize,
    pub(crate) rows: usize,
    pub(crate) cells: &'a [T],
}

/// Read-write view over one row of a matrix.
#[derive(Debug)]
pub struct RowMut<'a, T> {
    pub(crate) row: usize,
    pub(crate) rows: usize,
    pub(crate) cells: &'a mut [T],
}

fn out_of_range(row: usize, col: usize, rows: usize, cols: usize) -> MatrixError {
    MatrixError::IndexOutOfRange {
        row,
        col,
        rows,
        cols,
    }
}

impl<'a, T> Row<'a, T> {
    pub fn row_index(&self) -> usize {
        self.row
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, col: usize) -> Result<&'a T, MatrixError> {
        self.cells
            .get(col)
            .ok_or_else(|| out_of_range(self.row, col, self.rows, self.cells.len()))
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.cells.iter()
    }
}

impl<'a, T> RowMut<'a, T> {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, col: usize) -> Result<&T, MatrixError> {
        let cols = self.cells.len();
        self.cells
            .get(col)
            .ok_or_else(|| out_of_range(self.row, col, self.rows, cols))
    }

    pub fn get_mut(&mut self, col: usize) -> Result<&mut T, MatrixError> {
        let cols = self.cells.len();
        let (row, rows) = (self.row, self.rows);
        self.cells
            .get_mut(col)
            .ok_or_else(|| out_of_range(row, col, rows, cols))
    }

    pub fn set(&mut self, col: usize, value: T) -> Result<(), MatrixError> {
        *self.get_mut(col)? = value;
        Ok(())
    }
}

impl<T> Index<usize> for Row<'_, T> {
    type Output = T;

    fn index(&self, col: usize) -> &T {
        &self.cells[col]
    }
}

impl<T> Index<usize> for RowMut<'_, T> {
    type Output = T;

    fn index(&self, col: usize) -> &T {
        &self.cells[col]
    }
}

impl<T> IndexMut<usize> for RowMut<'_, T> {
    fn index_mut(&mut self, col: usize) -> &mut T {
        &mut self.cells[col]
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_access() {
        let cells = [1, 2, 3];
        let row = Row {
            row: 1,
            rows: 2,
            cells: &cells,
        };
        assert_eq!(row[2], 3);
        assert_eq!(row.get(0), Ok(&1));
        assert_eq!(
            row.get(3),
            Err(MatrixError::IndexOutOfRange {
                row: 1,
                col: 3,
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn test_row_mut_access() {
        let mut cells = [1, 2, 3];
        let mut row = RowMut {
            row: 0,
            rows: 1,
            cells: &mut cells,
        };
        row[0] = 10;
        row.set(1, 20).unwrap();
        *row.get_mut(2).unwrap() += 27;
        assert!(row.set(3, 0).is_err());
        assert_eq!(cells, [10, 20, 30]);
    }
}
