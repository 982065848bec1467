use itertools::Itertools;
use std::fmt;
use std::ops;
use tracing::warn;

use crate::error::MatrixError;
use crate::matrix::determinant::DetScalar;
use crate::matrix::element::Element;
use crate::matrix::row::{Row, RowMut};
use crate::matrix::storage::Storage;

/// Dense row-major matrix.
///
/// Equality compares the shape and every cell. The default value is the
/// empty 0x0 matrix, which is also what [`Matrix::take`] leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    storage: Storage<T>,
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Matrix {
            storage: Storage::default(),
        }
    }
}

impl<T> Matrix<T> {
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Result<Matrix<T>, MatrixError> {
        Ok(Matrix {
            storage: Storage::from_cells(rows, cols, cells)?,
        })
    }

    /// Builds a matrix from a list of rows. The stride is the length of the
    /// first row and every other row must match it.
    pub fn from_list(lines: Vec<Vec<T>>) -> Result<Matrix<T>, MatrixError> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.len());

        if let Some((row, line)) = lines.iter().find_position(|l| l.len() != cols) {
            return Err(MatrixError::RaggedRow {
                row,
                expected: cols,
                found: line.len(),
            });
        }

        Matrix::from_cells(rows, cols, lines.into_iter().flatten().collect())
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.storage.rows()
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.storage.cols()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// True when both matrices have the same dimensions, whatever their content.
    pub fn equivalency(&self, rhs: &Matrix<T>) -> bool {
        self.shape() == rhs.shape()
    }

    pub fn cells(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Moves the contents out and leaves `self` as the empty 0x0 matrix.
    pub fn take(&mut self) -> Matrix<T> {
        Matrix {
            storage: self.storage.take(),
        }
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::IndexOutOfRange {
            row,
            col,
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    pub fn row(&self, row: usize) -> Result<Row<'_, T>, MatrixError> {
        let rows = self.rows();
        match self.storage.row(row) {
            Some(cells) => Ok(Row { row, rows, cells }),
            None => Err(self.out_of_range(row, 0)),
        }
    }

    pub fn row_mut(&mut self, row: usize) -> Result<RowMut<'_, T>, MatrixError> {
        let rows = self.rows();
        let err = self.out_of_range(row, 0);
        match self.storage.row_mut(row) {
            Some(cells) => Ok(RowMut { row, rows, cells }),
            None => Err(err),
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        match self.storage.offset(row, col) {
            Some(offset) => Ok(&self.storage.as_slice()[offset]),
            None => Err(self.out_of_range(row, col)),
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        match self.storage.offset(row, col) {
            Some(offset) => Ok(&mut self.storage.as_mut_slice()[offset]),
            None => Err(self.out_of_range(row, col)),
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), MatrixError> {
        if let Some(&bad) = [a, b].iter().find(|&&r| r >= self.rows()) {
            return Err(self.out_of_range(bad, 0));
        }
        if a == b {
            return Ok(());
        }

        let cols = self.cols();
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.storage.as_mut_slice().split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
        Ok(())
    }

    /// In-place transpose. Only square matrices are supported.
    pub fn transpose(&mut self) -> Result<&mut Self, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }

        let n = self.rows();
        let cells = self.storage.as_mut_slice();
        for i in 0..n {
            for j in i + 1..n {
                cells.swap(i * n + j, j * n + i);
            }
        }
        Ok(self)
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix {
            storage: self.storage.map(f),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.rows()).map(|r| self[r].to_vec()).collect()
    }

    fn check_equivalent(&self, rhs: &Matrix<T>) -> Result<(), MatrixError> {
        if !self.equivalency(rhs) {
            return Err(MatrixError::DimensionMismatch {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        Ok(())
    }
}

impl<T: Clone> Matrix<T> {
    pub fn filled(rows: usize, cols: usize, value: T) -> Matrix<T> {
        Matrix {
            storage: Storage::filled(rows, cols, value),
        }
    }

    /// Cloned read of one cell. Panics when out of range, see [`Matrix::get`]
    /// for the checked version.
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        self[row][col].clone()
    }
}

impl<T: Element> Matrix<T> {
    pub fn new(rows: usize, cols: usize) -> Matrix<T> {
        Matrix::filled(rows, cols, T::zero())
    }

    pub fn identity(n: usize) -> Matrix<T> {
        let mut m = Matrix::new(n, n);
        for cell in m.storage.as_mut_slice().iter_mut().step_by(n + 1) {
            *cell = T::one();
        }
        m
    }

    /// Sum of the diagonal, `None` for non-square matrices.
    pub fn trace(&self) -> Option<T> {
        if !self.is_square() {
            return None;
        }
        Some((0..self.rows()).fold(T::zero(), |acc, i| acc + self.at(i, i)))
    }

    pub fn negate(&mut self) -> &mut Self {
        for cell in self.storage.as_mut_slice() {
            let value = std::mem::replace(cell, T::zero());
            *cell = -value;
        }
        self
    }

    pub fn try_add_assign(&mut self, rhs: &Matrix<T>) -> Result<(), MatrixError> {
        self.check_equivalent(rhs)?;
        self.zip_apply(rhs, |a, b| a + b);
        Ok(())
    }

    pub fn try_sub_assign(&mut self, rhs: &Matrix<T>) -> Result<(), MatrixError> {
        self.check_equivalent(rhs)?;
        self.zip_apply(rhs, |a, b| a - b);
        Ok(())
    }

    fn zip_apply(&mut self, rhs: &Matrix<T>, f: impl Fn(T, T) -> T) {
        for (a, b) in self.storage.as_mut_slice().iter_mut().zip(rhs.cells()) {
            let value = std::mem::replace(a, T::zero());
            *a = f(value, b.clone());
        }
    }
}

impl<T: DetScalar> Matrix<T> {
    /// Determinant of a square matrix, `None` when `rows != cols` or when the
    /// determinant does not fit in `T`.
    ///
    /// Signed integers use Bareiss elimination and are exact; floats use
    /// Gaussian elimination in `f64`, see [`crate::matrix::determinant`].
    /// The matrix itself is never modified.
    pub fn det(&self) -> Option<T> {
        if !self.is_square() {
            return None;
        }
        match T::determinant(self) {
            Ok(det) => Some(det),
            Err(err) => {
                warn!(%err, "no determinant");
                None
            }
        }
    }

    /// Like [`Matrix::det`], with the reason when there is no value.
    pub fn checked_det(&self) -> Result<T, MatrixError> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        T::determinant(self)
    }
}

impl<T> ops::Index<usize> for Matrix<T> {
    type Output = [T];

    fn index(&self, row: usize) -> &[T] {
        match self.storage.row(row) {
            Some(cells) => cells,
            None => panic!(
                "row index {} out of range for a {}x{} matrix",
                row,
                self.rows(),
                self.cols()
            ),
        }
    }
}

impl<T> ops::IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, row: usize) -> &mut [T] {
        let (rows, cols) = self.shape();
        match self.storage.row_mut(row) {
            Some(cells) => cells,
            None => panic!(
                "row index {} out of range for a {}x{} matrix",
                row, rows, cols
            ),
        }
    }
}

// `+=` and `-=` leave the matrix untouched when the shapes differ.
// Use `try_add_assign` / `try_sub_assign` to observe the mismatch.

impl<T: Element> ops::AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(err) = self.try_add_assign(rhs) {
            warn!(%err, "matrix addition ignored");
        }
    }
}

impl<T: Element> ops::SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        if let Err(err) = self.try_sub_assign(rhs) {
            warn!(%err, "matrix subtraction ignored");
        }
    }
}

impl<T: Element> ops::AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Matrix<T>) {
        *self += &rhs;
    }
}

impl<T: Element> ops::SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Matrix<T>) {
        *self -= &rhs;
    }
}

impl<T: Element> ops::Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn add(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        self += rhs;
        self
    }
}

impl<T: Element> ops::Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        self -= rhs;
        self
    }
}

impl<T: Element> ops::Add for Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Element> ops::Sub for Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Element> ops::Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        self.negate();
        self
    }
}

/// One `[ a b c ]` line per row, cells right-aligned to the formatter width
/// (2 when unset).
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = f.width().unwrap_or(2);
        for r in 0..self.rows() {
            let row = self.row(r).map_err(|_| fmt::Error)?;
            writeln!(
                f,
                "[ {} ]",
                row.iter()
                    .map(|cell| format!("{:>width$}", cell, width = width))
                    .join(" ")
            )?;
        }
        Ok(())
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
