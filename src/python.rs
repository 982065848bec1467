use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

#[derive(Debug, Clone)]
#[pyclass(frozen)]
pub struct MatrixInt {
    pub inner: Matrix<i64>,
}

#[pymethods]
impl MatrixInt {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<i64>>) -> PyResult<Self> {
        Ok(MatrixInt {
            inner: Matrix::from_list(lines)?,
        })
    }

    #[staticmethod]
    pub fn identity(n: usize) -> Self {
        MatrixInt {
            inner: Matrix::identity(n),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<i64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    pub fn det(&self) -> Option<i64> {
        self.inner.det()
    }

    pub fn trace(&self) -> Option<i64> {
        self.inner.trace()
    }

    pub fn transposed(&self) -> PyResult<MatrixInt> {
        let mut inner = self.inner.clone();
        inner.transpose()?;
        Ok(MatrixInt { inner })
    }

    pub fn negated(&self) -> MatrixInt {
        MatrixInt {
            inner: -self.inner.clone(),
        }
    }

    pub fn swap_rows(&self, a: usize, b: usize) -> PyResult<MatrixInt> {
        let mut inner = self.inner.clone();
        inner.swap_rows(a, b)?;
        Ok(MatrixInt { inner })
    }

    pub fn __add__(&self, rhs: &MatrixInt) -> PyResult<MatrixInt> {
        let mut inner = self.inner.clone();
        inner.try_add_assign(&rhs.inner)?;
        Ok(MatrixInt { inner })
    }

    pub fn __sub__(&self, rhs: &MatrixInt) -> PyResult<MatrixInt> {
        let mut inner = self.inner.clone();
        inner.try_sub_assign(&rhs.inner)?;
        Ok(MatrixInt { inner })
    }

    pub fn __eq__(&self, rhs: &MatrixInt) -> bool {
        self.inner == rhs.inner
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}

/// A Python module implemented in Rust.
#[pymodule]
fn matrix_det(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<MatrixInt>()?;
    Ok(())
}
