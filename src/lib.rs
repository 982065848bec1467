pub mod matrix {
    pub mod determinant;
    pub mod element;
    pub mod matrix;
    pub mod row;
    pub mod storage;
}

pub mod error;
pub mod generator;
pub mod input;
pub mod utils;

#[cfg(feature = "python")]
pub mod python;

pub use error::{InputError, MatrixError};
pub use matrix::determinant::DetScalar;
pub use matrix::element::Element;
pub use matrix::matrix::Matrix;
