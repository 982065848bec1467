//! Determinant computation.
//!
//! Every element category gets a single algorithm:
//!
//! * signed integers use Bareiss fraction-free elimination ([`bareiss`]),
//!   which is exact because every division it performs is exact;
//! * floats use Gaussian elimination in an `f64` scratch buffer ([`gaussian`]).
//!
//! Both work on a private copy, so the caller's matrix is never touched, and
//! neither fails on singular input.

use num_integer::Integer;
use num_traits::{AsPrimitive, CheckedDiv, CheckedMul, CheckedSub};
use tracing::{debug, trace};

use crate::error::MatrixError;
use crate::matrix::element::Element;
use crate::matrix::matrix::Matrix;

/// Pivots smaller than this in absolute value are skipped by [`gaussian`].
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-9;

/// Element types with a determinant algorithm.
pub trait DetScalar: Element {
    /// Determinant of `m`, which the caller guarantees to be square.
    fn determinant(m: &Matrix<Self>) -> Result<Self, MatrixError>;
}

// Bareiss intermediates are products of two minors and outgrow the result
// long before it overflows, so narrow types are eliminated in `i128`.
macro_rules! widened_determinant {
    ($($t:ty),*) => {
        $(
            impl DetScalar for $t {
                fn determinant(m: &Matrix<$t>) -> Result<$t, MatrixError> {
                    let det = bareiss(&m.map(|&x| x as i128))?;
                    <$t>::try_from(det).map_err(|_| MatrixError::Overflow)
                }
            }
        )*
    };
}

macro_rules! exact_determinant {
    ($($t:ty),*) => {
        $(
            impl DetScalar for $t {
                fn determinant(m: &Matrix<$t>) -> Result<$t, MatrixError> {
                    bareiss(m)
                }
            }
        )*
    };
}

macro_rules! float_determinant {
    ($($t:ty),*) => {
        $(
            impl DetScalar for $t {
                fn determinant(m: &Matrix<$t>) -> Result<$t, MatrixError> {
                    gaussian(m)
                        .map(|det| det.as_())
                        .ok_or(MatrixError::NotSquare {
                            rows: m.rows(),
                            cols: m.cols(),
                        })
                }
            }
        )*
    };
}

widened_determinant!(i8, i16, i32, i64);
exact_determinant!(i128, isize);
float_determinant!(f32, f64);

/// Bareiss fraction-free elimination with checked arithmetic.
///
/// Returns `Err(NotSquare)` for non-square matrices, `Ok(0)` for singular ones
/// and `1` for the empty matrix. An intermediate value that does not fit in `T`
/// yields `Err(Overflow)` instead of wrapping or panicking.
pub fn bareiss<T>(m: &Matrix<T>) -> Result<T, MatrixError>
where
    T: Element + Integer + CheckedMul + CheckedSub + CheckedDiv,
{
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }

    let n = m.rows();
    debug!(size = n, "bareiss determinant");
    match n {
        0 => return Ok(T::one()),
        1 => return Ok(m.at(0, 0)),
        _ => {}
    }

    let mut clone = m.clone();
    let mut negative = false;

    for i in 0..n - 1 {
        if clone[i][i].is_zero() {
            match (i + 1..n).find(|&pivot| !clone[pivot][i].is_zero()) {
                Some(pivot) => {
                    trace!(step = i, pivot, "swapping rows");
                    clone.swap_rows(pivot, i)?;
                    negative = !negative;
                }
                None => {
                    trace!(step = i, "no pivot, matrix is singular");
                    return Ok(T::zero());
                }
            }
        }

        let pivot = clone.at(i, i);
        let previous = (i != 0).then(|| clone.at(i - 1, i - 1));

        for j in i + 1..n {
            let factor = clone.at(j, i);
            for k in i + 1..n {
                let lhs = clone[j][k].checked_mul(&pivot).ok_or(MatrixError::Overflow)?;
                let rhs = factor.checked_mul(&clone[i][k]).ok_or(MatrixError::Overflow)?;
                let value = lhs.checked_sub(&rhs).ok_or(MatrixError::Overflow)?;
                clone[j][k] = match &previous {
                    Some(previous) => value.checked_div(previous).ok_or(MatrixError::Overflow)?,
                    None => value,
                };
            }
        }
    }

    let det = clone.at(n - 1, n - 1);
    if negative {
        T::zero().checked_sub(&det).ok_or(MatrixError::Overflow)
    } else {
        Ok(det)
    }
}

/// Gaussian elimination with [`DEFAULT_PIVOT_TOLERANCE`].
pub fn gaussian<T>(m: &Matrix<T>) -> Option<f64>
where
    T: Element + AsPrimitive<f64>,
{
    gaussian_with_tolerance(m, DEFAULT_PIVOT_TOLERANCE)
}

/// Gaussian elimination over an `f64` copy of `m`.
///
/// A pivot whose magnitude is below `tolerance` is skipped: the step neither
/// multiplies the running product nor eliminates its column. This is only
/// correct while the skipped rows do not feed later pivots, so a singular
/// matrix does not necessarily produce zero (`[[1, 2], [2, 4]]` gives `1`).
pub fn gaussian_with_tolerance<T>(m: &Matrix<T>, tolerance: f64) -> Option<f64>
where
    T: Element + AsPrimitive<f64>,
{
    if !m.is_square() {
        return None;
    }

    let n = m.rows();
    debug!(size = n, tolerance, "gaussian determinant");

    let mut clone: Matrix<f64> = m.map(|&x| x.as_());
    let mut determinant = 1.0;

    for k in 0..n {
        let pivot = clone[k][k];
        if pivot.abs() < tolerance {
            trace!(step = k, pivot, "skipping near-zero pivot");
            continue;
        }
        determinant *= pivot;

        for cell in &mut clone[k][k..] {
            *cell /= pivot;
        }

        for i in k + 1..n {
            let factor = clone[i][k];
            for j in k..n {
                let value = clone[k][j];
                clone[i][j] -= factor * value;
            }
        }
    }

    Some(determinant)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    fn int(lines: Vec<Vec<i64>>) -> Matrix<i64> {
        Matrix::from_list(lines).unwrap()
    }

    fn float(lines: Vec<Vec<f64>>) -> Matrix<f64> {
        Matrix::from_list(lines).unwrap()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_det_concrete() {
        assert_eq!(int(vec![vec![1, 2], vec![3, 4]]).det(), Some(-2));
        assert_eq!(
            int(vec![vec![2, 0, 0], vec![0, 3, 0], vec![0, 0, 4]]).det(),
            Some(24)
        );
        assert_eq!(int(vec![vec![1, 2], vec![2, 4]]).det(), Some(0));
        assert_eq!(
            int(vec![vec![2, -3, 1], vec![2, 0, -1], vec![1, 4, 5]]).det(),
            Some(49)
        );
    }

    #[test]
    fn test_det_edge_sizes() {
        assert_eq!(Matrix::<i64>::default().det(), Some(1));
        assert_eq!(int(vec![vec![-7]]).det(), Some(-7));
        assert_eq!(Matrix::<i64>::new(2, 3).det(), None);
        assert_eq!(Matrix::<f64>::new(3, 2).det(), None);

        for n in 1..8 {
            assert_eq!(Matrix::<i32>::identity(n).det(), Some(1));
            assert_eq!(Matrix::<f64>::identity(n).det(), Some(1.0));
        }
    }

    #[test]
    fn test_det_zero_pivot() {
        // Needs a row swap on the first step.
        assert_eq!(int(vec![vec![0, 1], vec![1, 0]]).det(), Some(-1));
        assert_eq!(
            int(vec![vec![0, 2, 1], vec![3, 0, 0], vec![0, 0, 5]]).det(),
            Some(-30)
        );
        // Zero column.
        assert_eq!(
            int(vec![vec![0, 2, 1], vec![0, 4, 0], vec![0, 3, 5]]).det(),
            Some(0)
        );
        // Zero pivot appears only after the first elimination step.
        assert_eq!(
            int(vec![vec![1, 2, 3], vec![2, 4, 7], vec![1, 3, 2]]).det(),
            Some(-1)
        );
    }

    #[test]
    fn test_det_transpose_and_swap() {
        let m = int(vec![
            vec![3, 1, 4, 1],
            vec![5, 9, 2, 6],
            vec![5, 3, 5, 8],
            vec![9, 7, 9, 3],
        ]);
        let det = m.det().unwrap();
        assert_eq!(det, 98);

        let mut t = m.clone();
        t.transpose().unwrap();
        assert_eq!(t.det(), Some(det));

        let mut s = m.clone();
        s.swap_rows(1, 3).unwrap();
        assert_eq!(s.det(), Some(-det));
    }

    #[test]
    fn test_det_does_not_mutate() {
        let m = int(vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 9]]);
        let copy = m.clone();
        assert_eq!(m.det(), Some(-3));
        assert_eq!(m, copy);

        let f = float(vec![vec![4.0, 3.0], vec![6.0, 3.0]]);
        let copy = f.clone();
        assert_close(f.det().unwrap(), -6.0);
        assert_eq!(f, copy);
    }

    #[test]
    fn test_det_float() {
        assert_close(float(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).det().unwrap(), -2.0);
        assert_close(float(vec![vec![3.0, 4.0], vec![1.0, 2.0]]).det().unwrap(), 2.0);
        assert_close(
            float(vec![vec![2.0, 0.0, 0.0], vec![0.0, 3.0, 0.0], vec![0.0, 0.0, 4.0]])
                .det()
                .unwrap(),
            24.0,
        );
        assert_close(
            float(vec![vec![0.5, 1.5], vec![2.5, -1.0]]).det().unwrap(),
            -4.25,
        );

        let m = Matrix::from_list(vec![vec![1.0f32, 2.0], vec![3.0, 4.0]]).unwrap();
        assert!((m.det().unwrap() + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_pivot_skip() {
        // Skipped pivots are not folded into the product.
        let singular = float(vec![vec![1.0, 2.0], vec![2.0, 4.0]]);
        assert_close(gaussian(&singular).unwrap(), 1.0);

        let swapped = float(vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
        assert_close(gaussian(&swapped).unwrap(), 1.0);

        // A looser tolerance skips small but legitimate pivots too.
        let small = float(vec![vec![1e-3, 0.0], vec![0.0, 2.0]]);
        assert_close(gaussian(&small).unwrap(), 2e-3);
        assert_close(gaussian_with_tolerance(&small, 1e-2).unwrap(), 2.0);
    }

    #[test]
    fn test_gaussian_on_integers() {
        let m = int(vec![vec![6, 1, 1], vec![4, -2, 5], vec![2, 8, 7]]);
        assert_eq!(m.det(), Some(-306));
        assert_close(gaussian(&m).unwrap(), -306.0);
        assert_eq!(gaussian(&Matrix::<i64>::new(1, 2)), None);
    }

    #[test]
    fn test_bareiss_bigint() {
        let bi = |s: &str| BigInt::parse_bytes(s.as_bytes(), 10).unwrap();

        let m = Matrix::from_list(vec![
            vec![bi("100000000000000000000"), bi("1")],
            vec![bi("1"), bi("100000000000000000000")],
        ])
        .unwrap();
        assert_eq!(
            bareiss(&m),
            Ok(bi("9999999999999999999999999999999999999999"))
        );

        let m = Matrix::from_list(vec![
            vec![bi("0"), bi("2"), bi("1")],
            vec![bi("3"), bi("0"), bi("0")],
            vec![bi("0"), bi("0"), bi("5")],
        ])
        .unwrap();
        assert_eq!(bareiss(&m), Ok(bi("-30")));
        assert_eq!(
            bareiss(&Matrix::<BigInt>::new(2, 1)),
            Err(MatrixError::NotSquare { rows: 2, cols: 1 })
        );
    }

    #[test]
    fn test_det_large_entries() {
        // Products of minors exceed i32 while the determinant fits.
        let m = Matrix::<i32>::from_list(vec![
            vec![50000, 49999, 0],
            vec![49999, 50000, 0],
            vec![0, 0, 1],
        ])
        .unwrap();
        assert_eq!(m.det(), Some(99999));

        let m = Matrix::<i64>::from_list(vec![
            vec![4_000_000_000, 3_999_999_999],
            vec![3_999_999_999, 4_000_000_000],
        ])
        .unwrap();
        assert_eq!(m.det(), Some(7_999_999_999));

        let mut t = m.clone();
        t.swap_rows(0, 1).unwrap();
        assert_eq!(t.checked_det(), Ok(-7_999_999_999));
    }

    #[test]
    fn test_det_overflow() {
        let m = Matrix::<i8>::from_list(vec![vec![100, 0], vec![0, 100]]).unwrap();
        assert_eq!(m.det(), None);
        assert_eq!(m.checked_det(), Err(MatrixError::Overflow));

        let big = 1i128 << 100;
        let m = Matrix::<i128>::from_list(vec![vec![big, 0], vec![0, big]]).unwrap();
        assert_eq!(m.det(), None);
        assert_eq!(m.checked_det(), Err(MatrixError::Overflow));

        assert_eq!(
            Matrix::<i32>::new(2, 3).checked_det(),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        );
    }
}
