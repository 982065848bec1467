use rand::Rng;

use crate::matrix::matrix::Matrix;

/// Random integer matrix whose determinant is exactly `determinant`.
///
/// Starts from an upper triangular matrix with a unit diagonal, random
/// entries in `1..=10` above it and `determinant` on one random diagonal
/// cell, then adds random multiples of each row to the rows below it. Those
/// row operations form a unit lower triangular factor and keep the
/// determinant unchanged.
pub fn with_determinant<R: Rng>(rng: &mut R, size: usize, determinant: i64) -> Matrix<i64> {
    let mut m = Matrix::<i64>::identity(size);
    if size == 0 {
        return m;
    }

    for i in 0..size {
        for j in i + 1..size {
            m[i][j] = rng.gen_range(1..=10);
        }
    }
    let cell = rng.gen_range(0..size);
    m[cell][cell] = determinant;

    for target in (1..size).rev() {
        for source in 0..target {
            let factor: i64 = rng.gen_range(1..=10);
            for col in 0..size {
                let value = m[source][col];
                m[target][col] += factor * value;
            }
        }
    }

    m
}

/// A random test case: a matrix and its determinant, picked in `10..=400`.
pub fn random_case<R: Rng>(rng: &mut R, size: usize) -> (Matrix<i64>, i64) {
    let determinant = rng.gen_range(10..=400);
    (with_determinant(rng, size, determinant), determinant)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
