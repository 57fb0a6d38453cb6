//! Penalised least squares for the additive model.
//!
//! Systems here are small (at most a few dozen coefficients), so the normal
//! equations are solved directly by Gaussian elimination.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2};

use crate::error::ForecastError;

/// Pivot magnitude below which a system is treated as singular.
const PIVOT_TOL: f64 = 1e-12;

/// Minimises `||y - X·β||² + Σ penalty[j]·β[j]²`.
///
/// Solves `(XᵀX + diag(penalty))·β = Xᵀy`.
///
/// # Errors
///
/// Returns [`ForecastError::Singular`] if the normal equations have no
/// unique solution.
pub(crate) fn ridge_solve(
    x: &Array2<f64>,
    y: &Array1<f64>,
    penalty: &Array1<f64>,
) -> Result<Array1<f64>, ForecastError> {
    debug_assert_eq!(x.nrows(), y.len());
    debug_assert_eq!(x.ncols(), penalty.len());

    let xt = x.t();
    let mut a = xt.dot(x);
    for (j, &p) in penalty.iter().enumerate() {
        a[[j, j]] += p;
    }
    let b = xt.dot(y);
    solve(a, b)
}

/// Solves `A·x = b` by Gaussian elimination with partial pivoting.
pub(crate) fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Result<Array1<f64>, ForecastError> {
    let n = b.len();
    debug_assert_eq!(a.dim(), (n, n));

    // Scale-aware tolerance.
    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs())).max(1.0);

    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if a[[row, col]].abs() > a[[pivot, col]].abs() {
                pivot = row;
            }
        }
        if a[[pivot, col]].abs() < PIVOT_TOL * scale {
            return Err(ForecastError::Singular { size: n });
        }
        if pivot != col {
            for k in 0..n {
                a.swap([col, k], [pivot, k]);
            }
            b.swap(col, pivot);
        }

        let diag = a[[col, col]];
        for row in col + 1..n {
            let factor = a[[row, col]] / diag;
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = Array1::zeros(n);
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in row + 1..n {
            sum -= a[[row, k]] * x[k];
        }
        x[row] = sum / a[[row, row]];
    }
    Ok(x)
}
