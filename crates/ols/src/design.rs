//! Normal-equations solver for small dense design matrices.
//!
//! The parameter count here is the predictor count plus one, so a plain
//! row-major buffer and Gaussian elimination beat pulling in a linear
//! algebra stack.

use crate::error::OlsError;

/// Pivots smaller than this are treated as rank deficiency.
const PIVOT_TOL: f64 = 1e-12;

/// Solves `X'X beta = X'y` for the coefficient vector.
///
/// `columns` are the design matrix columns (intercept first), each of the
/// same length as `y`.
///
/// # Errors
///
/// Returns [`OlsError::Singular`] when elimination hits a near-zero pivot.
pub(crate) fn solve_normal_equations(
    columns: &[Vec<f64>],
    y: &[f64],
) -> Result<Vec<f64>, OlsError> {
    let p = columns.len();

    // X'X, row-major. Symmetric, so compute the upper triangle and mirror.
    let mut xtx = vec![0.0; p * p];
    for i in 0..p {
        for j in i..p {
            let dot: f64 = columns[i]
                .iter()
                .zip(&columns[j])
                .map(|(a, b)| a * b)
                .sum();
            xtx[i * p + j] = dot;
            xtx[j * p + i] = dot;
        }
    }

    // X'y.
    let xty: Vec<f64> = columns
        .iter()
        .map(|col| col.iter().zip(y).map(|(a, b)| a * b).sum())
        .collect();

    gaussian_solve(xtx, xty, p)
}

/// In-place Gaussian elimination with partial pivoting.
fn gaussian_solve(mut a: Vec<f64>, mut b: Vec<f64>, p: usize) -> Result<Vec<f64>, OlsError> {
    for col in 0..p {
        // Partial pivot: largest magnitude in this column at or below the
        // diagonal.
        let mut pivot_row = col;
        let mut pivot_abs = a[col * p + col].abs();
        for row in (col + 1)..p {
            let v = a[row * p + col].abs();
            if v > pivot_abs {
                pivot_abs = v;
                pivot_row = row;
            }
        }
        if pivot_abs < PIVOT_TOL {
            return Err(OlsError::Singular);
        }
        if pivot_row != col {
            for k in 0..p {
                a.swap(col * p + k, pivot_row * p + k);
            }
            b.swap(col, pivot_row);
        }

        let pivot = a[col * p + col];
        for row in (col + 1)..p {
            let factor = a[row * p + col] / pivot;
            if factor == 0.0 {
                continue;
            }
            for k in col..p {
                a[row * p + k] -= factor * a[col * p + k];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution.
    let mut beta = vec![0.0; p];
    for row in (0..p).rev() {
        let mut sum = b[row];
        for k in (row + 1)..p {
            sum -= a[row * p + k] * beta[k];
        }
        beta[row] = sum / a[row * p + row];
    }
    Ok(beta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn solves_exact_line() {
        // y = 1 + 2x on x = 0..5
        let x: Vec<f64> = (0..5).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|xi| 1.0 + 2.0 * xi).collect();
        let columns = vec![vec![1.0; 5], x];
        let beta = solve_normal_equations(&columns, &y).unwrap();
        assert_relative_eq!(beta[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(beta[1], 2.0, epsilon = 1e-10);
    }

    #[test]
    fn solves_two_predictors() {
        // y = 3 - x1 + 0.5*x2
        let x1 = vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let x2 = vec![1.0, 0.0, 2.0, 1.0, 4.0, 2.0];
        let y: Vec<f64> = x1
            .iter()
            .zip(&x2)
            .map(|(a, b)| 3.0 - a + 0.5 * b)
            .collect();
        let columns = vec![vec![1.0; 6], x1, x2];
        let beta = solve_normal_equations(&columns, &y).unwrap();
        assert_relative_eq!(beta[0], 3.0, epsilon = 1e-9);
        assert_relative_eq!(beta[1], -1.0, epsilon = 1e-9);
        assert_relative_eq!(beta[2], 0.5, epsilon = 1e-9);
    }

    #[test]
    fn intercept_only_is_mean() {
        let y = vec![2.0, 4.0, 6.0];
        let columns = vec![vec![1.0; 3]];
        let beta = solve_normal_equations(&columns, &y).unwrap();
        assert_relative_eq!(beta[0], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_variance_predictor_is_singular() {
        let columns = vec![vec![1.0; 4], vec![2.5; 4]];
        let y = vec![1.0, 2.0, 3.0, 4.0];
        assert!(matches!(
            solve_normal_equations(&columns, &y),
            Err(OlsError::Singular)
        ));
    }

    #[test]
    fn collinear_predictors_are_singular() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let doubled: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
        let columns = vec![vec![1.0; 4], x, doubled];
        let y = vec![1.0, 2.0, 3.0, 4.0];
        assert!(matches!(
            solve_normal_equations(&columns, &y),
            Err(OlsError::Singular)
        ));
    }

    #[test]
    fn pivoting_handles_zero_leading_diagonal() {
        // A system whose first diagonal entry is 0 after X'X would be
        // contrived; exercise gaussian_solve directly instead.
        let a = vec![0.0, 1.0, 1.0, 0.0];
        let b = vec![2.0, 3.0];
        let beta = gaussian_solve(a, b, 2).unwrap();
        assert_relative_eq!(beta[0], 3.0, epsilon = 1e-12);
        assert_relative_eq!(beta[1], 2.0, epsilon = 1e-12);
    }
}
