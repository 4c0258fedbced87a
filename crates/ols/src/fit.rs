//! Formula-driven OLS fitting against a `Dataset`.

use std::collections::BTreeMap;

use delphi_bootstrap::{Column, Dataset, FittedModel};
use tracing::debug;

use crate::design::solve_normal_equations;
use crate::error::OlsError;
use crate::formula::Formula;

/// Name given to the intercept term, matching R's `lm` output.
pub const INTERCEPT: &str = "(Intercept)";

/// Fits an ordinary-least-squares model of `formula` on `dataset`.
///
/// The design matrix is an intercept column plus one column per
/// predictor: numeric columns enter as-is, boolean columns as 0/1.
/// Returned terms are [`INTERCEPT`] plus each predictor name.
///
/// # Errors
///
/// - [`OlsError::MissingColumn`] / [`OlsError::NotNumeric`] /
///   [`OlsError::NonFiniteColumn`] for unusable formula columns
/// - [`OlsError::TooFewRows`] if there are fewer rows than parameters
/// - [`OlsError::Singular`] for a rank-deficient design (collinear or
///   zero-variance predictor)
#[tracing::instrument(skip(dataset), fields(n_rows = dataset.n_rows(), formula = %formula))]
pub fn fit(dataset: &Dataset, formula: &Formula) -> Result<FittedModel, OlsError> {
    let y = extract_column(dataset, formula.response())?;
    let n = y.len();

    let mut columns: Vec<Vec<f64>> = Vec::with_capacity(formula.predictors().len() + 1);
    columns.push(vec![1.0; n]);
    for name in formula.predictors() {
        columns.push(extract_column(dataset, name)?);
    }

    let p = columns.len();
    if n < p {
        return Err(OlsError::TooFewRows { rows: n, params: p });
    }

    let beta = solve_normal_equations(&columns, &y)?;
    debug!(params = p, "ols fit complete");

    let mut terms = BTreeMap::new();
    terms.insert(INTERCEPT.to_string(), beta[0]);
    for (name, value) in formula.predictors().iter().zip(&beta[1..]) {
        terms.insert(name.clone(), *value);
    }
    Ok(FittedModel::new(terms))
}

/// Returns a closure fitting `formula`, shaped for
/// [`delphi_bootstrap::estimate_intervals`].
///
/// # Example
///
/// ```ignore
/// let table = estimate_intervals(&data, fitter(Formula::parse("y ~ x")?), &config)?;
/// ```
pub fn fitter(formula: Formula) -> impl FnMut(&Dataset) -> Result<FittedModel, OlsError> {
    move |dataset| fit(dataset, &formula)
}

/// Pulls one formula column out of the dataset as f64 values.
fn extract_column(dataset: &Dataset, name: &str) -> Result<Vec<f64>, OlsError> {
    let column = dataset.column(name).ok_or_else(|| OlsError::MissingColumn {
        name: name.to_string(),
    })?;
    let values: Vec<f64> = match column {
        Column::Numeric(v) => v.clone(),
        Column::Boolean(v) => v.iter().map(|&b| f64::from(u8::from(b))).collect(),
        Column::Categorical(_) => {
            return Err(OlsError::NotNumeric {
                name: name.to_string(),
            });
        }
    };
    if values.iter().any(|v| !v.is_finite()) {
        return Err(OlsError::NonFiniteColumn {
            name: name.to_string(),
        });
    }
    Ok(values)
}
