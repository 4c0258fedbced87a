//! The bootstrap interval estimator.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::{debug, trace_span};

use crate::config::BootstrapConfig;
use crate::dataset::Dataset;
use crate::error::{BootstrapError, FitStage};
use crate::model::FittedModel;
use crate::resample::{draw_resample, replicate_rng};
use crate::result::{IntervalTable, TermInterval};
use crate::stats::{quantile_type7, sort_f64};

/// Estimates percentile-method confidence intervals for every term of a
/// fitted model.
///
/// Fits `fit_fn` once on `dataset` for the point estimates, then
/// `config.num_resamples()` more times on resamples drawn uniformly with
/// replacement (same row count). Each term's interval bounds are the
/// `alpha/2` and `1 - alpha/2` empirical quantiles of its replicate
/// estimates (R type-7 interpolation), with `alpha = 1 - confidence_level`.
///
/// Runs with the same seed produce bit-identical tables. Each replicate
/// draws from its own sub-stream derived from the base seed and the
/// replicate index.
///
/// # Arguments
/// - `dataset` — the observed data; must have at least one row
/// - `fit_fn` — model-fitting collaborator; called on the original dataset
///   and once per resample
/// - `config` — resample count, confidence level, replicate retention, seed
///
/// # Errors
///
/// - [`BootstrapError::EmptyDataset`] if `dataset` has zero rows
/// - [`BootstrapError::InvalidConfidenceLevel`] /
///   [`BootstrapError::InvalidConfig`] for a bad `config`
/// - [`BootstrapError::ModelFit`] if any fit fails; the run aborts at the
///   first failure rather than skipping the resample, since dropped
///   resamples would bias the interval
/// - [`BootstrapError::InconsistentTerms`] if a resample's fit produces a
///   term set different from the original fit's
///
/// # Example
///
/// ```
/// use delphi_bootstrap::{BootstrapConfig, Column, Dataset, FittedModel, estimate_intervals};
///
/// let data = Dataset::new()
///     .with_column("x", Column::Numeric(vec![1.0, 2.0, 3.0, 4.0, 5.0]))?;
///
/// // A trivial collaborator: the term is the sample mean of `x`.
/// let fit = |d: &Dataset| -> Result<FittedModel, std::convert::Infallible> {
///     let x = d.numeric("x").expect("column exists");
///     Ok(FittedModel::from_terms([(
///         "mean_x",
///         x.iter().sum::<f64>() / x.len() as f64,
///     )]))
/// };
///
/// let config = BootstrapConfig::new().with_num_resamples(200).with_seed(42);
/// let table = estimate_intervals(&data, fit, &config)?;
/// let row = table.get("mean_x").unwrap();
/// assert!(row.lower() <= row.point_estimate());
/// assert!(row.point_estimate() <= row.upper());
/// # Ok::<(), delphi_bootstrap::BootstrapError>(())
/// ```
#[tracing::instrument(skip_all, fields(
    n_rows = dataset.n_rows(),
    num_resamples = config.num_resamples(),
    confidence_level = config.confidence_level(),
))]
pub fn estimate_intervals<F, E>(
    dataset: &Dataset,
    mut fit_fn: F,
    config: &BootstrapConfig,
) -> Result<IntervalTable, BootstrapError>
where
    F: FnMut(&Dataset) -> Result<FittedModel, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    config.validate()?;

    if dataset.n_rows() == 0 {
        return Err(BootstrapError::EmptyDataset);
    }

    // Point estimates from the unresampled data.
    let point = fit_fn(dataset).map_err(|e| BootstrapError::ModelFit {
        stage: FitStage::Original,
        source: Box::new(e),
    })?;
    debug!(terms = point.terms().len(), "point fit complete");

    let base_seed = config.seed().unwrap_or_else(|| rand::rng().random());

    let mut replicates: BTreeMap<String, Vec<f64>> = point
        .term_names()
        .map(|n| (n.to_string(), Vec::with_capacity(config.num_resamples())))
        .collect();

    for i in 0..config.num_resamples() {
        let _rep = trace_span!("replicate", idx = i).entered();
        let mut rng = replicate_rng(base_seed, i);
        let resampled = draw_resample(dataset, &mut rng);

        let fitted = fit_fn(&resampled).map_err(|e| BootstrapError::ModelFit {
            stage: FitStage::Resample(i),
            source: Box::new(e),
        })?;

        if !fitted.same_terms(&point) {
            return Err(BootstrapError::InconsistentTerms {
                resample: i,
                expected: point.term_names().map(String::from).collect(),
                got: fitted.term_names().map(String::from).collect(),
            });
        }

        for (name, value) in fitted.terms() {
            replicates
                .get_mut(name)
                .expect("term set verified against point fit")
                .push(*value);
        }
    }

    let alpha = 1.0 - config.confidence_level();
    let (p_lo, p_hi) = (alpha / 2.0, 1.0 - alpha / 2.0);

    let mut rows = Vec::with_capacity(replicates.len());
    for (term, values) in replicates {
        // Quantiles need sorted data; retained replicates stay in
        // resample order (index = resample index).
        let (sorted, kept) = if config.keep_replicates() {
            let mut s = values.clone();
            sort_f64(&mut s);
            (s, Some(values))
        } else {
            let mut s = values;
            sort_f64(&mut s);
            (s, None)
        };

        let lower = quantile_type7(&sorted, p_lo);
        let upper = quantile_type7(&sorted, p_hi);
        let point_estimate = point
            .term(&term)
            .expect("term set verified against point fit");

        rows.push(TermInterval::new(term, point_estimate, lower, upper, kept));
    }

    debug!(terms = rows.len(), "bootstrap intervals computed");
    Ok(IntervalTable::new(
        rows,
        config.num_resamples(),
        config.confidence_level(),
    ))
}
