//! Percentile-bootstrap confidence intervals for model terms.
//!
//! Given an in-memory [`Dataset`], a model-fitting function, and a
//! [`BootstrapConfig`], [`estimate_intervals`] fits the model once for
//! point estimates, refits it on resamples drawn uniformly with
//! replacement, and reports per-term percentile intervals as an
//! [`IntervalTable`].
//!
//! ```text
//!  ┌──────────┐     ┌─────────────────┐     ┌───────────────────┐
//!  │ Point fit │────▶│ Replicate loop  │────▶│ Per-term quantiles │
//!  │ (original)│     │ (resample + fit)│     │ (type-7, sorted)   │
//!  └──────────┘     └─────────────────┘     └───────────────────┘
//! ```
//!
//! The fitting function is a collaborator supplied by the caller: anything
//! mapping a `Dataset` to a [`FittedModel`] (a term-name → estimate map).
//! The companion `delphi-ols` crate provides an ordinary-least-squares
//! implementation driven by an R-style formula.
//!
//! # Quick start
//!
//! ```ignore
//! use delphi_bootstrap::{BootstrapConfig, estimate_intervals};
//! use delphi_ols::{Formula, fitter};
//!
//! let formula = Formula::parse("y ~ x")?;
//! let config = BootstrapConfig::new()
//!     .with_num_resamples(500)
//!     .with_seed(42);
//! let table = estimate_intervals(&data, fitter(formula), &config)?;
//! for row in &table {
//!     println!("{}: {} [{}, {}]", row.term(), row.point_estimate(), row.lower(), row.upper());
//! }
//! ```
//!
//! Reproducibility: with a fixed seed, results are bit-identical across
//! runs. Each replicate draws from its own RNG sub-stream (base seed plus
//! replicate index), so determinism does not depend on execution order.

mod config;
mod dataset;
mod error;
mod estimate;
mod model;
mod resample;
mod result;
mod stats;

pub use config::BootstrapConfig;
pub use dataset::{Column, Dataset};
pub use error::{BootstrapError, FitStage};
pub use estimate::estimate_intervals;
pub use model::FittedModel;
pub use result::{IntervalTable, TermInterval};
