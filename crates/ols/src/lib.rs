//! Formula-driven ordinary least squares for delphi-bootstrap.
//!
//! This crate is the canonical model-fitting collaborator for the
//! estimator in `delphi-bootstrap`: a [`Formula`] names a response column
//! and its predictors, [`fit`] solves the normal equations against a
//! `Dataset`, and [`fitter`] packages the pair as a closure for
//! `estimate_intervals`.
//!
//! # Quick start
//!
//! ```ignore
//! use delphi_bootstrap::{BootstrapConfig, estimate_intervals};
//! use delphi_ols::{Formula, fitter};
//!
//! let formula = Formula::parse("price ~ year")?;
//! let config = BootstrapConfig::new().with_num_resamples(1000).with_seed(42);
//! let table = estimate_intervals(&data, fitter(formula), &config)?;
//! ```
//!
//! One estimator, one formula shape: numeric and boolean predictors,
//! intercept always included, no transformations or interactions. Callers
//! needing more supply their own fitting function to the estimator.

mod design;
mod error;
mod fit;
mod formula;

pub use error::OlsError;
pub use fit::{INTERCEPT, fit, fitter};
pub use formula::Formula;
