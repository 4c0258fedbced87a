//! Fitted-model view consumed by the estimator.

use std::collections::BTreeMap;

/// The result of one model fit: a mapping from term name to estimate.
///
/// The estimator treats this as opaque beyond its term set and values.
/// Terms are held in sorted name order, which makes the output table
/// deterministic and term-set comparison a linear walk.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    terms: BTreeMap<String, f64>,
}

impl FittedModel {
    /// Creates a fitted model from a term map.
    pub fn new(terms: BTreeMap<String, f64>) -> Self {
        Self { terms }
    }

    /// Creates a fitted model from `(name, estimate)` pairs.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(|(n, v)| (n.into(), v)).collect(),
        }
    }

    /// Returns the term map, sorted by term name.
    pub fn terms(&self) -> &BTreeMap<String, f64> {
        &self.terms
    }

    /// Returns the estimate for a single term.
    pub fn term(&self, name: &str) -> Option<f64> {
        self.terms.get(name).copied()
    }

    /// Returns the term names in sorted order.
    pub fn term_names(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// Returns `true` if both models carry exactly the same term names.
    pub(crate) fn same_terms(&self, other: &FittedModel) -> bool {
        self.terms.len() == other.terms.len()
            && self.terms.keys().zip(other.terms.keys()).all(|(a, b)| a == b)
    }
}
