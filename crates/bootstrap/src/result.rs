//! Output types for interval estimation.

/// Confidence interval for a single model term.
#[derive(Debug, Clone, PartialEq)]
pub struct TermInterval {
    term: String,
    point_estimate: f64,
    lower: f64,
    upper: f64,
    replicates: Option<Vec<f64>>,
}

impl TermInterval {
    pub(crate) fn new(
        term: String,
        point_estimate: f64,
        lower: f64,
        upper: f64,
        replicates: Option<Vec<f64>>,
    ) -> Self {
        Self {
            term,
            point_estimate,
            lower,
            upper,
            replicates,
        }
    }

    /// Returns the term name.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns the estimate from the fit on the original dataset.
    pub fn point_estimate(&self) -> f64 {
        self.point_estimate
    }

    /// Returns the lower interval bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper interval bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the replicate estimates in resample order (index = resample
    /// index), or `None` unless replicate retention was requested.
    pub fn replicates(&self) -> Option<&[f64]> {
        self.replicates.as_deref()
    }

    /// Returns `true` if `value` lies inside the closed interval.
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// The complete result of one [`estimate_intervals`] run: one row per
/// term, sorted by term name.
///
/// [`estimate_intervals`]: crate::estimate_intervals
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTable {
    rows: Vec<TermInterval>,
    num_resamples: usize,
    confidence_level: f64,
}

impl IntervalTable {
    pub(crate) fn new(rows: Vec<TermInterval>, num_resamples: usize, confidence_level: f64) -> Self {
        Self {
            rows,
            num_resamples,
            confidence_level,
        }
    }

    /// Returns the per-term rows, sorted by term name.
    pub fn rows(&self) -> &[TermInterval] {
        &self.rows
    }

    /// Looks up the row for a single term.
    pub fn get(&self, term: &str) -> Option<&TermInterval> {
        self.rows.iter().find(|r| r.term() == term)
    }

    /// Returns the number of terms in the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the fit produced no terms.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of resamples that produced this table.
    pub fn num_resamples(&self) -> usize {
        self.num_resamples
    }

    /// Returns the confidence level of the bounds.
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Consumes the table and returns its rows.
    pub fn into_rows(self) -> Vec<TermInterval> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a IntervalTable {
    type Item = &'a TermInterval;
    type IntoIter = std::slice::Iter<'a, TermInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
