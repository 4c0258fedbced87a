//! Configuration for the bootstrap interval estimator.

use crate::error::BootstrapError;

/// Configuration for [`estimate_intervals`].
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use delphi_bootstrap::BootstrapConfig;
///
/// let config = BootstrapConfig::new()
///     .with_num_resamples(500)
///     .with_confidence_level(0.90)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
///
/// [`estimate_intervals`]: crate::estimate_intervals
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    num_resamples: usize,
    confidence_level: f64,
    keep_replicates: bool,
    seed: Option<u64>,
}

impl BootstrapConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `num_resamples = 1000`, `confidence_level = 0.95`,
    /// `keep_replicates = false`, `seed = None` (entropy-seeded).
    pub fn new() -> Self {
        Self {
            num_resamples: 1000,
            confidence_level: 0.95,
            keep_replicates: false,
            seed: None,
        }
    }

    /// Sets the number of bootstrap resamples.
    pub fn with_num_resamples(mut self, n: usize) -> Self {
        self.num_resamples = n;
        self
    }

    /// Sets the confidence level (e.g. 0.95 for a 95% interval).
    pub fn with_confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = level;
        self
    }

    /// Sets whether per-term replicate estimates are retained in the output.
    pub fn with_keep_replicates(mut self, keep: bool) -> Self {
        self.keep_replicates = keep;
        self
    }

    /// Sets the base RNG seed for reproducible resampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // --- Accessors ---

    /// Returns the number of bootstrap resamples.
    pub fn num_resamples(&self) -> usize {
        self.num_resamples
    }

    /// Returns the confidence level.
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Returns whether replicate estimates are retained.
    pub fn keep_replicates(&self) -> bool {
        self.keep_replicates
    }

    /// Returns the base RNG seed, if one was set.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::InvalidConfidenceLevel`] unless the
    /// confidence level is strictly inside `(0, 1)`, and
    /// [`BootstrapError::InvalidConfig`] if `num_resamples` is zero.
    pub fn validate(&self) -> Result<(), BootstrapError> {
        if self.num_resamples == 0 {
            return Err(BootstrapError::InvalidConfig {
                reason: "num_resamples must be >= 1".to_string(),
            });
        }
        if !self.confidence_level.is_finite()
            || self.confidence_level <= 0.0
            || self.confidence_level >= 1.0
        {
            return Err(BootstrapError::InvalidConfidenceLevel {
                level: self.confidence_level,
            });
        }
        Ok(())
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self::new()
    }
}
