//! Error types for the delphi-bootstrap crate.

use std::fmt;

/// Identifies which model fit failed: the point-estimate fit on the
/// original dataset, or one of the resample fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitStage {
    /// The initial fit on the unresampled dataset.
    Original,
    /// The fit on the resample with this zero-based index.
    Resample(usize),
}

impl fmt::Display for FitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitStage::Original => write!(f, "original dataset"),
            FitStage::Resample(idx) => write!(f, "resample {idx}"),
        }
    }
}

/// Error type for all fallible operations in the delphi-bootstrap crate.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    /// Returned when the input dataset has zero rows.
    #[error("dataset has no rows")]
    EmptyDataset,

    /// Returned when the confidence level is not strictly between 0 and 1.
    #[error("confidence level must be strictly between 0 and 1, got {level}")]
    InvalidConfidenceLevel {
        /// The rejected confidence level.
        level: f64,
    },

    /// Returned when configuration is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a column is added under a name that already exists.
    #[error("duplicate column: {name}")]
    DuplicateColumn {
        /// The offending column name.
        name: String,
    },

    /// Returned when a column's length does not match the dataset row count.
    #[error("column {column}: expected {expected} rows, got {got}")]
    LengthMismatch {
        /// Name of the mismatched column.
        column: String,
        /// Expected row count.
        expected: usize,
        /// Actual row count.
        got: usize,
    },

    /// Returned when a resample's fit yields a different term set than the
    /// fit on the original dataset.
    #[error("resample {resample} produced terms {got:?}, original fit produced {expected:?}")]
    InconsistentTerms {
        /// Zero-based index of the offending resample.
        resample: usize,
        /// Term names from the original fit.
        expected: Vec<String>,
        /// Term names from the offending resample's fit.
        got: Vec<String>,
    },

    /// Returned when the model-fitting function fails. Aborts the whole
    /// run: silently dropping failed resamples would bias the interval.
    #[error("model fit failed on {stage}: {source}")]
    ModelFit {
        /// Which fit failed.
        stage: FitStage,
        /// The collaborator's error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_dataset() {
        let e = BootstrapError::EmptyDataset;
        assert_eq!(e.to_string(), "dataset has no rows");
    }

    #[test]
    fn display_invalid_confidence_level() {
        let e = BootstrapError::InvalidConfidenceLevel { level: 1.5 };
        assert_eq!(
            e.to_string(),
            "confidence level must be strictly between 0 and 1, got 1.5"
        );
    }

    #[test]
    fn display_invalid_config() {
        let e = BootstrapError::InvalidConfig {
            reason: "num_resamples must be >= 1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "invalid configuration: num_resamples must be >= 1"
        );
    }

    #[test]
    fn display_duplicate_column() {
        let e = BootstrapError::DuplicateColumn {
            name: "x".to_string(),
        };
        assert_eq!(e.to_string(), "duplicate column: x");
    }

    #[test]
    fn display_length_mismatch() {
        let e = BootstrapError::LengthMismatch {
            column: "y".to_string(),
            expected: 10,
            got: 9,
        };
        assert_eq!(e.to_string(), "column y: expected 10 rows, got 9");
    }

    #[test]
    fn display_inconsistent_terms() {
        let e = BootstrapError::InconsistentTerms {
            resample: 7,
            expected: vec!["x".to_string()],
            got: vec!["z".to_string()],
        };
        assert_eq!(
            e.to_string(),
            "resample 7 produced terms [\"z\"], original fit produced [\"x\"]"
        );
    }

    #[test]
    fn display_model_fit_original() {
        let e = BootstrapError::ModelFit {
            stage: FitStage::Original,
            source: "singular matrix".into(),
        };
        assert_eq!(
            e.to_string(),
            "model fit failed on original dataset: singular matrix"
        );
    }

    #[test]
    fn display_model_fit_resample() {
        let e = BootstrapError::ModelFit {
            stage: FitStage::Resample(3),
            source: "singular matrix".into(),
        };
        assert_eq!(e.to_string(), "model fit failed on resample 3: singular matrix");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<BootstrapError>();
    }
}
