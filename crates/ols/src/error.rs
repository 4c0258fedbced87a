//! Error types for the delphi-ols crate.

/// Error type for all fallible operations in the delphi-ols crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OlsError {
    /// Returned when formula text or structure is malformed.
    #[error("invalid formula: {reason}")]
    InvalidFormula {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a predictor name appears more than once.
    #[error("duplicate predictor: {name}")]
    DuplicatePredictor {
        /// The repeated predictor name.
        name: String,
    },

    /// Returned when a formula names a column the dataset lacks.
    #[error("column not found: {name}")]
    MissingColumn {
        /// The missing column name.
        name: String,
    },

    /// Returned when a formula names a categorical column. Only numeric
    /// and boolean columns can enter the design matrix.
    #[error("column {name} is not numeric")]
    NotNumeric {
        /// The offending column name.
        name: String,
    },

    /// Returned when a column contains NaN or infinity.
    #[error("non-finite value in column {name}")]
    NonFiniteColumn {
        /// The offending column name.
        name: String,
    },

    /// Returned when there are fewer rows than model parameters.
    #[error("too few rows: {rows} rows for {params} parameters")]
    TooFewRows {
        /// Number of dataset rows.
        rows: usize,
        /// Number of parameters (intercept plus predictors).
        params: usize,
    },

    /// Returned when the normal equations cannot be solved: a collinear
    /// or zero-variance predictor makes the design matrix rank-deficient.
    #[error("design matrix is singular (collinear or zero-variance predictor)")]
    Singular,
}
