//! Columnar dataset type the estimator operates on.

use crate::error::BootstrapError;

/// A single named column of values.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// Floating-point values.
    Numeric(Vec<f64>),
    /// String-labelled categories.
    Categorical(Vec<String>),
    /// Boolean flags.
    Boolean(Vec<bool>),
}

impl Column {
    /// Returns the number of rows in this column.
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
            Column::Boolean(v) => v.len(),
        }
    }

    /// Returns `true` if the column has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builds a new column by gathering the given row indices, in order.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds (caller's responsibility;
    /// resampling only draws in-range indices).
    pub(crate) fn gather(&self, indices: &[usize]) -> Column {
        match self {
            Column::Numeric(v) => Column::Numeric(indices.iter().map(|&i| v[i]).collect()),
            Column::Categorical(v) => {
                Column::Categorical(indices.iter().map(|&i| v[i].clone()).collect())
            }
            Column::Boolean(v) => Column::Boolean(indices.iter().map(|&i| v[i]).collect()),
        }
    }
}

/// An ordered collection of equal-length named columns.
///
/// This is the immutable input to [`estimate_intervals`]: one column per
/// variable, one row per observation. Column order is insertion order.
///
/// # Example
///
/// ```
/// use delphi_bootstrap::{Column, Dataset};
///
/// let data = Dataset::new()
///     .with_column("x", Column::Numeric(vec![1.0, 2.0, 3.0]))?
///     .with_column("y", Column::Numeric(vec![2.1, 3.9, 6.2]))?;
/// assert_eq!(data.n_rows(), 3);
/// assert_eq!(data.n_columns(), 2);
/// # Ok::<(), delphi_bootstrap::BootstrapError>(())
/// ```
///
/// [`estimate_intervals`]: crate::estimate_intervals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<(String, Column)>,
}

impl Dataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Adds a column, consuming and returning the dataset for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`BootstrapError::DuplicateColumn`] if a column with this
    /// name exists, or [`BootstrapError::LengthMismatch`] if the column's
    /// length differs from the existing row count.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<Self, BootstrapError> {
        self.insert_column(name, column)?;
        Ok(self)
    }

    /// Adds a column in place. Same validation as [`Dataset::with_column`].
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        column: Column,
    ) -> Result<(), BootstrapError> {
        let name = name.into();
        if self.columns.iter().any(|(n, _)| *n == name) {
            return Err(BootstrapError::DuplicateColumn { name });
        }
        if let Some((_, first)) = self.columns.first()
            && column.len() != first.len()
        {
            return Err(BootstrapError::LengthMismatch {
                column: name,
                expected: first.len(),
                got: column.len(),
            });
        }
        self.columns.push((name, column));
        Ok(())
    }

    /// Returns the number of rows (0 for a dataset with no columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    /// Returns the number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
    }

    /// Looks up a numeric column by name. Returns `None` if the column is
    /// missing or not numeric.
    pub fn numeric(&self, name: &str) -> Option<&[f64]> {
        match self.column(name)? {
            Column::Numeric(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Builds a new dataset by gathering the given row indices from every
    /// column, in order. Indices may repeat.
    pub(crate) fn gather(&self, indices: &[usize]) -> Dataset {
        Dataset {
            columns: self
                .columns
                .iter()
                .map(|(n, c)| (n.clone(), c.gather(indices)))
                .collect(),
        }
    }
}
