//! R-style model formulas: a response column and its predictors.

use std::fmt;

use crate::error::OlsError;

/// A model formula naming a response column and zero or more predictor
/// columns. The fit always includes an intercept.
///
/// # Example
///
/// ```
/// use delphi_ols::Formula;
///
/// let formula = Formula::parse("y ~ x1 + x2")?;
/// assert_eq!(formula.response(), "y");
/// assert_eq!(formula.predictors(), ["x1", "x2"]);
///
/// // Intercept-only model:
/// let null = Formula::parse("y ~ 1")?;
/// assert!(null.predictors().is_empty());
/// # Ok::<(), delphi_ols::OlsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    response: String,
    predictors: Vec<String>,
}

impl Formula {
    /// Creates a formula from a response name and predictor names.
    ///
    /// # Errors
    ///
    /// Returns [`OlsError::InvalidFormula`] for empty names or a response
    /// reused as a predictor, [`OlsError::DuplicatePredictor`] for a
    /// repeated predictor.
    pub fn new<S, I, P>(response: S, predictors: I) -> Result<Self, OlsError>
    where
        S: Into<String>,
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        let response = response.into();
        let predictors: Vec<String> = predictors.into_iter().map(Into::into).collect();
        Self::validate(&response, &predictors)?;
        Ok(Self {
            response,
            predictors,
        })
    }

    /// Parses R-style formula text: `"y ~ x1 + x2"`, or `"y ~ 1"` for an
    /// intercept-only model.
    pub fn parse(text: &str) -> Result<Self, OlsError> {
        let mut sides = text.splitn(2, '~');
        let lhs = sides.next().unwrap_or("").trim();
        let rhs = match sides.next() {
            Some(rhs) => rhs.trim(),
            None => {
                return Err(OlsError::InvalidFormula {
                    reason: format!("missing '~' in {text:?}"),
                });
            }
        };

        let predictors: Vec<String> = if rhs == "1" {
            Vec::new()
        } else {
            rhs.split('+').map(|p| p.trim().to_string()).collect()
        };

        Self::new(lhs, predictors)
    }

    /// Returns the response column name.
    pub fn response(&self) -> &str {
        &self.response
    }

    /// Returns the predictor column names.
    pub fn predictors(&self) -> &[String] {
        &self.predictors
    }

    fn validate(response: &str, predictors: &[String]) -> Result<(), OlsError> {
        if response.is_empty() || response.contains(char::is_whitespace) {
            return Err(OlsError::InvalidFormula {
                reason: format!("bad response name {response:?}"),
            });
        }
        for (i, name) in predictors.iter().enumerate() {
            if name.is_empty() || name.contains(char::is_whitespace) {
                return Err(OlsError::InvalidFormula {
                    reason: format!("bad predictor name {name:?}"),
                });
            }
            if name == response {
                return Err(OlsError::InvalidFormula {
                    reason: format!("response {response:?} also appears as a predictor"),
                });
            }
            if predictors[..i].contains(name) {
                return Err(OlsError::DuplicatePredictor { name: name.clone() });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.predictors.is_empty() {
            write!(f, "{} ~ 1", self.response)
        } else {
            write!(f, "{} ~ {}", self.response, self.predictors.join(" + "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let formula = Formula::parse("y ~ x").unwrap();
        assert_eq!(formula.response(), "y");
        assert_eq!(formula.predictors(), ["x"]);
    }

    #[test]
    fn parse_multiple_predictors() {
        let formula = Formula::parse("price ~ year + length").unwrap();
        assert_eq!(formula.response(), "price");
        assert_eq!(formula.predictors(), ["year", "length"]);
    }

    #[test]
    fn parse_tolerates_spacing() {
        let formula = Formula::parse("  y~x1+ x2 ").unwrap();
        assert_eq!(formula.response(), "y");
        assert_eq!(formula.predictors(), ["x1", "x2"]);
    }

    #[test]
    fn parse_intercept_only() {
        let formula = Formula::parse("y ~ 1").unwrap();
        assert!(formula.predictors().is_empty());
    }

    #[test]
    fn parse_missing_tilde() {
        let result = Formula::parse("y + x");
        assert!(matches!(result, Err(OlsError::InvalidFormula { .. })));
    }

    #[test]
    fn parse_empty_sides() {
        assert!(matches!(
            Formula::parse("~ x"),
            Err(OlsError::InvalidFormula { .. })
        ));
        assert!(matches!(
            Formula::parse("y ~ "),
            Err(OlsError::InvalidFormula { .. })
        ));
        assert!(matches!(
            Formula::parse("y ~ x + "),
            Err(OlsError::InvalidFormula { .. })
        ));
    }

    #[test]
    fn parse_duplicate_predictor() {
        let result = Formula::parse("y ~ x + x");
        assert!(matches!(
            result,
            Err(OlsError::DuplicatePredictor { name }) if name == "x"
        ));
    }

    #[test]
    fn parse_response_reused() {
        let result = Formula::parse("y ~ x + y");
        assert!(matches!(result, Err(OlsError::InvalidFormula { .. })));
    }

    #[test]
    fn new_direct() {
        let formula = Formula::new("y", ["x1", "x2"]).unwrap();
        assert_eq!(formula.response(), "y");
        assert_eq!(formula.predictors(), ["x1", "x2"]);
    }

    #[test]
    fn display_round_trips() {
        for text in ["y ~ x", "y ~ x1 + x2", "y ~ 1"] {
            let formula = Formula::parse(text).unwrap();
            assert_eq!(formula.to_string(), text);
        }
    }
}
