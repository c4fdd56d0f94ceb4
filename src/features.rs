//! Feature vector parsing and validation
//!
//! Requests arrive either as a comma-separated string (web form) or as a
//! JSON array of numbers (API). Both are parsed into the same typed,
//! position-significant vector before any model sees them.

use ndarray::Array1;

use crate::{PredictionError, Result};

/// Ordered numeric input to the models
///
/// Position is meaning: the element order must match the order the models
/// were fitted with. The vector carries no feature names.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Array1<f64>);

impl FeatureVector {
    /// Build a feature vector from raw values
    ///
    /// Rejects empty input. Non-finite elements are allowed here and caught
    /// by [`FeatureVector::validate`] so the error kind distinguishes the
    /// two cases.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(PredictionError::ParseError(
                "feature vector is empty".to_string(),
            ));
        }

        Ok(Self(Array1::from_vec(values)))
    }

    /// Parse a comma-separated string of floats
    ///
    /// Whitespace around each token is tolerated: `"1.0, 2.5,3"` parses to
    /// three features.
    pub fn parse_csv(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PredictionError::ParseError(
                "feature string is empty".to_string(),
            ));
        }

        let values = trimmed
            .split(',')
            .map(|token| {
                token.trim().parse::<f64>().map_err(|_| {
                    PredictionError::ParseError(format!(
                        "could not parse '{}' as a number",
                        token.trim()
                    ))
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        Self::from_values(values)
    }

    /// Check that every element is a finite number
    pub fn validate(&self) -> Result<()> {
        for (i, &value) in self.0.iter().enumerate() {
            if !value.is_finite() {
                return Err(PredictionError::InvalidValue(format!(
                    "feature {} is not finite ({})",
                    i, value
                )));
            }
        }

        Ok(())
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no elements
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array1<f64> {
        &self.0
    }
}

impl From<Array1<f64>> for FeatureVector {
    fn from(array: Array1<f64>) -> Self {
        Self(array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv() {
        let vector = FeatureVector::parse_csv("1.0,2.5,3").unwrap();
        assert_eq!(vector.len(), 3);
        assert_eq!(vector.as_array()[1], 2.5);
    }

    #[test]
    fn test_parse_csv_tolerates_whitespace() {
        let vector = FeatureVector::parse_csv(" 1.0 , 2.5 ,  3 ").unwrap();
        assert_eq!(vector.len(), 3);
        assert_eq!(vector.as_array()[2], 3.0);
    }

    #[test]
    fn test_parse_csv_malformed_token() {
        let err = FeatureVector::parse_csv("1.0,abc,3").unwrap_err();
        assert!(matches!(err, PredictionError::ParseError(_)));
    }

    #[test]
    fn test_parse_csv_empty() {
        let err = FeatureVector::parse_csv("   ").unwrap_err();
        assert!(matches!(err, PredictionError::ParseError(_)));
    }

    #[test]
    fn test_from_values_empty() {
        let err = FeatureVector::from_values(vec![]).unwrap_err();
        assert!(matches!(err, PredictionError::ParseError(_)));
    }

    #[test]
    fn test_validate_finite() {
        let vector = FeatureVector::from_values(vec![1.0, 2.0]).unwrap();
        assert!(vector.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan() {
        let vector = FeatureVector::from_values(vec![1.0, f64::NAN]).unwrap();
        let err = vector.validate().unwrap_err();
        assert!(matches!(err, PredictionError::InvalidValue(_)));
    }

    #[test]
    fn test_validate_rejects_infinity() {
        let vector = FeatureVector::from_values(vec![f64::INFINITY, 2.0]).unwrap();
        let err = vector.validate().unwrap_err();
        assert!(matches!(err, PredictionError::InvalidValue(_)));
    }
}
