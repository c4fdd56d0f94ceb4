//! Linear model adapter
//!
//! Wraps a linear regression model fitted offline. Both served models (the
//! plain least-squares fit and the lasso fit) are instances of this type;
//! lasso regularization happens at training time, so at inference the two
//! differ only in their coefficient values. The lasso fit typically has
//! more zero or shrunk coefficients.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::{PredictionError, Result};

/// Fitted linear model: coefficient vector plus intercept
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    /// Coefficients (weights) for each feature
    pub coefficients: Array1<f64>,
    /// Intercept (bias) term
    pub intercept: f64,
}

impl LinearModel {
    /// Create a model from fitted parameters
    pub fn new(coefficients: Array1<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Fitted dimensionality N
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Score an already-scaled feature vector
    ///
    /// The caller is responsible for scaling; only the shape is checked
    /// here.
    pub fn predict(&self, vector: &FeatureVector) -> Result<f64> {
        if vector.len() != self.n_features() {
            return Err(PredictionError::ShapeMismatch {
                expected: self.n_features(),
                got: vector.len(),
            });
        }

        Ok(self.coefficients.dot(vector.as_array()) + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict() {
        let model = LinearModel::new(Array1::from_vec(vec![1.0, 2.0]), 0.5);
        let vector = FeatureVector::from_values(vec![0.5, 0.5]).unwrap();

        let prediction = model.predict(&vector).unwrap();
        assert!((prediction - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_predict_zero_coefficients() {
        // A heavily regularized fit can zero out every coefficient
        let model = LinearModel::new(Array1::from_vec(vec![0.0, 0.0]), 1.5);
        let vector = FeatureVector::from_values(vec![0.3, 0.9]).unwrap();

        assert_eq!(model.predict(&vector).unwrap(), 1.5);
    }

    #[test]
    fn test_predict_shape_mismatch() {
        let model = LinearModel::new(Array1::from_vec(vec![1.0, 2.0]), 0.5);
        let vector = FeatureVector::from_values(vec![0.5, 0.5, 0.5]).unwrap();

        let err = model.predict(&vector).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::ShapeMismatch {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_serde_round_trip() {
        let model = LinearModel::new(Array1::from_vec(vec![1.0, -2.5]), 0.25);
        let json = serde_json::to_string(&model).unwrap();
        let loaded: LinearModel = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.intercept, 0.25);
        assert_eq!(loaded.coefficients[1], -2.5);
    }
}
