//! Min-max scaler adapter
//!
//! Wraps a scaler fitted offline on the training data. Inference applies
//! the identical transform: `(x - min) / range` per feature.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;
use crate::{PredictionError, Result};

/// Fitted min-max normalization transform
///
/// `mins` and `ranges` are per-feature, both of the fitted dimensionality N.
/// Values outside the fitted range extrapolate linearly; there is no
/// clamping to [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinMaxScaler {
    /// Per-feature minimum observed at fit time
    pub mins: Array1<f64>,
    /// Per-feature range (max - min) observed at fit time
    pub ranges: Array1<f64>,
}

impl MinMaxScaler {
    /// Create a scaler from fitted parameters
    pub fn new(mins: Array1<f64>, ranges: Array1<f64>) -> Self {
        Self { mins, ranges }
    }

    /// Fitted dimensionality N
    pub fn n_features(&self) -> usize {
        self.mins.len()
    }

    /// Scale a raw feature vector
    ///
    /// A zero fitted range means the feature was constant during training;
    /// it maps to 0.0 rather than dividing by zero.
    pub fn transform(&self, vector: &FeatureVector) -> Result<FeatureVector> {
        if vector.len() != self.n_features() {
            return Err(PredictionError::ShapeMismatch {
                expected: self.n_features(),
                got: vector.len(),
            });
        }

        vector.validate()?;

        let x = vector.as_array();
        let mut scaled = Array1::zeros(x.len());
        for i in 0..x.len() {
            let range = self.ranges[i];
            scaled[i] = if range.abs() > 1e-10 {
                (x[i] - self.mins[i]) / range
            } else {
                0.0
            };
        }

        Ok(scaled.into())
    }
}
