//! Inference pipeline
//!
//! The only locus of logic in the service: validate the raw vector, scale
//! it, score it with both models, package the pair. Every step either
//! succeeds completely or the whole call fails; there is never a partial
//! result with one prediction and not the other.

use serde::Serialize;

use crate::features::FeatureVector;
use crate::models::bundle::ModelBundle;
use crate::Result;

/// Predictions from both models for a single request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub linear: f64,
    pub lasso: f64,
}

/// Scale-then-score pipeline over an immutable model bundle
///
/// The bundle is loaded once at startup; the pipeline itself holds no
/// mutable state, so a shared reference can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct InferencePipeline {
    bundle: ModelBundle,
}

impl InferencePipeline {
    /// Create a pipeline over a loaded bundle
    pub fn new(bundle: ModelBundle) -> Self {
        Self { bundle }
    }

    /// Fitted dimensionality N
    pub fn n_features(&self) -> usize {
        self.bundle.n_features()
    }

    /// Run the full pipeline on a raw (unscaled) feature vector
    ///
    /// Deterministic: identical input always yields identical output.
    pub fn infer(&self, raw: &FeatureVector) -> Result<Prediction> {
        raw.validate()?;

        let scaled = self.bundle.scaler.transform(raw)?;
        let linear = self.bundle.linear.predict(&scaled)?;
        let lasso = self.bundle.lasso.predict(&scaled)?;

        Ok(Prediction { linear, lasso })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::linear::LinearModel;
    use crate::models::scaler::MinMaxScaler;
    use crate::PredictionError;
    use ndarray::Array1;

    fn pipeline() -> InferencePipeline {
        // mins=[0,0], ranges=[10,10], linear coef=[1,2] + 0.5,
        // lasso coef=[0.5,0] + 1.0
        let bundle = ModelBundle {
            scaler: MinMaxScaler::new(
                Array1::from_vec(vec![0.0, 0.0]),
                Array1::from_vec(vec![10.0, 10.0]),
            ),
            linear: LinearModel::new(Array1::from_vec(vec![1.0, 2.0]), 0.5),
            lasso: LinearModel::new(Array1::from_vec(vec![0.5, 0.0]), 1.0),
        };

        InferencePipeline::new(bundle)
    }

    #[test]
    fn test_infer_matches_direct_evaluation() {
        // [5,5] scales to [0.5,0.5]; linear: 1*0.5 + 2*0.5 + 0.5 = 2.0,
        // lasso: 0.5*0.5 + 0*0.5 + 1.0 = 1.25
        let raw = FeatureVector::from_values(vec![5.0, 5.0]).unwrap();
        let prediction = pipeline().infer(&raw).unwrap();

        assert!((prediction.linear - 2.0).abs() < 1e-12);
        assert!((prediction.lasso - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_infer_is_deterministic() {
        let pipeline = pipeline();
        let raw = FeatureVector::from_values(vec![3.7, -1.2]).unwrap();

        let first = pipeline.infer(&raw).unwrap();
        let second = pipeline.infer(&raw).unwrap();

        assert_eq!(first.linear.to_bits(), second.linear.to_bits());
        assert_eq!(first.lasso.to_bits(), second.lasso.to_bits());
    }

    #[test]
    fn test_infer_shape_mismatch() {
        let raw = FeatureVector::from_values(vec![5.0]).unwrap();
        let err = pipeline().infer(&raw).unwrap_err();

        assert!(matches!(err, PredictionError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_infer_rejects_non_finite() {
        let raw = FeatureVector::from_values(vec![5.0, f64::NEG_INFINITY]).unwrap();
        let err = pipeline().infer(&raw).unwrap_err();

        assert!(matches!(err, PredictionError::InvalidValue(_)));
    }
}
