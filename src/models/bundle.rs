//! Startup loading of fitted model artifacts
//!
//! Three JSON documents are read once before the server starts: the min-max
//! scaler, the plain linear model, and the lasso model. The loaded bundle is
//! immutable for the process lifetime. Any missing, corrupt, or
//! dimensionally inconsistent artifact is fatal.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::models::linear::LinearModel;
use crate::models::scaler::MinMaxScaler;
use crate::{PredictionError, Result};

/// File names of the persisted artifacts within the artifact directory
pub const SCALER_FILE: &str = "minmax.json";
pub const LINEAR_MODEL_FILE: &str = "linear_model.json";
pub const LASSO_MODEL_FILE: &str = "lasso_model.json";

/// The complete set of fitted parameters the service needs
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub scaler: MinMaxScaler,
    pub linear: LinearModel,
    pub lasso: LinearModel,
}

impl ModelBundle {
    /// Load all three artifacts from a directory and cross-check them
    ///
    /// The fitted dimensionality N is implicit in each artifact; it must
    /// agree across the scaler and both models.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();

        let scaler: MinMaxScaler = load_json(&dir.join(SCALER_FILE))?;
        let linear: LinearModel = load_json(&dir.join(LINEAR_MODEL_FILE))?;
        let lasso: LinearModel = load_json(&dir.join(LASSO_MODEL_FILE))?;

        let bundle = Self {
            scaler,
            linear,
            lasso,
        };
        bundle.check_consistency()?;

        info!(
            n_features = bundle.n_features(),
            "loaded scaler and both models"
        );

        Ok(bundle)
    }

    /// Fitted dimensionality N
    pub fn n_features(&self) -> usize {
        self.scaler.n_features()
    }

    fn check_consistency(&self) -> Result<()> {
        let n = self.scaler.n_features();

        if n == 0 {
            return Err(PredictionError::LoadError(
                "scaler has zero features".to_string(),
            ));
        }

        if self.scaler.ranges.len() != n {
            return Err(PredictionError::LoadError(format!(
                "scaler is inconsistent: {} mins but {} ranges",
                n,
                self.scaler.ranges.len()
            )));
        }

        if self.linear.n_features() != n {
            return Err(PredictionError::LoadError(format!(
                "linear model expects {} features but scaler has {}",
                self.linear.n_features(),
                n
            )));
        }

        if self.lasso.n_features() != n {
            return Err(PredictionError::LoadError(format!(
                "lasso model expects {} features but scaler has {}",
                self.lasso.n_features(),
                n
            )));
        }

        Ok(())
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).map_err(|e| {
        PredictionError::LoadError(format!("cannot open {}: {}", path.display(), e))
    })?;

    serde_json::from_reader(file).map_err(|e| {
        PredictionError::LoadError(format!("cannot parse {}: {}", path.display(), e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;
    use serde::Serialize;
    use std::io::Write;

    fn write_artifact<T: Serialize>(dir: &Path, name: &str, artifact: &T) {
        let file = File::create(dir.join(name)).unwrap();
        serde_json::to_writer(file, artifact).unwrap();
    }

    fn write_valid_bundle(dir: &Path) {
        let scaler = MinMaxScaler::new(
            Array1::from_vec(vec![0.0, 0.0]),
            Array1::from_vec(vec![10.0, 10.0]),
        );
        let linear = LinearModel::new(Array1::from_vec(vec![1.0, 2.0]), 0.5);
        let lasso = LinearModel::new(Array1::from_vec(vec![0.5, 0.0]), 1.0);

        write_artifact(dir, SCALER_FILE, &scaler);
        write_artifact(dir, LINEAR_MODEL_FILE, &linear);
        write_artifact(dir, LASSO_MODEL_FILE, &lasso);
    }

    #[test]
    fn test_load_valid_bundle() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_bundle(dir.path());

        let bundle = ModelBundle::load(dir.path()).unwrap();
        assert_eq!(bundle.n_features(), 2);
        assert_eq!(bundle.linear.intercept, 0.5);
        assert_eq!(bundle.lasso.coefficients[1], 0.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let err = ModelBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, PredictionError::LoadError(_)));
    }

    #[test]
    fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_bundle(dir.path());

        let mut file = File::create(dir.path().join(LINEAR_MODEL_FILE)).unwrap();
        file.write_all(b"not json at all").unwrap();

        let err = ModelBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, PredictionError::LoadError(_)));
    }

    #[test]
    fn test_load_dimension_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_bundle(dir.path());

        // Lasso model fitted with three features, scaler with two
        let lasso = LinearModel::new(Array1::from_vec(vec![0.5, 0.0, 0.1]), 1.0);
        write_artifact(dir.path(), LASSO_MODEL_FILE, &lasso);

        let err = ModelBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, PredictionError::LoadError(_)));
    }

    #[test]
    fn test_consistency_rejects_empty_scaler() {
        let bundle = ModelBundle {
            scaler: MinMaxScaler::new(Array1::from_vec(vec![]), Array1::from_vec(vec![])),
            linear: LinearModel::new(Array1::from_vec(vec![1.0]), 0.0),
            lasso: LinearModel::new(Array1::from_vec(vec![1.0]), 0.0),
        };

        let err = bundle.check_consistency().unwrap_err();
        assert!(matches!(err, PredictionError::LoadError(_)));
    }
}
