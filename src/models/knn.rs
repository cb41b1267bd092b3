//! K-nearest-neighbors regression baseline

use super::{feature_matrix, ModelError};
use crate::data::Dataset;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::distance::euclidian::Euclidian;
use smartcore::metrics::mean_squared_error;
use smartcore::neighbors::knn_regressor::{KNNRegressor, KNNRegressorParameters};
use tracing::info;

/// KNN hyperparameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnnParams {
    /// Number of neighbors (uniform weighting)
    pub k: usize,
}

impl Default for KnnParams {
    fn default() -> Self {
        Self { k: 5 }
    }
}

/// K-nearest-neighbors regressor wrapper
#[derive(Debug)]
pub struct KnnModel {
    params: KnnParams,
    model: Option<KNNRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>, Euclidian<f64>>>,
}

impl KnnModel {
    /// Create a new model with default parameters
    pub fn new() -> Self {
        Self::with_params(KnnParams::default())
    }

    /// Create a new model with custom parameters
    pub fn with_params(params: KnnParams) -> Self {
        Self {
            params,
            model: None,
        }
    }

    /// Train the model on a dataset
    pub fn fit(&mut self, dataset: &Dataset) -> Result<(), ModelError> {
        if dataset.len() < self.params.k {
            return Err(ModelError::InvalidData(format!(
                "Need at least {} samples for k={}, got {}",
                self.params.k,
                self.params.k,
                dataset.len()
            )));
        }

        info!(
            "Training KNN regressor (k={}) with {} samples and {} features",
            self.params.k,
            dataset.len(),
            dataset.num_features()
        );

        let x = feature_matrix(&dataset.features)?;
        let model = KNNRegressor::fit(
            &x,
            &dataset.targets,
            KNNRegressorParameters::default().with_k(self.params.k),
        )
        .map_err(|e| ModelError::TrainingFailed(format!("{:?}", e)))?;

        self.model = Some(model);
        Ok(())
    }

    /// Make predictions on new feature rows
    pub fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>, ModelError> {
        let model = self.model.as_ref().ok_or(ModelError::NotTrained)?;
        let x = feature_matrix(features)?;
        model
            .predict(&x)
            .map_err(|e| ModelError::PredictionFailed(format!("{:?}", e)))
    }

    /// Mean squared error on a held-out dataset
    pub fn evaluate(&self, dataset: &Dataset) -> Result<f64, ModelError> {
        let predictions = self.predict(&dataset.features)?;
        Ok(mean_squared_error(&dataset.targets, &predictions))
    }

    pub fn is_trained(&self) -> bool {
        self.model.is_some()
    }
}

impl Default for KnnModel {
    fn default() -> Self {
        Self::new()
    }
}
