//! Ridge regression baseline

use super::{feature_matrix, ModelError};
use crate::data::Dataset;
use serde::{Deserialize, Serialize};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::ridge_regression::{RidgeRegression, RidgeRegressionParameters};
use smartcore::metrics::mean_squared_error;
use tracing::info;

/// Ridge hyperparameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RidgeParams {
    /// L2 regularization strength
    pub alpha: f64,
}

impl Default for RidgeParams {
    fn default() -> Self {
        Self { alpha: 0.5 }
    }
}

/// Ridge regression wrapper
#[derive(Debug)]
pub struct RidgeModel {
    params: RidgeParams,
    model: Option<RidgeRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
}

impl RidgeModel {
    /// Create a new model with default parameters
    pub fn new() -> Self {
        Self::with_params(RidgeParams::default())
    }

    /// Create a new model with custom parameters
    pub fn with_params(params: RidgeParams) -> Self {
        Self {
            params,
            model: None,
        }
    }

    /// Train the model on a dataset
    pub fn fit(&mut self, dataset: &Dataset) -> Result<(), ModelError> {
        if dataset.is_empty() {
            return Err(ModelError::InvalidData("Empty dataset".to_string()));
        }

        info!(
            "Training ridge regression (alpha={}) with {} samples and {} features",
            self.params.alpha,
            dataset.len(),
            dataset.num_features()
        );

        let x = feature_matrix(&dataset.features)?;
        let model = RidgeRegression::fit(
            &x,
            &dataset.targets,
            RidgeRegressionParameters::default().with_alpha(self.params.alpha),
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

impl Default for RidgeModel {
    fn default() -> Self {
        Self::new()
    }
}
