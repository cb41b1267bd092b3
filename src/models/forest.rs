//! Random forest regression baseline

use super::{feature_matrix, ModelError};
use crate::data::Dataset;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::metrics::mean_squared_error;
use tracing::info;

/// Random forest hyperparameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestParams {
    /// Number of trees in the ensemble
    pub n_trees: usize,
    /// Seed for the bootstrap sampling, fixed for reproducible runs
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 24,
            seed: 42,
        }
    }
}

/// Random forest regressor wrapper
#[derive(Debug)]
pub struct ForestModel {
    params: ForestParams,
    model: Option<RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
}

impl ForestModel {
    /// Create a new model with default parameters
    pub fn new() -> Self {
        Self::with_params(ForestParams::default())
    }

    /// Create a new model with custom parameters
    pub fn with_params(params: ForestParams) -> Self {
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
            "Training random forest ({} trees) with {} samples and {} features",
            self.params.n_trees,
            dataset.len(),
            dataset.num_features()
        );

        let x = feature_matrix(&dataset.features)?;
        let model = RandomForestRegressor::fit(
            &x,
            &dataset.targets,
            RandomForestRegressorParameters::default()
                .with_n_trees(self.params.n_trees)
                .with_seed(self.params.seed),
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

impl Default for ForestModel {
    fn default() -> Self {
        Self::new()
    }
}
