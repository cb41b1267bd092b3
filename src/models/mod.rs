//! Baseline regression models
//!
//! Thin wrappers around smartcore estimators. The pipeline treats these as
//! external collaborators with a fixed contract: construct with params,
//! `fit` on a training [`Dataset`](crate::data::Dataset), `predict` on
//! feature rows, `evaluate` to a mean-squared-error score.

pub mod forest;
pub mod knn;
pub mod ridge;

pub use forest::{ForestModel, ForestParams};
pub use knn::{KnnModel, KnnParams};
pub use ridge::{RidgeModel, RidgeParams};

use smartcore::linalg::basic::matrix::DenseMatrix;
use thiserror::Error;

/// Errors that can occur with the models
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Training failed: {0}")]
    TrainingFailed(String),

    #[error("Prediction failed: {0}")]
    PredictionFailed(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Model not trained")]
    NotTrained,
}

/// Build a smartcore matrix from feature rows
pub(crate) fn feature_matrix(features: &[Vec<f64>]) -> Result<DenseMatrix<f64>, ModelError> {
    let rows = features.to_vec();
    DenseMatrix::from_2d_vec(&rows)
        .map_err(|e| ModelError::InvalidData(format!("Failed to create feature matrix: {:?}", e)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::data::Dataset;

    /// Small linear dataset: y = x1 + 2 * x2
    pub fn linear_dataset(n: usize) -> Dataset {
        let mut dataset = Dataset::new(vec!["x1".to_string(), "x2".to_string()]);
        for i in 0..n {
            let x1 = i as f64;
            let x2 = (i % 4) as f64;
            dataset.add_sample(vec![x1, x2], x1 + 2.0 * x2);
        }
        dataset
    }
}
