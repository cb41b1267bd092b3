//! Data types for the closing-auction order book dataset
//!
//! This module defines the raw CSV record, the schema constants and the
//! matrix-shaped [`Dataset`] handed to the regression models.

use serde::{Deserialize, Serialize};

/// Name of the dependent variable the models predict
pub const TARGET_COLUMN: &str = "target";

/// Identifier column: excluded from imputation and from the feature matrix
pub const ROW_ID_COLUMN: &str = "row_id";

/// Raw columns in file order
pub const RAW_COLUMNS: [&str; 17] = [
    "stock_id",
    "date_id",
    "seconds_in_bucket",
    "imbalance_size",
    "imbalance_buy_sell_flag",
    "reference_price",
    "matched_size",
    "far_price",
    "near_price",
    "bid_price",
    "bid_size",
    "ask_price",
    "ask_size",
    "wap",
    "target",
    "time_id",
    "row_id",
];

/// One raw tick-level order book record as it appears in the input CSV.
///
/// Every field is optional: an empty CSV cell is a missing value, handled
/// later by the preprocessing stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTick {
    pub stock_id: Option<i64>,
    pub date_id: Option<i64>,
    pub seconds_in_bucket: Option<i64>,
    pub imbalance_size: Option<f32>,
    pub imbalance_buy_sell_flag: Option<f32>,
    pub reference_price: Option<f32>,
    pub matched_size: Option<f32>,
    pub far_price: Option<f32>,
    pub near_price: Option<f32>,
    pub bid_price: Option<f32>,
    pub bid_size: Option<f32>,
    pub ask_price: Option<f32>,
    pub ask_size: Option<f32>,
    pub wap: Option<f32>,
    pub target: Option<f32>,
    pub time_id: Option<i64>,
    pub row_id: Option<String>,
}

/// Dataset for machine learning: a feature matrix plus target values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Feature names, one per matrix column
    pub feature_names: Vec<String>,
    /// Feature matrix (rows = samples, cols = features)
    pub features: Vec<Vec<f64>>,
    /// Target values, one per sample
    pub targets: Vec<f64>,
}

impl Dataset {
    /// Create an empty dataset with the given feature names
    pub fn new(feature_names: Vec<String>) -> Self {
        Self {
            feature_names,
            features: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Add one sample
    pub fn add_sample(&mut self, features: Vec<f64>, target: f64) {
        self.features.push(features);
        self.targets.push(target);
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of features per sample
    pub fn num_features(&self) -> usize {
        self.feature_names.len()
    }
}
