//! # Auction ML - Baseline Models for Closing-Auction Order Book Data
//!
//! This library implements a small batch pipeline over tick-level
//! closing-auction order book records:
//!
//! - CSV loading into a typed, nullable columnar [`Frame`]
//! - Missing-value handling (row drops, constant fill, per-column mean fill)
//! - Derivation of seven order book features (spread, imbalance ratios, ...)
//! - Seeded 80/20 train/validation split
//! - Three baseline regressors (ridge, KNN, random forest) scored by MSE
//!
//! # Example
//!
//! ```rust,no_run
//! use auction_ml::data::{load_frame, TARGET_COLUMN};
//! use auction_ml::features::derive_features;
//! use auction_ml::ml::train_test_split;
//! use auction_ml::models::RidgeModel;
//! use auction_ml::preprocess::{drop_rows_missing, fill_column_means, fill_constant};
//!
//! fn main() -> anyhow::Result<()> {
//!     let frame = load_frame("data/train.csv")?;
//!     let frame = drop_rows_missing(frame, TARGET_COLUMN)?;
//!     let frame = fill_constant(frame, &["far_price", "near_price"], 0.0)?;
//!     let frame = fill_column_means(frame);
//!     let frame = derive_features(frame)?;
//!
//!     let (train, validation) = train_test_split(&frame, TARGET_COLUMN, 0.2, 42)?;
//!     let mut model = RidgeModel::new();
//!     model.fit(&train)?;
//!     println!("MSE: {:.6}", model.evaluate(&validation)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod features;
pub mod ml;
pub mod models;
pub mod preprocess;

// Re-export commonly used items at the crate level
pub use config::Config;
pub use data::{load_frame, save_frame, Column, Dataset, Frame, FrameError, RawTick};
pub use features::derive_features;
pub use ml::train_test_split;
pub use models::{ForestModel, KnnModel, ModelError, RidgeModel};
