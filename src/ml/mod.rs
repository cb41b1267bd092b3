//! Machine learning utilities: dataset splitting

pub mod split;

pub use split::train_test_split;
