//! Batch entry point for the auction baseline pipeline
//!
//! This program:
//! 1. Loads the raw closing-auction order book CSV named by the config file
//! 2. Cleans missing values (drop, constant fill, mean fill) and applies the
//!    neutral-flag zero-out rule
//! 3. Derives the order book features
//! 4. Splits 80/20 and trains three baseline regressors
//! 5. Reports the validation MSE of each model

use anyhow::Result;
use auction_ml::config::Config;
use auction_ml::data::{load_frame, save_frame, Frame, TARGET_COLUMN};
use auction_ml::features::derive_features;
use auction_ml::ml::train_test_split;
use auction_ml::models::{ForestModel, KnnModel, RidgeModel};
use auction_ml::preprocess::{
    drop_rows_missing, fill_column_means, fill_constant, null_counts,
    zero_imbalance_for_neutral_flag,
};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Auction price columns that are absent outside the final minutes of the
/// bucket; filled with zero rather than a mean
const ZERO_FILL_COLUMNS: [&str; 2] = ["far_price", "near_price"];

const TEST_FRACTION: f64 = 0.2;
const SPLIT_SEED: u64 = 42;

#[derive(Parser)]
#[command(name = "auction_ml")]
#[command(about = "Baseline regression models for closing-auction order book data")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Write the processed dataset to the configured output path
    #[arg(long)]
    write_processed: bool,
}

fn print_null_counts(title: &str, frame: &Frame) {
    println!("\n{}", title);
    println!("{}", "-".repeat(40));
    for (name, count) in null_counts(frame) {
        println!("{:<26} {}", name, count);
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    println!("\n{}", "=".repeat(60));
    println!("  Auction ML - Baseline Models for Order Book Data");
    println!("{}\n", "=".repeat(60));

    let config = Config::from_file(&cli.config)?;

    info!("Loading dataset from {:?}", config.input_path());
    let raw = load_frame(config.input_path())?;
    info!("Loaded {} rows, {} columns", raw.n_rows(), raw.n_cols());

    print_null_counts("Null values per column (raw)", &raw);

    println!("\n🧹 Cleaning missing values");
    println!("{}", "-".repeat(40));
    let frame = drop_rows_missing(raw, TARGET_COLUMN)?;
    info!("Rows after dropping missing targets: {}", frame.n_rows());
    let frame = fill_constant(frame, &ZERO_FILL_COLUMNS, 0.0)?;
    let frame = fill_column_means(frame);
    let frame = zero_imbalance_for_neutral_flag(frame)?;

    print_null_counts("Null values per column (cleaned)", &frame);

    println!("\n🧮 Deriving order book features");
    println!("{}", "-".repeat(40));
    let frame = derive_features(frame)?;
    info!("Frame now has {} columns", frame.n_cols());

    if cli.write_processed {
        info!("Writing processed dataset to {:?}", config.output_path());
        save_frame(&frame, config.output_path())?;
    }

    println!("\n📊 Splitting into training and validation sets (80/20)");
    println!("{}", "-".repeat(40));
    let (train, validation) = train_test_split(&frame, TARGET_COLUMN, TEST_FRACTION, SPLIT_SEED)?;
    info!(
        "Train: {} rows, Validation: {} rows",
        train.len(),
        validation.len()
    );

    println!("\n🤖 Training baseline models");
    println!("{}", "-".repeat(40));

    println!("1. Ridge Regression");
    let mut ridge = RidgeModel::new();
    ridge.fit(&train)?;
    let ridge_mse = ridge.evaluate(&validation)?;

    println!("2. K Nearest Neighbors");
    let mut knn = KnnModel::new();
    knn.fit(&train)?;
    let knn_mse = knn.evaluate(&validation)?;

    println!("3. Random Forest");
    let mut forest = ForestModel::new();
    forest.fit(&train)?;
    let forest_mse = forest.evaluate(&validation)?;

    println!("\n✅ Validation results (mean squared error)");
    println!("{}", "-".repeat(40));
    println!("{:<24} {:.6}", "Ridge Regression", ridge_mse);
    println!("{:<24} {:.6}", "K Nearest Neighbors", knn_mse);
    println!("{:<24} {:.6}", "Random Forest", forest_mse);

    Ok(())
}
