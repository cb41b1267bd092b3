//! End-to-end pipeline test on a small synthetic dataset

use auction_ml::data::{load_frame, TARGET_COLUMN};
use auction_ml::features::derive_features;
use auction_ml::ml::train_test_split;
use auction_ml::models::{ForestModel, KnnModel, RidgeModel};
use auction_ml::preprocess::{
    drop_rows_missing, fill_column_means, fill_constant, null_counts,
    zero_imbalance_for_neutral_flag,
};
use tempfile::tempdir;

const HEADER: &str = "stock_id,date_id,seconds_in_bucket,imbalance_size,imbalance_buy_sell_flag,reference_price,matched_size,far_price,near_price,bid_price,bid_size,ask_price,ask_size,wap,target,time_id,row_id";

/// Ten rows with gaps in far_price, near_price and bid_size
fn synthetic_csv() -> String {
    let mut lines = vec![HEADER.to_string()];
    for i in 0..10 {
        let seconds = i * 60;
        let far = if i < 5 { String::new() } else { format!("{}", 1.0 + i as f32 * 0.01) };
        let near = if i < 5 { String::new() } else { format!("{}", 0.99 + i as f32 * 0.01) };
        let bid_size = if i == 3 { String::new() } else { format!("{}", 80.0 + i as f32 * 5.0) };
        let flag = if i % 3 == 0 { 0.0 } else { 1.0 };
        lines.push(format!(
            "0,0,{seconds},{imb},{flag},1.0,{matched},{far},{near},{bid_price},{bid_size},{ask_price},{ask_size},1.0,{target},{i},0_{seconds}_0",
            seconds = seconds,
            imb = 10.0 + i as f32,
            flag = flag,
            matched = 40.0 + i as f32 * 2.0,
            far = far,
            near = near,
            bid_price = 10.0 + i as f32 * 0.1,
            bid_size = bid_size,
            ask_price = 9.5 + i as f32 * 0.1,
            ask_size = 50.0 + i as f32 * 3.0,
            target = (i as f32 - 5.0) / 10.0,
            i = i,
        ));
    }
    lines.join("\n") + "\n"
}

#[test]
fn test_full_pipeline_produces_finite_mse_for_all_models() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ticks.csv");
    std::fs::write(&path, synthetic_csv()).unwrap();

    let frame = load_frame(&path).unwrap();
    assert_eq!(frame.n_rows(), 10);

    // Cleaning, in the contract order
    let frame = drop_rows_missing(frame, TARGET_COLUMN).unwrap();
    let frame = fill_constant(frame, &["far_price", "near_price"], 0.0).unwrap();
    let frame = fill_column_means(frame);
    let frame = zero_imbalance_for_neutral_flag(frame).unwrap();

    // Nothing the feature stage reads may still be missing
    for (name, count) in null_counts(&frame) {
        if name != "row_id" {
            assert_eq!(count, 0, "column {} still has missing values", name);
        }
    }

    let frame = derive_features(frame).unwrap();
    assert_eq!(frame.n_cols(), 17 + 7);

    // Rows with a neutral flag had their imbalance size forced to zero
    let flags = frame.float("imbalance_buy_sell_flag").unwrap().to_vec();
    let sizes = frame.float("imbalance_size").unwrap().to_vec();
    for (flag, size) in flags.iter().zip(sizes.iter()) {
        if *flag == Some(0.0) {
            assert_eq!(*size, Some(0.0));
        }
    }

    let (train, validation) = train_test_split(&frame, TARGET_COLUMN, 0.2, 42).unwrap();
    assert_eq!(train.len() + validation.len(), 10);
    assert_eq!(validation.len(), 2);

    let mut ridge = RidgeModel::new();
    ridge.fit(&train).unwrap();
    let ridge_mse = ridge.evaluate(&validation).unwrap();
    assert!(ridge_mse.is_finite());

    let mut knn = KnnModel::new();
    knn.fit(&train).unwrap();
    let knn_mse = knn.evaluate(&validation).unwrap();
    assert!(knn_mse.is_finite());

    let mut forest = ForestModel::new();
    forest.fit(&train).unwrap();
    let forest_mse = forest.evaluate(&validation).unwrap();
    assert!(forest_mse.is_finite());
}

#[test]
fn test_pipeline_is_reproducible_across_runs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ticks.csv");
    std::fs::write(&path, synthetic_csv()).unwrap();

    let run = || {
        let frame = load_frame(&path).unwrap();
        let frame = drop_rows_missing(frame, TARGET_COLUMN).unwrap();
        let frame = fill_constant(frame, &["far_price", "near_price"], 0.0).unwrap();
        let frame = fill_column_means(frame);
        let frame = zero_imbalance_for_neutral_flag(frame).unwrap();
        let frame = derive_features(frame).unwrap();
        let (train, validation) = train_test_split(&frame, TARGET_COLUMN, 0.2, 42).unwrap();

        let mut model = RidgeModel::new();
        model.fit(&train).unwrap();
        model.evaluate(&validation).unwrap()
    };

    assert_eq!(run(), run());
}
