//! Train/validation splitting
//!
//! Uniform random row partition with a fixed seed, so every run of the
//! pipeline evaluates the models on the same rows.

use crate::data::{Column, Dataset, Frame, FrameError, ROW_ID_COLUMN};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Split a frame into training and validation datasets.
///
/// Shuffles the row indices with `seed`, takes `ceil(n * test_fraction)` rows
/// as the validation partition and the rest as training. The `target` column
/// becomes `y`; every other numeric column (the identifier column excluded)
/// becomes a feature, in frame order. The two partitions are disjoint and
/// together cover every row; the same seed, fraction and input always
/// produce the same split.
pub fn train_test_split(
    frame: &Frame,
    target: &str,
    test_fraction: f64,
    seed: u64,
) -> Result<(Dataset, Dataset), FrameError> {
    let target_col = frame.column(target)?;
    if matches!(target_col, Column::Str(_)) {
        return Err(FrameError::TypeMismatch(target.to_string(), "numeric"));
    }

    let mut feature_names: Vec<String> = Vec::new();
    let mut feature_cols: Vec<&Column> = Vec::new();
    for (name, column) in frame.columns() {
        if name == target || name == ROW_ID_COLUMN || matches!(column, Column::Str(_)) {
            continue;
        }
        feature_names.push(name.to_string());
        feature_cols.push(column);
    }

    let n = frame.n_rows();
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let n_test = ((n as f64) * test_fraction).ceil() as usize;
    let (test_rows, train_rows) = indices.split_at(n_test.min(n));

    let collect = |rows: &[usize]| -> Dataset {
        let mut dataset = Dataset::new(feature_names.clone());
        for &row in rows {
            let features: Vec<f64> = feature_cols
                .iter()
                .map(|col| col.numeric(row).unwrap_or(f64::NAN))
                .collect();
            let target_value = target_col.numeric(row).unwrap_or(f64::NAN);
            dataset.add_sample(features, target_value);
        }
        dataset
    };

    Ok((collect(train_rows), collect(test_rows)))
}
