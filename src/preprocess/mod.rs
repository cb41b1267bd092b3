//! Missing-value handling
//!
//! The cleaning stage of the pipeline: per-column null diagnostics, row
//! dropping, constant fill and mean imputation, plus the auction-specific
//! zero-out rule for the imbalance flag. Each operation is a plain
//! `Frame -> Frame` function; the driver sequences them explicitly.
//!
//! Ordering contract assumed by the feature stage: drop rows missing the
//! target, constant-fill the low-priority price columns, then mean-fill the
//! rest. After that no column used by feature derivation contains a missing
//! value.

use crate::data::{Column, Frame, FrameError, ROW_ID_COLUMN};

/// Count missing cells per column, in frame order.
///
/// Diagnostic only: the result is printed for the operator, nothing
/// downstream consumes it.
pub fn null_counts(frame: &Frame) -> Vec<(String, usize)> {
    frame
        .columns()
        .map(|(name, column)| (name.to_string(), column.null_count()))
        .collect()
}

/// Remove every row where the named column is missing
pub fn drop_rows_missing(mut frame: Frame, column: &str) -> Result<Frame, FrameError> {
    let keep: Vec<bool> = {
        let col = frame.column(column)?;
        (0..col.len()).map(|row| !col.is_missing(row)).collect()
    };
    frame.retain_rows(&keep);
    Ok(frame)
}

/// Replace missing cells of each named float column with a constant
pub fn fill_constant(mut frame: Frame, columns: &[&str], value: f32) -> Result<Frame, FrameError> {
    for name in columns {
        let cells = frame.float_mut(name)?;
        for cell in cells.iter_mut() {
            if cell.is_none() {
                *cell = Some(value);
            }
        }
    }
    Ok(frame)
}

/// Replace missing cells of every column except `row_id` with the arithmetic
/// mean of that column's non-missing cells.
///
/// The mean is computed from the column's state at call time; a column that
/// is entirely missing has no mean, so its float cells become NaN (integer
/// columns, which have no NaN, stay missing). String columns are skipped.
/// Integer means are rounded to the nearest integer.
pub fn fill_column_means(mut frame: Frame) -> Frame {
    frame.for_each_column_mut(|name, column| {
        if name == ROW_ID_COLUMN {
            return;
        }
        match column {
            Column::Float(cells) => {
                let present: Vec<f32> = cells.iter().flatten().copied().collect();
                let mean = if present.is_empty() {
                    f32::NAN
                } else {
                    present.iter().sum::<f32>() / present.len() as f32
                };
                for cell in cells.iter_mut() {
                    if cell.is_none() {
                        *cell = Some(mean);
                    }
                }
            }
            Column::Int(cells) => {
                let present: Vec<i64> = cells.iter().flatten().copied().collect();
                if present.is_empty() {
                    return;
                }
                let mean = (present.iter().sum::<i64>() as f64 / present.len() as f64).round() as i64;
                for cell in cells.iter_mut() {
                    if cell.is_none() {
                        *cell = Some(mean);
                    }
                }
            }
            Column::Str(_) => {}
        }
    });
    frame
}

/// Set `imbalance_size` to zero wherever `imbalance_buy_sell_flag` is zero.
///
/// A zero flag marks a balanced auction; whatever size the feed reported for
/// those rows is noise.
pub fn zero_imbalance_for_neutral_flag(mut frame: Frame) -> Result<Frame, FrameError> {
    let neutral: Vec<bool> = frame
        .float("imbalance_buy_sell_flag")?
        .iter()
        .map(|cell| *cell == Some(0.0))
        .collect();

    let sizes = frame.float_mut("imbalance_size")?;
    for (cell, is_neutral) in sizes.iter_mut().zip(neutral) {
        if is_neutral {
            *cell = Some(0.0);
        }
    }
    Ok(frame)
}
