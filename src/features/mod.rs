//! Feature derivation for the order book frame
//!
//! Appends seven derived columns, each a closed-form elementwise function of
//! the raw columns. The cleaning stage is assumed to have run already: no
//! source column used here should still contain a missing value.
//!
//! The ratio columns divide without guarding the denominator. A zero
//! denominator yields ±inf (or NaN for 0/0) per IEEE float semantics and
//! flows into model training unchanged; the original pipeline behaves the
//! same way, so no guard is added here.

use crate::data::{Column, Frame, FrameError};

/// Derived columns in generation order
pub const DERIVED_COLUMNS: [&str; 7] = [
    "spread",
    "imbalance_ratio",
    "volume",
    "mid_price",
    "liquidity_imbalance",
    "matched_ratio",
    "minutes",
];

/// A numeric column as f32 values, missing cells as NaN
fn float_series(frame: &Frame, name: &str) -> Result<Vec<f32>, FrameError> {
    match frame.column(name)? {
        Column::Float(v) => Ok(v.iter().map(|c| c.unwrap_or(f32::NAN)).collect()),
        Column::Int(v) => Ok(v
            .iter()
            .map(|c| c.map_or(f32::NAN, |x| x as f32))
            .collect()),
        Column::Str(_) => Err(FrameError::TypeMismatch(name.to_string(), "numeric")),
    }
}

/// Append the seven derived feature columns.
///
/// Errors if a source column is absent; never mutates existing columns.
pub fn derive_features(mut frame: Frame) -> Result<Frame, FrameError> {
    let bid_price = float_series(&frame, "bid_price")?;
    let ask_price = float_series(&frame, "ask_price")?;
    let bid_size = float_series(&frame, "bid_size")?;
    let ask_size = float_series(&frame, "ask_size")?;
    let imbalance_size = float_series(&frame, "imbalance_size")?;
    let matched_size = float_series(&frame, "matched_size")?;
    let seconds = float_series(&frame, "seconds_in_bucket")?;

    let n = frame.n_rows();
    let mut spread = Vec::with_capacity(n);
    let mut imbalance_ratio = Vec::with_capacity(n);
    let mut volume = Vec::with_capacity(n);
    let mut mid_price = Vec::with_capacity(n);
    let mut liquidity_imbalance = Vec::with_capacity(n);
    let mut matched_ratio = Vec::with_capacity(n);
    let mut minutes = Vec::with_capacity(n);

    for i in 0..n {
        let total_size = bid_size[i] + ask_size[i];
        spread.push(Some(bid_price[i] - ask_price[i]));
        imbalance_ratio.push(Some(imbalance_size[i] / matched_size[i]));
        volume.push(Some(total_size));
        mid_price.push(Some((ask_price[i] + bid_price[i]) / 2.0));
        liquidity_imbalance.push(Some((bid_size[i] - ask_size[i]) / total_size));
        matched_ratio.push(Some(matched_size[i] / total_size));
        minutes.push(Some((seconds[i] / 60.0).floor()));
    }

    frame.push_column("spread", Column::Float(spread))?;
    frame.push_column("imbalance_ratio", Column::Float(imbalance_ratio))?;
    frame.push_column("volume", Column::Float(volume))?;
    frame.push_column("mid_price", Column::Float(mid_price))?;
    frame.push_column("liquidity_imbalance", Column::Float(liquidity_imbalance))?;
    frame.push_column("matched_ratio", Column::Float(matched_ratio))?;
    frame.push_column("minutes", Column::Float(minutes))?;

    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_row(
        bid_price: f32,
        ask_price: f32,
        bid_size: f32,
        ask_size: f32,
        imbalance_size: f32,
        matched_size: f32,
        seconds: i64,
    ) -> Frame {
        let mut frame = Frame::new();
        frame
            .push_column("bid_price", Column::Float(vec![Some(bid_price)]))
            .unwrap();
        frame
            .push_column("ask_price", Column::Float(vec![Some(ask_price)]))
            .unwrap();
        frame
            .push_column("bid_size", Column::Float(vec![Some(bid_size)]))
            .unwrap();
        frame
            .push_column("ask_size", Column::Float(vec![Some(ask_size)]))
            .unwrap();
        frame
            .push_column("imbalance_size", Column::Float(vec![Some(imbalance_size)]))
            .unwrap();
        frame
            .push_column("matched_size", Column::Float(vec![Some(matched_size)]))
            .unwrap();
        frame
            .push_column("seconds_in_bucket", Column::Int(vec![Some(seconds)]))
            .unwrap();
        frame
    }

    fn value(frame: &Frame, name: &str) -> f32 {
        frame.float(name).unwrap()[0].unwrap()
    }

    #[test]
    fn test_derived_columns_match_formulas() {
        let frame = frame_with_row(10.0, 9.5, 100.0, 50.0, 20.0, 40.0, 125);
        let frame = derive_features(frame).unwrap();

        assert_eq!(value(&frame, "spread"), 0.5);
        assert_eq!(value(&frame, "imbalance_ratio"), 0.5);
        assert_eq!(value(&frame, "volume"), 150.0);
        assert_eq!(value(&frame, "mid_price"), 9.75);
        assert!((value(&frame, "liquidity_imbalance") - 1.0 / 3.0).abs() < 1e-6);
        assert!((value(&frame, "matched_ratio") - 0.266_666_7).abs() < 1e-6);
        assert_eq!(value(&frame, "minutes"), 2.0);
    }

    #[test]
    fn test_source_columns_are_unchanged() {
        let frame = frame_with_row(10.0, 9.5, 100.0, 50.0, 20.0, 40.0, 125);
        let before = frame.clone();
        let after = derive_features(frame).unwrap();

        for (name, column) in before.columns() {
            assert_eq!(after.column(name).unwrap(), column);
        }
        assert_eq!(after.n_cols(), before.n_cols() + DERIVED_COLUMNS.len());
    }

    #[test]
    fn test_zero_denominators_propagate_per_ieee() {
        let frame = frame_with_row(10.0, 9.5, 0.0, 0.0, 20.0, 0.0, 0);
        let frame = derive_features(frame).unwrap();

        assert!(value(&frame, "imbalance_ratio").is_infinite()); // 20 / 0
        assert!(value(&frame, "liquidity_imbalance").is_nan()); // 0 / 0
        assert!(value(&frame, "matched_ratio").is_nan()); // 0 / 0
        assert_eq!(value(&frame, "volume"), 0.0);
    }

    #[test]
    fn test_missing_source_column_fails() {
        let mut frame = Frame::new();
        frame
            .push_column("bid_price", Column::Float(vec![Some(1.0)]))
            .unwrap();
        assert!(derive_features(frame).is_err());
    }
}
