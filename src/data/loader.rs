//! CSV loading and saving
//!
//! Reads the fixed-schema order book CSV into a [`Frame`] and writes a
//! processed frame back out. A missing expected column or an unconvertible
//! cell is a fatal load-time error; empty cells become missing values.

use super::frame::{Column, Frame};
use super::types::{RawTick, RAW_COLUMNS};
use anyhow::{bail, Context, Result};
use csv::{Reader, Writer};
use std::fs::File;
use std::path::Path;

/// Load the raw order book dataset from a CSV file
pub fn load_frame<P: AsRef<Path>>(path: P) -> Result<Frame> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open file: {:?}", path.as_ref()))?;

    let mut reader = Reader::from_reader(file);

    // Absent Option fields deserialize to None, so a short header would load
    // silently; a schema mismatch must be fatal instead
    let headers = reader.headers().context("Failed to read CSV header")?;
    for expected in RAW_COLUMNS {
        if !headers.iter().any(|h| h == expected) {
            bail!("Input CSV is missing expected column: {}", expected);
        }
    }

    let mut ticks: Vec<RawTick> = Vec::new();

    for result in reader.deserialize() {
        let tick: RawTick = result.context("Failed to parse order book record")?;
        ticks.push(tick);
    }

    frame_from_ticks(&ticks)
}

/// Assemble a column-oriented frame from row records, in schema order
fn frame_from_ticks(ticks: &[RawTick]) -> Result<Frame> {
    let mut frame = Frame::new();

    frame.push_column(
        "stock_id",
        Column::Int(ticks.iter().map(|t| t.stock_id).collect()),
    )?;
    frame.push_column(
        "date_id",
        Column::Int(ticks.iter().map(|t| t.date_id).collect()),
    )?;
    frame.push_column(
        "seconds_in_bucket",
        Column::Int(ticks.iter().map(|t| t.seconds_in_bucket).collect()),
    )?;
    frame.push_column(
        "imbalance_size",
        Column::Float(ticks.iter().map(|t| t.imbalance_size).collect()),
    )?;
    frame.push_column(
        "imbalance_buy_sell_flag",
        Column::Float(ticks.iter().map(|t| t.imbalance_buy_sell_flag).collect()),
    )?;
    frame.push_column(
        "reference_price",
        Column::Float(ticks.iter().map(|t| t.reference_price).collect()),
    )?;
    frame.push_column(
        "matched_size",
        Column::Float(ticks.iter().map(|t| t.matched_size).collect()),
    )?;
    frame.push_column(
        "far_price",
        Column::Float(ticks.iter().map(|t| t.far_price).collect()),
    )?;
    frame.push_column(
        "near_price",
        Column::Float(ticks.iter().map(|t| t.near_price).collect()),
    )?;
    frame.push_column(
        "bid_price",
        Column::Float(ticks.iter().map(|t| t.bid_price).collect()),
    )?;
    frame.push_column(
        "bid_size",
        Column::Float(ticks.iter().map(|t| t.bid_size).collect()),
    )?;
    frame.push_column(
        "ask_price",
        Column::Float(ticks.iter().map(|t| t.ask_price).collect()),
    )?;
    frame.push_column(
        "ask_size",
        Column::Float(ticks.iter().map(|t| t.ask_size).collect()),
    )?;
    frame.push_column("wap", Column::Float(ticks.iter().map(|t| t.wap).collect()))?;
    frame.push_column(
        "target",
        Column::Float(ticks.iter().map(|t| t.target).collect()),
    )?;
    frame.push_column(
        "time_id",
        Column::Int(ticks.iter().map(|t| t.time_id).collect()),
    )?;
    frame.push_column(
        "row_id",
        Column::Str(ticks.iter().map(|t| t.row_id.clone()).collect()),
    )?;

    Ok(frame)
}

/// Save a frame to a CSV file with a header row. Missing cells are written
/// as empty fields.
pub fn save_frame<P: AsRef<Path>>(frame: &Frame, path: P) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create file: {:?}", path.as_ref()))?;

    let mut writer = Writer::from_writer(file);
    writer.write_record(frame.column_names())?;

    for row in 0..frame.n_rows() {
        let record: Vec<String> = frame
            .columns()
            .map(|(_, column)| match column {
                Column::Int(v) => v[row].map_or_else(String::new, |x| x.to_string()),
                Column::Float(v) => v[row].map_or_else(String::new, |x| x.to_string()),
                Column::Str(v) => v[row].clone().unwrap_or_default(),
            })
            .collect();
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
