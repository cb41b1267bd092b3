//! Data module: the in-memory frame, the raw schema and CSV I/O
//!
//! This module provides:
//! - [`Frame`], the columnar table the pipeline stages pass along
//! - The fixed 17-column raw schema and its record type
//! - CSV loading and saving

pub mod frame;
pub mod loader;
pub mod types;

pub use frame::{Column, Frame, FrameError};
pub use loader::{load_frame, save_frame};
pub use types::{Dataset, RawTick, RAW_COLUMNS, ROW_ID_COLUMN, TARGET_COLUMN};
