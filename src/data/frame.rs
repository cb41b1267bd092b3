//! Columnar data frame for the auction dataset
//!
//! A [`Frame`] is an ordered collection of named, typed, nullable columns.
//! It is the single in-memory table the pipeline operates on: each stage
//! takes the frame by value, mutates or extends it, and hands it to the
//! next stage. Missing cells are represented as `None`.

use thiserror::Error;

/// Errors raised by frame operations
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    #[error("column {0} already exists")]
    DuplicateColumn(String),

    #[error("column {0} is not a {1} column")]
    TypeMismatch(String, &'static str),

    #[error("column {name} has {len} rows, frame has {expected}")]
    LengthMismatch {
        name: String,
        len: usize,
        expected: usize,
    },
}

/// A single named column: 64-bit integers, 32-bit floats or strings,
/// each cell optional
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f32>>),
    Str(Vec<Option<String>>),
}

impl Column {
    /// Number of rows in the column
    pub fn len(&self) -> usize {
        match self {
            Column::Int(v) => v.len(),
            Column::Float(v) => v.len(),
            Column::Str(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing cells
    pub fn null_count(&self) -> usize {
        match self {
            Column::Int(v) => v.iter().filter(|c| c.is_none()).count(),
            Column::Float(v) => v.iter().filter(|c| c.is_none()).count(),
            Column::Str(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }

    /// Whether the cell at `row` is missing
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            Column::Int(v) => v[row].is_none(),
            Column::Float(v) => v[row].is_none(),
            Column::Str(v) => v[row].is_none(),
        }
    }

    /// Cell at `row` widened to f64, if present and numeric.
    /// String cells have no numeric value and yield `None`.
    pub fn numeric(&self, row: usize) -> Option<f64> {
        match self {
            Column::Int(v) => v[row].map(|x| x as f64),
            Column::Float(v) => v[row].map(|x| x as f64),
            Column::Str(_) => None,
        }
    }

    fn retain_rows(&mut self, keep: &[bool]) {
        fn filter<T>(cells: &mut Vec<T>, keep: &[bool]) {
            let mut flags = keep.iter().copied();
            cells.retain(|_| flags.next().unwrap_or(false));
        }
        match self {
            Column::Int(v) => filter(v, keep),
            Column::Float(v) => filter(v, keep),
            Column::Str(v) => filter(v, keep),
        }
    }
}

/// Ordered, named columns of equal length
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<(String, Column)>,
}

impl Frame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows (0 for a frame with no columns)
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |(_, c)| c.len())
    }

    /// Number of columns
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Whether a column with the given name exists
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Column names in frame order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Columns in frame order
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Append a column. Fails on a duplicate name or a row-count mismatch.
    pub fn push_column(&mut self, name: impl Into<String>, column: Column) -> Result<(), FrameError> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(FrameError::DuplicateColumn(name));
        }
        if !self.columns.is_empty() && column.len() != self.n_rows() {
            return Err(FrameError::LengthMismatch {
                name,
                len: column.len(),
                expected: self.n_rows(),
            });
        }
        self.columns.push((name, column));
        Ok(())
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Result<&Column, FrameError> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))
    }

    /// Look up a column by name for mutation
    pub fn column_mut(&mut self, name: &str) -> Result<&mut Column, FrameError> {
        self.columns
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))
    }

    /// Float cells of a column
    pub fn float(&self, name: &str) -> Result<&[Option<f32>], FrameError> {
        match self.column(name)? {
            Column::Float(v) => Ok(v),
            _ => Err(FrameError::TypeMismatch(name.to_string(), "float")),
        }
    }

    /// Float cells of a column, mutable
    pub fn float_mut(&mut self, name: &str) -> Result<&mut Vec<Option<f32>>, FrameError> {
        match self.column_mut(name)? {
            Column::Float(v) => Ok(v),
            _ => Err(FrameError::TypeMismatch(name.to_string(), "float")),
        }
    }

    /// Integer cells of a column
    pub fn int(&self, name: &str) -> Result<&[Option<i64>], FrameError> {
        match self.column(name)? {
            Column::Int(v) => Ok(v),
            _ => Err(FrameError::TypeMismatch(name.to_string(), "int")),
        }
    }

    /// Keep only the rows where `keep` is true. `keep` must have one entry
    /// per row.
    pub fn retain_rows(&mut self, keep: &[bool]) {
        debug_assert_eq!(keep.len(), self.n_rows());
        for (_, column) in self.columns.iter_mut() {
            column.retain_rows(keep);
        }
    }

    /// Visit every column in frame order with mutable access
    pub fn for_each_column_mut(&mut self, mut f: impl FnMut(&str, &mut Column)) {
        for (name, column) in self.columns.iter_mut() {
            f(name, column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_frame() -> Frame {
        let mut frame = Frame::new();
        frame
            .push_column("id", Column::Int(vec![Some(1), Some(2), None]))
            .unwrap();
        frame
            .push_column("price", Column::Float(vec![Some(1.5), None, Some(3.0)]))
            .unwrap();
        frame
            .push_column(
                "label",
                Column::Str(vec![Some("a".into()), Some("b".into()), Some("c".into())]),
            )
            .unwrap();
        frame
    }

    #[test]
    fn test_shape_and_null_counts() {
        let frame = sample_frame();
        assert_eq!(frame.n_rows(), 3);
        assert_eq!(frame.n_cols(), 3);
        assert_eq!(frame.column("id").unwrap().null_count(), 1);
        assert_eq!(frame.column("price").unwrap().null_count(), 1);
        assert_eq!(frame.column("label").unwrap().null_count(), 0);
    }

    #[test]
    fn test_unknown_column_is_an_error() {
        let frame = sample_frame();
        assert!(matches!(
            frame.column("nope"),
            Err(FrameError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_push_column_rejects_duplicates_and_bad_lengths() {
        let mut frame = sample_frame();
        let err = frame
            .push_column("id", Column::Int(vec![Some(9), Some(9), Some(9)]))
            .unwrap_err();
        assert!(matches!(err, FrameError::DuplicateColumn(_)));

        let err = frame
            .push_column("short", Column::Float(vec![Some(1.0)]))
            .unwrap_err();
        assert!(matches!(err, FrameError::LengthMismatch { .. }));
    }

    #[test]
    fn test_retain_rows_applies_to_all_columns() {
        let mut frame = sample_frame();
        frame.retain_rows(&[true, false, true]);
        assert_eq!(frame.n_rows(), 2);
        assert_eq!(frame.int("id").unwrap(), &[Some(1), None]);
        assert_eq!(frame.float("price").unwrap(), &[Some(1.5), Some(3.0)]);
    }

    #[test]
    fn test_numeric_widens_ints_and_floats() {
        let frame = sample_frame();
        assert_eq!(frame.column("id").unwrap().numeric(0), Some(1.0));
        assert_eq!(frame.column("price").unwrap().numeric(2), Some(3.0));
        assert_eq!(frame.column("label").unwrap().numeric(0), None);
        assert_eq!(frame.column("price").unwrap().numeric(1), None);
    }
}
