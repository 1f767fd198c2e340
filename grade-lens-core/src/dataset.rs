use grade_lens_common::{GradeLensError, Result};
use serde::{Deserialize, Serialize};

/// A header row plus data rows of raw string cells.
///
/// Rows may be shorter than the header; they are kept as-is and never padded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularDataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TabularDataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        if headers.is_empty() {
            return Err(GradeLensError::InsufficientData { rows: rows.len() });
        }
        Ok(Self { headers, rows })
    }

    /// Splits decoded records into the header (first record) and data rows.
    pub fn from_records(mut records: Vec<Vec<String>>) -> Result<Self> {
        if records.is_empty() {
            return Err(GradeLensError::InsufficientData { rows: 0 });
        }
        let rows = records.split_off(1);
        let headers = records.pop().unwrap_or_default();
        Self::new(headers, rows)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Validates a caller-supplied column index against the header range.
    pub fn resolve_column(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&c| c < self.headers.len())
            .ok_or(GradeLensError::InvalidColumn {
                index,
                column_count: self.headers.len(),
            })
    }

    pub fn header(&self, column: usize) -> Option<&str> {
        self.headers.get(column).map(String::as_str)
    }

    pub fn preview(&self, n: usize) -> &[Vec<String>] {
        &self.rows[..n.min(self.rows.len())]
    }
}
