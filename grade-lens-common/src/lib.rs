pub mod config;
pub use config::{ChartConfig, Config, DisplayConfig, ExportConfig};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeLensError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid column index {index}: dataset has {column_count} columns")]
    InvalidColumn { index: i64, column_count: usize },
    #[error("unsupported chart kind: {0} (use pie, bar or line)")]
    UnsupportedChartKind(String),
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("file is empty or has insufficient data ({rows} records)")]
    InsufficientData { rows: usize },
    #[error("no data available after filtering column {column} on '{value}'")]
    EmptyFilterResult { column: usize, value: String },
    #[error("non-numeric value '{value}' found in column {column}")]
    NonNumericValue { column: usize, value: String },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GradeLensError>;
