use crate::dataset::TabularDataset;
use grade_lens_common::{GradeLensError, Result};
use std::io::Read;
use std::path::Path;
use tracing::info;

/// Decodes every CSV record without header handling; record lengths may vary.
pub fn parse_records<R: Read>(reader: R) -> Result<Vec<Vec<String>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        records.push(rec.iter().map(str::to_owned).collect());
    }
    Ok(records)
}

/// Opens a tabular file once; callers hold the returned dataset for every request.
pub fn load_dataset(path: &Path) -> Result<TabularDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if ext != "csv" {
        return Err(GradeLensError::UnsupportedFileType(if ext.is_empty() {
            "(none)".into()
        } else {
            format!(".{ext}")
        }));
    }
    let file = std::fs::File::open(path)?;
    let records = parse_records(file)?;
    // header plus at least one data row
    if records.len() < 2 {
        return Err(GradeLensError::InsufficientData { rows: records.len() });
    }
    let dataset = TabularDataset::from_records(records)?;
    info!(
        path = %path.display(),
        columns = dataset.column_count(),
        rows = dataset.row_count(),
        "loaded dataset"
    );
    Ok(dataset)
}
