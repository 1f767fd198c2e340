use crate::chart::{build_series, ChartDocument, ChartKind};
use crate::dataset::TabularDataset;
use crate::normalize::normalize_value;
use grade_lens_common::{GradeLensError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Column picks for a filtered x/y chart. Indices are validated against the header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XySelection {
    pub x: i64,
    pub y: i64,
    pub filter_column: i64,
    pub filter_value: String,
}

/// Plots `y` against `x` over the rows whose filter cell matches
/// `filter_value` (trimmed, case-insensitive).
pub fn build_xy_chart(
    dataset: &TabularDataset,
    sel: &XySelection,
    kind: ChartKind,
) -> Result<ChartDocument<f64>> {
    let x = dataset.resolve_column(sel.x)?;
    let y = dataset.resolve_column(sel.y)?;
    let f = dataset.resolve_column(sel.filter_column)?;
    let wanted = sel.filter_value.trim().to_lowercase();

    let filtered: Vec<&Vec<String>> = dataset
        .rows()
        .iter()
        .filter(|row| row.len() > x.max(y).max(f))
        .filter(|row| row[f].trim().to_lowercase() == wanted)
        .collect();
    if filtered.is_empty() {
        return Err(GradeLensError::EmptyFilterResult {
            column: f,
            value: sel.filter_value.clone(),
        });
    }

    let mut unit = None;
    let mut pairs = Vec::with_capacity(filtered.len());
    for row in &filtered {
        let cleaned = row[y].replace([',', '"'], "");
        let nv = normalize_value(&cleaned).ok_or_else(|| GradeLensError::NonNumericValue {
            column: y,
            value: row[y].clone(),
        })?;
        // the last suffix seen names the unit of the whole series
        unit = nv.suffix;
        pairs.push((row[x].clone(), nv.value));
    }
    debug!(rows = pairs.len(), %kind, "built x/y series");

    let x_header = dataset.header(x).unwrap_or_default();
    let y_header = dataset.header(y).unwrap_or_default();
    let with_unit = |s: &str| match unit {
        Some(u) => format!("{s} ({u})"),
        None => s.to_owned(),
    };
    let (x_axis_name, y_axis_name) = match kind {
        ChartKind::Pie => {
            for (label, _) in pairs.iter_mut() {
                *label = with_unit(label.as_str());
            }
            (None, None)
        }
        ChartKind::Bar | ChartKind::Line => (Some(x_header.to_owned()), Some(with_unit(y_header))),
    };
    Ok(ChartDocument {
        title: format!("{y_header} vs {x_header}"),
        x_axis_name,
        y_axis_name,
        series: build_series(kind, y_header, &pairs),
    })
}
