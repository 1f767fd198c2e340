use crate::dataset::TabularDataset;
use crate::profile::{count_raw_values, group_values, order_categories, LabelOrder};
use grade_lens_common::{GradeLensError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

impl FromStr for ChartKind {
    type Err = GradeLensError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "pie" => Ok(Self::Pie),
            "bar" => Ok(Self::Bar),
            "line" => Ok(Self::Line),
            other => Err(GradeLensError::UnsupportedChartKind(other.to_owned())),
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pie => "pie",
            Self::Bar => "bar",
            Self::Line => "line",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue<T> {
    pub name: String,
    pub value: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSeries<T> {
    pub name: String,
    pub data: Vec<T>,
}

/// Renderer input. `Axis` keeps `x_axis[i]` and `series.data[i]` paired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "lowercase")]
pub enum ChartSeries<T> {
    Pie {
        name: String,
        data: Vec<NamedValue<T>>,
    },
    Axis {
        kind: ChartKind,
        x_axis: Vec<String>,
        series: AxisSeries<T>,
    },
}

impl<T> ChartSeries<T> {
    pub fn kind(&self) -> ChartKind {
        match self {
            Self::Pie { .. } => ChartKind::Pie,
            Self::Axis { kind, .. } => *kind,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Pie { data, .. } => data.len(),
            Self::Axis { series, .. } => series.data.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn build_series<T: Copy>(kind: ChartKind, name: &str, pairs: &[(String, T)]) -> ChartSeries<T> {
    match kind {
        ChartKind::Pie => ChartSeries::Pie {
            name: name.to_owned(),
            data: pairs
                .iter()
                .map(|(label, value)| NamedValue {
                    name: label.clone(),
                    value: *value,
                })
                .collect(),
        },
        ChartKind::Bar | ChartKind::Line => ChartSeries::Axis {
            kind,
            x_axis: pairs.iter().map(|(label, _)| label.clone()).collect(),
            series: AxisSeries {
                name: name.to_owned(),
                data: pairs.iter().map(|(_, value)| *value).collect(),
            },
        },
    }
}

/// `"grade"` -> `"Grade Distribution"`.
pub fn chart_title(header: &str) -> String {
    format!("{} Distribution", display_header(header))
}

/// Header without surrounding quotes and with its first character upper-cased.
pub(crate) fn display_header(header: &str) -> String {
    let h = header.trim_matches('"');
    let mut chars = h.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Everything a renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument<T> {
    pub title: String,
    pub x_axis_name: Option<String>,
    pub y_axis_name: Option<String>,
    pub series: ChartSeries<T>,
}

/// Full pipeline: validate column, count, group, order, build series.
pub fn distribution_chart(
    dataset: &TabularDataset,
    column: i64,
    kind: ChartKind,
    order: LabelOrder,
    value_axis_name: &str,
) -> Result<ChartDocument<u64>> {
    let col = dataset.resolve_column(column)?;
    let counts = count_raw_values(dataset, column)?;
    let ordered = order_categories(&group_values(&counts), order);
    let header = dataset.header(col).unwrap_or_default();
    let title = chart_title(header);
    debug!(%kind, %order, categories = ordered.len(), "building distribution chart");
    let (x_axis_name, y_axis_name) = match kind {
        ChartKind::Pie => (None, None),
        ChartKind::Bar | ChartKind::Line => {
            (Some(display_header(header)), Some(value_axis_name.to_owned()))
        }
    };
    Ok(ChartDocument {
        series: build_series(kind, &title, &ordered),
        title,
        x_axis_name,
        y_axis_name,
    })
}

/// Request body shape used by front ends: selector, column and the decoded rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    pub chart_type: String,
    pub column: i64,
    pub file_data: Vec<Vec<String>>,
}

impl ChartRequest {
    pub fn render(self, order: LabelOrder, value_axis_name: &str) -> Result<ChartDocument<u64>> {
        let kind: ChartKind = self.chart_type.parse()?;
        let dataset = TabularDataset::from_records(self.file_data)?;
        distribution_chart(&dataset, self.column, kind, order, value_axis_name)
    }
}
