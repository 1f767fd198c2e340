use crate::chart::chart_title;
use crate::dataset::TabularDataset;
use crate::profile::{count_raw_values, group_values, order_categories, LabelOrder};
use grade_lens_common::{GradeLensError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionEntry {
    pub label: String,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionReport {
    pub column: String,
    pub title: String,
    pub total: u64,
    pub entries: Vec<DistributionEntry>,
}

impl DistributionReport {
    pub fn from_ordered(column: &str, ordered: &[(String, u64)]) -> Self {
        let total: u64 = ordered.iter().map(|(_, c)| c).sum();
        let entries = ordered
            .iter()
            .map(|(label, count)| DistributionEntry {
                label: label.clone(),
                count: *count,
                percentage: if total > 0 {
                    *count as f64 / total as f64 * 100.0
                } else {
                    0.0
                },
            })
            .collect();
        Self {
            column: column.to_owned(),
            title: chart_title(column),
            total,
            entries,
        }
    }

    pub fn build(dataset: &TabularDataset, column: i64, order: LabelOrder) -> Result<Self> {
        let col = dataset.resolve_column(column)?;
        let counts = count_raw_values(dataset, column)?;
        let ordered = order_categories(&group_values(&counts), order);
        Ok(Self::from_ordered(dataset.header(col).unwrap_or_default(), &ordered))
    }
}

pub fn write_distribution<W: Write>(w: &mut W, report: &DistributionReport) -> std::io::Result<()> {
    writeln!(w, "{}", report.title)?;
    let width = report
        .entries
        .iter()
        .map(|e| e.label.chars().count())
        .max()
        .unwrap_or(0)
        .max("Category".len());
    writeln!(w, "{:<width$}  {:>8}  {:>7}", "Category", "Count", "%")?;
    let peak = report.entries.iter().map(|e| e.count).max().unwrap_or(0);
    for e in &report.entries {
        let bar = if peak > 0 {
            (e.count as f64 / peak as f64 * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        writeln!(
            w,
            "{:<width$}  {:>8}  {:>6.2}%  {}",
            e.label,
            e.count,
            e.percentage,
            "#".repeat(bar)
        )?;
    }
    writeln!(w, "{:<width$}  {:>8}", "Total", report.total)?;
    Ok(())
}

pub fn print_distribution(report: &DistributionReport) {
    let stdout = std::io::stdout();
    let _ = write_distribution(&mut stdout.lock(), report);
}

pub fn export_json(output_path: &Path, report: &DistributionReport) -> Result<()> {
    let mut file = std::fs::File::create(output_path)?;
    serde_json::to_writer_pretty(&mut file, report)
        .map_err(|e| GradeLensError::Other(e.to_string()))?;
    file.flush()?;
    Ok(())
}

pub fn export_csv(output_path: &Path, report: &DistributionReport) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;
    wtr.write_record(["label", "count", "percentage"])?;
    for e in &report.entries {
        wtr.write_record([
            e.label.clone(),
            e.count.to_string(),
            format!("{:.4}", e.percentage),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
