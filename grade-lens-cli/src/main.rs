use clap::{Parser, Subcommand};
use grade_lens_common::Config;
use grade_lens_core::{
    build_xy_chart, distribution_chart, export_csv, export_json, load_dataset,
    print_distribution, ChartKind, DistributionReport, LabelOrder, TabularDataset, XySelection,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "grade-lens", version, about = "Column distribution charts for tabular files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the column headers with their indices
    Headers { path: PathBuf },
    /// Print the first rows of the file
    Preview {
        path: PathBuf,
        #[arg(long)] rows: Option<usize>,
    },
    /// Build a pie, bar or line chart document for one column
    Chart {
        path: PathBuf,
        #[arg(long, allow_negative_numbers = true)] column: i64,
        #[arg(long)] kind: Option<String>,
        #[arg(long)] order: Option<String>,
        #[arg(long)] output: Option<PathBuf>,
    },
    /// Print the ordered distribution of one column
    Summary {
        path: PathBuf,
        #[arg(long, allow_negative_numbers = true)] column: i64,
        #[arg(long)] order: Option<String>,
    },
    /// Write the distribution of one column as json or csv
    Export {
        path: PathBuf,
        #[arg(long, allow_negative_numbers = true)] column: i64,
        #[arg(long)] format: Option<String>,
        #[arg(long)] order: Option<String>,
        #[arg(long)] output: Option<PathBuf>,
    },
    /// Chart one column against another over rows matching a filter
    Series {
        path: PathBuf,
        #[arg(long, allow_negative_numbers = true)] x: i64,
        #[arg(long, allow_negative_numbers = true)] y: i64,
        #[arg(long, allow_negative_numbers = true)] filter_column: i64,
        #[arg(long)] filter_value: String,
        #[arg(long)] kind: Option<String>,
        #[arg(long)] output: Option<PathBuf>,
    },
}

fn init_logging() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt().with_env_filter(env).with_writer(std::io::stderr).init();
}

fn open(path: &Path) -> anyhow::Result<TabularDataset> {
    load_dataset(path).map_err(|e| anyhow::anyhow!("error reading {}: {e}", path.display()))
}

fn chart_kind(arg: Option<String>, config: &Config) -> anyhow::Result<ChartKind> {
    let kind = arg.unwrap_or_else(|| config.chart.default_kind.clone());
    Ok(kind.parse()?)
}

fn label_order(arg: Option<String>, config: &Config) -> anyhow::Result<LabelOrder> {
    let order = arg.unwrap_or_else(|| config.chart.label_order.clone());
    Ok(order.parse()?)
}

/// Writes the whole document; stdout when no output path is given.
fn write_document<T: Serialize>(doc: &T, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() { std::fs::create_dir_all(parent)?; }
            }
            std::fs::write(path, serde_json::to_string_pretty(doc)?)?;
            println!("Chart written to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(doc)?),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let config = Config::load().unwrap_or_default();
    match cli.command {
        Commands::Headers { path } => run_headers(&path)?,
        Commands::Preview { path, rows } => run_preview(&path, rows, &config)?,
        Commands::Chart { path, column, kind, order, output } => run_chart(&path, column, kind, order, output, &config)?,
        Commands::Summary { path, column, order } => run_summary(&path, column, order, &config)?,
        Commands::Export { path, column, format, order, output } => run_export(&path, column, format, order, output, &config)?,
        Commands::Series { path, x, y, filter_column, filter_value, kind, output } => {
            let sel = XySelection { x, y, filter_column, filter_value };
            run_series(&path, sel, kind, output, &config)?
        }
    }
    Ok(())
}

fn run_headers(path: &Path) -> anyhow::Result<()> {
    let dataset = open(path)?;
    for (i, h) in dataset.headers().iter().enumerate() {
        println!("{i:>4}  {h}");
    }
    Ok(())
}

fn run_preview(path: &Path, rows: Option<usize>, config: &Config) -> anyhow::Result<()> {
    let dataset = open(path)?;
    let n = rows.unwrap_or(config.display.max_rows_preview);
    println!("{}", dataset.headers().join(" | "));
    for row in dataset.preview(n) {
        println!("{}", row.join(" | "));
    }
    if dataset.row_count() > n {
        println!("... {} more rows", dataset.row_count() - n);
    }
    Ok(())
}

fn run_chart(path: &Path, column: i64, kind: Option<String>, order: Option<String>, output: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
    let kind = chart_kind(kind, config)?;
    let order = label_order(order, config)?;
    let dataset = open(path)?;
    let doc = distribution_chart(&dataset, column, kind, order, &config.chart.value_axis_name)?;
    info!(%kind, categories = doc.series.len(), "chart ready");
    write_document(&doc, output.as_deref())
}

fn run_summary(path: &Path, column: i64, order: Option<String>, config: &Config) -> anyhow::Result<()> {
    let order = label_order(order, config)?;
    let dataset = open(path)?;
    let report = DistributionReport::build(&dataset, column, order)?;
    print_distribution(&report);
    Ok(())
}

fn run_export(path: &Path, column: i64, format: Option<String>, order: Option<String>, output: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
    let order = label_order(order, config)?;
    let format = format.unwrap_or_else(|| config.export.format.clone());
    let dataset = open(path)?;
    let report = DistributionReport::build(&dataset, column, order)?;
    let out_path = output.unwrap_or_else(|| Path::new(&config.export.output_dir).join(format!("distribution.{format}")));
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() { std::fs::create_dir_all(parent)?; }
    }
    match format.as_str() {
        "json" => export_json(&out_path, &report)?,
        "csv" => export_csv(&out_path, &report)?,
        _ => anyhow::bail!("Unknown format: {format} (use json or csv)"),
    }
    println!("Exported to {}", out_path.display());
    Ok(())
}

fn run_series(path: &Path, sel: XySelection, kind: Option<String>, output: Option<PathBuf>, config: &Config) -> anyhow::Result<()> {
    let kind = chart_kind(kind, config)?;
    let dataset = open(path)?;
    let doc = build_xy_chart(&dataset, &sel, kind)?;
    write_document(&doc, output.as_deref())
}
