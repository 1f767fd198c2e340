use grade_lens_core::{
    count_raw_values, distribution_chart, group_values, load_dataset, normalize_label,
    order_categories, ChartKind, ChartSeries, DistributionReport, GradeLensError, LabelOrder,
    TabularDataset,
};
use std::io::Write;
use tempfile::NamedTempFile;

const FIXTURE: &str = "\
student,grade,letter
ann,87,A
bo,73,\"B\"
cy,81, B 
di,9,
ed,100,\" B \"
fay,,A
gus
";

fn write_fixture(contents: &str, suffix: &str) -> NamedTempFile {
    let mut tmp = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    tmp.write_all(contents.as_bytes()).unwrap();
    tmp.flush().unwrap();
    tmp
}

fn load() -> (NamedTempFile, TabularDataset) {
    let tmp = write_fixture(FIXTURE, ".csv");
    let ds = load_dataset(tmp.path()).unwrap();
    (tmp, ds)
}

fn non_blank_cells(ds: &TabularDataset, col: usize) -> u64 {
    ds.rows()
        .iter()
        .filter_map(|r| r.get(col))
        .filter(|c| !normalize_label(c).is_empty())
        .count() as u64
}

#[test]
fn load_dataset_reads_headers_and_ragged_rows() {
    let (_tmp, ds) = load();
    assert_eq!(ds.headers(), &["student", "grade", "letter"]);
    assert_eq!(ds.row_count(), 7);
    assert_eq!(ds.rows()[6].len(), 1);
}

#[test]
fn uppercase_extension_accepted() {
    let tmp = write_fixture(FIXTURE, ".CSV");
    assert!(load_dataset(tmp.path()).is_ok());
}

#[test]
fn header_only_file_rejected() {
    let tmp = write_fixture("grade\n", ".csv");
    assert!(matches!(
        load_dataset(tmp.path()),
        Err(GradeLensError::InsufficientData { rows: 1 })
    ));
}

#[test]
fn grade_column_buckets() {
    let (_tmp, ds) = load();
    let ordered = order_categories(&group_values(&count_raw_values(&ds, 1).unwrap()), LabelOrder::Lexical);
    assert_eq!(
        ordered,
        vec![
            ("0-9".to_string(), 1),
            ("100-109".to_string(), 1),
            ("70-79".to_string(), 1),
            ("80-89".to_string(), 2),
        ]
    );
    let numeric = order_categories(&group_values(&count_raw_values(&ds, 1).unwrap()), LabelOrder::Numeric);
    let labels: Vec<&str> = numeric.iter().map(|(l, _)| l.as_str()).collect();
    assert_eq!(labels, ["0-9", "70-79", "80-89", "100-109"]);
}

#[test]
fn letter_column_merges_quoted_and_padded() {
    let (_tmp, ds) = load();
    let dist = group_values(&count_raw_values(&ds, 2).unwrap());
    assert_eq!(dist.get("A"), 2);
    assert_eq!(dist.get("B"), 3);
    assert_eq!(dist.len(), 2);
}

#[test]
fn count_conservation() {
    let (_tmp, ds) = load();
    for col in 0..ds.column_count() {
        let dist = group_values(&count_raw_values(&ds, col as i64).unwrap());
        assert_eq!(dist.total(), non_blank_cells(&ds, col), "column {col}");
    }
}

#[test]
fn permuted_rows_same_distribution() {
    let (_tmp, ds) = load();
    let mut rows = ds.rows().to_vec();
    rows.reverse();
    rows.rotate_left(3);
    let permuted = TabularDataset::new(ds.headers().to_vec(), rows).unwrap();
    for col in 0..3 {
        let a = group_values(&count_raw_values(&ds, col).unwrap());
        let b = group_values(&count_raw_values(&permuted, col).unwrap());
        assert_eq!(a, b);
        assert_eq!(
            order_categories(&a, LabelOrder::Lexical),
            order_categories(&b, LabelOrder::Lexical)
        );
    }
}

#[test]
fn pipeline_idempotent() {
    let (_tmp, ds) = load();
    let first = distribution_chart(&ds, 1, ChartKind::Bar, LabelOrder::Numeric, "Count").unwrap();
    let second = distribution_chart(&ds, 1, ChartKind::Bar, LabelOrder::Numeric, "Count").unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn invalid_column_and_kind() {
    let (_tmp, ds) = load();
    for bad in [-1, 3, 99] {
        assert!(matches!(
            distribution_chart(&ds, bad, ChartKind::Pie, LabelOrder::Lexical, "Count"),
            Err(GradeLensError::InvalidColumn { .. })
        ));
    }
    assert!(matches!(
        "scatter".parse::<ChartKind>(),
        Err(GradeLensError::UnsupportedChartKind(_))
    ));
}

#[test]
fn pie_and_axis_share_order() {
    let (_tmp, ds) = load();
    let pie = distribution_chart(&ds, 2, ChartKind::Pie, LabelOrder::Lexical, "Count").unwrap();
    let line = distribution_chart(&ds, 2, ChartKind::Line, LabelOrder::Lexical, "Count").unwrap();
    let (ChartSeries::Pie { data, .. }, ChartSeries::Axis { x_axis, series, .. }) = (pie.series, line.series) else {
        panic!("unexpected series layout");
    };
    assert_eq!(data.len(), x_axis.len());
    for (i, nv) in data.iter().enumerate() {
        assert_eq!(nv.name, x_axis[i]);
        assert_eq!(nv.value, series.data[i]);
    }
}

#[test]
fn report_matches_chart() {
    let (_tmp, ds) = load();
    let report = DistributionReport::build(&ds, 1, LabelOrder::Lexical).unwrap();
    assert_eq!(report.title, "Grade Distribution");
    assert_eq!(report.total, 5);
    let pct: f64 = report.entries.iter().map(|e| e.percentage).sum();
    assert!((pct - 100.0).abs() < 1e-9);
}
