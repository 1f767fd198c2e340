pub mod chart;
pub mod dataset;
pub mod export;
pub mod normalize;
pub mod profile;
pub mod reader;
pub mod series;

pub use chart::{
    build_series, chart_title, distribution_chart, AxisSeries, ChartDocument, ChartKind,
    ChartRequest, ChartSeries, NamedValue,
};
pub use dataset::TabularDataset;
pub use export::{
    export_csv, export_json, print_distribution, write_distribution, DistributionEntry,
    DistributionReport,
};
pub use grade_lens_common::{Config, GradeLensError, Result};
pub use normalize::{normalize_value, NormalizedValue};
pub use profile::{
    bucket_label, count_raw_values, group_values, normalize_label, order_categories,
    CategoryDistribution, LabelOrder, RawValueCount,
};
pub use reader::{load_dataset, parse_records};
pub use series::{build_xy_chart, XySelection};
