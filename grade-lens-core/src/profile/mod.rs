pub mod frequency;
pub mod grouping;
pub mod ordering;

pub use frequency::{count_raw_values, RawValueCount};
pub use grouping::{bucket_label, group_values, normalize_label, CategoryDistribution, BUCKET_WIDTH};
pub use ordering::{order_categories, LabelOrder};
