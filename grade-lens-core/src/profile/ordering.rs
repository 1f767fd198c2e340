use super::grouping::CategoryDistribution;
use grade_lens_common::GradeLensError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How category labels are sorted before they reach a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelOrder {
    /// Plain byte-wise order; `"100-109"` sorts before `"20-29"`.
    #[default]
    Lexical,
    /// Range labels by their numeric start, then other labels byte-wise.
    Numeric,
}

impl FromStr for LabelOrder {
    type Err = GradeLensError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lexical" => Ok(Self::Lexical),
            "numeric" => Ok(Self::Numeric),
            other => Err(GradeLensError::Other(format!(
                "unknown label order: {other} (use lexical or numeric)"
            ))),
        }
    }
}

impl fmt::Display for LabelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lexical => "lexical",
            Self::Numeric => "numeric",
        })
    }
}

/// Leading number of a `"<start>-<end>"` label. The separator search starts
/// after the first byte so negative starts parse.
fn range_start(label: &str) -> Option<i128> {
    let sep = label.get(1..)?.find('-')? + 1;
    let start = label[..sep].parse::<i128>().ok()?;
    label[sep + 1..].parse::<i128>().ok()?;
    Some(start)
}

fn numeric_cmp(a: &str, b: &str) -> Ordering {
    match (range_start(a), range_start(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Ordered `(label, count)` pairs; identical input always yields identical output.
pub fn order_categories(dist: &CategoryDistribution, order: LabelOrder) -> Vec<(String, u64)> {
    let mut pairs: Vec<(String, u64)> = dist.iter().map(|(l, c)| (l.to_owned(), c)).collect();
    match order {
        LabelOrder::Lexical => pairs.sort_unstable_by(|a, b| a.0.cmp(&b.0)),
        LabelOrder::Numeric => pairs.sort_unstable_by(|a, b| numeric_cmp(&a.0, &b.0)),
    }
    pairs
}
