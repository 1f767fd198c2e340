use super::frequency::RawValueCount;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Width of each numeric score range, e.g. `80-89`.
pub const BUCKET_WIDTH: i64 = 10;

/// Final category label -> merged count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDistribution {
    map: HashMap<String, u64>,
}

impl CategoryDistribution {
    pub fn get(&self, label: &str) -> u64 {
        self.map.get(label).copied().unwrap_or(0)
    }
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
    pub fn total(&self) -> u64 {
        self.map.values().sum()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.map.iter().map(|(k, &v)| (k.as_str(), v))
    }
    fn add(&mut self, label: String, n: u64) {
        *self.map.entry(label).or_insert(0) += n;
    }
}

/// Trims, drops one layer of surrounding double quotes, and trims again so
/// `" B "` and ` B ` land on the same label.
pub fn normalize_label(raw: &str) -> &str {
    let trimmed = raw.trim();
    match trimmed.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner.trim(),
        None => trimmed,
    }
}

/// Decade range containing `score`, floored toward negative infinity.
pub fn bucket_label(score: i64) -> String {
    // i128 keeps `start + 9` in range near i64::MAX
    let width = BUCKET_WIDTH as i128;
    let start = (score as i128).div_euclid(width) * width;
    format!("{}-{}", start, start + width - 1)
}

/// Maps a normalized, non-empty value to its category: integers go to their
/// decade range, anything else is its own label.
fn category_for(value: &str) -> String {
    match value.parse::<i64>() {
        Ok(score) => bucket_label(score),
        Err(_) => value.to_owned(),
    }
}

/// Merges raw values into categories. Blank values (after normalization)
/// contribute to nothing.
pub fn group_values(counts: &RawValueCount) -> CategoryDistribution {
    let mut dist = CategoryDistribution::default();
    let mut discarded = 0u64;
    for (raw, n) in counts.iter() {
        let value = normalize_label(raw);
        if value.is_empty() {
            discarded += n;
            continue;
        }
        dist.add(category_for(value), n);
    }
    debug!(categories = dist.len(), discarded, "grouped values");
    dist
}
