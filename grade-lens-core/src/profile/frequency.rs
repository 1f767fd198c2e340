use crate::dataset::TabularDataset;
use grade_lens_common::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Occurrences of each raw cell string, exactly as it appears in the column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawValueCount {
    map: HashMap<String, u64>,
    total: u64,
}

impl RawValueCount {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add(&mut self, raw: &str) {
        self.add_n(raw, 1);
    }
    pub fn add_n(&mut self, raw: &str, n: u64) {
        match self.map.get_mut(raw) {
            Some(c) => *c += n,
            None => {
                self.map.insert(raw.to_owned(), n);
            }
        }
        self.total += n;
    }
    pub fn get(&self, raw: &str) -> u64 {
        self.map.get(raw).copied().unwrap_or(0)
    }
    pub fn distinct(&self) -> usize {
        self.map.len()
    }
    pub fn total(&self) -> u64 {
        self.total
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.map.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<'a> FromIterator<&'a str> for RawValueCount {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = Self::new();
        for raw in iter {
            counts.add(raw);
        }
        counts
    }
}

/// Counts raw values of one column. The index is checked once against the
/// header; rows too short to reach the column are skipped.
pub fn count_raw_values(dataset: &TabularDataset, column: i64) -> Result<RawValueCount> {
    let col = dataset.resolve_column(column)?;
    let mut counts = RawValueCount::new();
    let mut skipped = 0usize;
    for row in dataset.rows() {
        match row.get(col) {
            Some(cell) => counts.add(cell),
            None => skipped += 1,
        }
    }
    debug!(
        column = col,
        distinct = counts.distinct(),
        total = counts.total(),
        skipped,
        "counted raw values"
    );
    Ok(counts)
}
