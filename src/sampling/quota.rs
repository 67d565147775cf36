//! Quota tables.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::labels::Category;

/// One per-category sampling target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaEntry {
    pub category: Category,
    pub count: usize,
}

/// Per-category sampling targets, kept in declaration order.
///
/// Order matters: the sampler visits entries in table order and the final
/// selection concatenates per-category picks in that same order. Categories
/// absent from the table are never sampled. Serializes as a JSON array of
/// `{"category": …, "count": …}` objects so quota files keep their order too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuotaTable {
    entries: Vec<QuotaEntry>,
}

impl QuotaTable {
    pub fn new(entries: Vec<QuotaEntry>) -> Self {
        Self { entries }
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Category, usize)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(category, count)| QuotaEntry { category, count })
                .collect(),
        }
    }

    /// Load a quota table from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)?;
        let table = serde_json::from_reader(BufReader::new(file))?;
        Ok(table)
    }

    /// Get the table's entries, in declaration order.
    pub fn entries(&self) -> &[QuotaEntry] {
        &self.entries
    }

    /// Nominal dataset size: the sum of all targets.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}

impl Default for QuotaTable {
    /// The project's target distribution for a 1000-post dataset.
    fn default() -> Self {
        Self::from_pairs([
            (Category::NotRelevant, 320),
            (Category::AutoAccident, 110),
            (Category::Fire, 100),
            (Category::Flood, 100),
            (Category::SevereStorm, 90),
            (Category::Earthquake, 80),
            (Category::Shooting, 70),
            (Category::Tornado, 40),
            (Category::Hurricane, 30),
            (Category::ExtremeHeat, 30),
            (Category::TropicalStorm, 20),
            (Category::OtherDisaster, 10),
        ])
    }
}
