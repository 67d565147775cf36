//! Seeded stratified sampling.
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::labels::Category;
use crate::sources::ClassifiedPost;

use super::quota::QuotaTable;

/// Reported when a category's pool cannot fill its quota.
///
/// Not an error: the category contributes its whole pool and the run goes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub category: Category,
    pub available: usize,
    pub requested: usize,
}

impl Shortfall {
    /// How many posts the category is missing.
    pub fn deficit(&self) -> usize {
        self.requested - self.available
    }
}

/// A classified post selected into the final dataset. Never mutated after
/// selection; both export formats are produced from the same items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledItem {
    id: usize,
    text: String,
    category: Category,
}

impl SampledItem {
    /// Get the item's ingestion id.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl From<&ClassifiedPost> for SampledItem {
    fn from(post: &ClassifiedPost) -> Self {
        Self {
            id: post.id(),
            text: post.text().to_string(),
            category: post.category(),
        }
    }
}

/// Outcome of a sampling run: the ordered selection plus every shortfall hit.
#[derive(Debug, Clone)]
pub struct SampleReport {
    pub items: Vec<SampledItem>,
    pub shortfalls: Vec<Shortfall>,
}

/// Draws per-category samples matching a [QuotaTable].
///
/// For each table entry, in table order: if the category's pool covers the
/// quota, draw that many posts uniformly without replacement; otherwise take
/// the whole pool and record a [Shortfall]. Within a category, picks keep
/// their pool order. Fully deterministic given (pool contents, pool order,
/// quota table, seed).
pub struct StratifiedSampler {
    seed: u64,
}

impl StratifiedSampler {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Get the sampler's seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn sample(&self, pool: &[ClassifiedPost], quotas: &QuotaTable) -> SampleReport {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut items = Vec::with_capacity(quotas.total());
        let mut shortfalls = Vec::new();

        for entry in quotas.entries() {
            let candidates: Vec<usize> = pool
                .iter()
                .enumerate()
                .filter(|(_, post)| post.category() == entry.category)
                .map(|(idx, _)| idx)
                .collect();

            let picked: Vec<usize> = if candidates.len() >= entry.count {
                let mut chosen =
                    rand::seq::index::sample(&mut rng, candidates.len(), entry.count).into_vec();
                // restore pool order within the category
                chosen.sort_unstable();
                chosen.into_iter().map(|idx| candidates[idx]).collect()
            } else {
                shortfalls.push(Shortfall {
                    category: entry.category,
                    available: candidates.len(),
                    requested: entry.count,
                });
                candidates
            };

            items.extend(picked.into_iter().map(|idx| SampledItem::from(&pool[idx])));
        }

        SampleReport { items, shortfalls }
    }
}
