//! Pre-labeling pipeline.
//!
//! Builds a pre-labeled dataset from a posts corpus.
//!
//! # Processing
//! 1. The whole corpus is loaded in memory (one [Post] per record, ids
//!    assigned in read order).
//! 1. Posts pass through the Latin-prefix language filter; textless posts are
//!    dropped here too.
//! 1. Exact-duplicate texts are dropped, first occurrence kept.
//! 1. Each surviving post gets exactly one category from the ordered keyword
//!    rules.
//! 1. The stratified sampler draws the per-category quotas with a fixed seed,
//!    taking whole pools (and warning) where a category falls short.
//! 1. The selection is written both as a CSV and as a Label Studio task file.
//!
//! Every stage preserves input order, which is what makes the seeded sampling
//! reproducible run to run.
use std::path::PathBuf;

use itertools::Itertools;
use log::{info, warn};

use crate::error::Error;
use crate::filtering::{ExactDedup, Filter, FilterMut, LatinPrefix};
use crate::io::writer::{CsvWriter, TaskWriter};
use crate::labels::RuleClassifier;
use crate::pipelines::pipeline::Pipeline;
use crate::sampling::{QuotaTable, SampleReport, StratifiedSampler};
use crate::sources::{read_corpus, ClassifiedPost};

const CSV_FILENAME: &str = "pre_labeled_dataset.csv";
const TASKS_FILENAME: &str = "label_studio_import.json";

pub struct PreLabel {
    src: PathBuf,
    dst: PathBuf,
    classifier: RuleClassifier,
    quotas: QuotaTable,
    seed: u64,
}

impl PreLabel {
    pub fn new(src: PathBuf, dst: PathBuf, quotas: QuotaTable, seed: u64) -> Self {
        Self {
            src,
            dst,
            classifier: RuleClassifier::default(),
            quotas,
            seed,
        }
    }

    /// Replace the default rule classifier (e.g. with a trimmed rule table).
    pub fn with_classifier(mut self, classifier: RuleClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// filter -> dedup -> classify, in that order.
    fn build_pool(&self) -> Result<Vec<ClassifiedPost>, Error> {
        let posts = read_corpus(&self.src)?;
        info!("loaded {} posts", posts.len());

        let latin = LatinPrefix::default();
        let admitted: Vec<(usize, String)> = posts
            .into_iter()
            .filter_map(|post| {
                let (id, text) = post.into_parts();
                text.map(|text| (id, text))
            })
            .filter(|(_, text)| latin.detect(text))
            .collect();
        info!("{} posts admitted by the language filter", admitted.len());

        let mut dedup = ExactDedup::default();
        let unique: Vec<(usize, String)> = admitted
            .into_iter()
            .filter(|(_, text)| dedup.detect_mut(text))
            .collect();
        info!("{} posts after deduplication", unique.len());

        let pool: Vec<ClassifiedPost> = unique
            .into_iter()
            .map(|(id, text)| {
                let category = self.classifier.classify(&text);
                ClassifiedPost::new(id, text, category)
            })
            .collect();

        info!("initial classification distribution:");
        let counts = pool.iter().map(|post| post.category()).counts();
        for (category, count) in counts
            .iter()
            .sorted_by_key(|(_, count)| std::cmp::Reverse(*count))
        {
            info!("  {}: {}", category, count);
        }

        Ok(pool)
    }

    fn write_exports(&self, report: &SampleReport) -> Result<(), Error> {
        std::fs::create_dir_all(&self.dst)?;

        let csv_path = self.dst.join(CSV_FILENAME);
        let tasks_path = self.dst.join(TASKS_FILENAME);
        CsvWriter::write(&csv_path, &report.items)?;
        TaskWriter::write(&tasks_path, &report.items)?;
        info!("wrote {:?} and {:?}", csv_path, tasks_path);

        Ok(())
    }
}

impl Pipeline<()> for PreLabel {
    fn run(&self) -> Result<(), Error> {
        info!("loading corpus from {:?}", self.src);
        let pool = self.build_pool()?;

        let sampler = StratifiedSampler::new(self.seed);
        let report = sampler.sample(&pool, &self.quotas);
        for shortfall in &report.shortfalls {
            warn!(
                "{}: only {} posts available (needed {}, missing {})",
                shortfall.category,
                shortfall.available,
                shortfall.requested,
                shortfall.deficit()
            );
        }

        self.write_exports(&report)?;

        info!("final sampled distribution ({} posts):", report.items.len());
        let final_counts = report.items.iter().map(|item| item.category()).counts();
        for entry in self.quotas.entries() {
            info!(
                "  {}: {}",
                entry.category,
                final_counts.get(&entry.category).copied().unwrap_or(0)
            );
        }

        Ok(())
    }
}
