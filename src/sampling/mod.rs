/*! Quota-constrained stratified sampling.

[QuotaTable] holds per-category targets in declaration order, and
[StratifiedSampler] draws a seeded, reproducible sample against it, reporting
a [Shortfall] for every category whose pool cannot fill its quota.
!*/
mod quota;
mod sampler;

pub use quota::QuotaEntry;
pub use quota::QuotaTable;
pub use sampler::SampleReport;
pub use sampler::SampledItem;
pub use sampler::Shortfall;
pub use sampler::StratifiedSampler;
