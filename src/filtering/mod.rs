/*! Filtering utilities

Filters decide whether a post makes it into the labeling pool.

Filters implement [filter::Filter], [filter::FilterMut] or both:
- [filter::Filter] is implemented for filters that do not have state (see [latin::LatinPrefix] for example)
- [filter::FilterMut] is implemented for filters that do have state (see [dedup::ExactDedup], which remembers every text it has seen)
! */
mod dedup;
mod filter;
mod latin;

pub use dedup::ExactDedup;
pub use filter::Filter;
pub use filter::FilterMut;
pub use latin::LatinPrefix;
