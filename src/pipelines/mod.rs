/*! Pipelines.

The module provides a light [pipeline::Pipeline] trait
that enables easy and flexible pipeline creation, and [PreLabel],
the classify-then-stratify dataset builder.
!*/
#[allow(clippy::module_inception)]
pub mod pipeline;
mod prelabel;

pub use pipeline::Pipeline;
pub use prelabel::PreLabel;
