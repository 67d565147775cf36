/*! # Skylabel

Skylabel builds pre-labeled datasets for a disaster-post classifier:
it loads a bulk corpus of short social media posts, keeps the ones that look
English, drops exact duplicates, assigns each post a provisional category
through ordered keyword rules, draws a seeded stratified sample against a
per-category quota table and exports the result both as a flat CSV and as a
Label Studio import file.

The crate can be used as a command line tool (see [cli]) or as a library,
wiring [pipelines::PreLabel] or the individual stages into other projects.
!*/
pub mod cli;
pub mod error;
pub mod filtering;
pub mod io;
pub mod labels;
pub mod pipelines;
pub mod sampling;
pub mod sources;
