/*! Corpus sources.

Posts come in as JSONL files (optionally gzipped), one JSON object per line
with a `text` field. [download] fetches corpus files over HTTP; [read_corpus]
loads a source directory into memory.
!*/
pub mod download;
mod jsonl;
mod post;

pub use jsonl::read_corpus;
pub use jsonl::JsonlReader;
pub use post::ClassifiedPost;
pub use post::Post;
