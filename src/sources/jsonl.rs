//! JSONL corpus reading.
use std::fs::File;
use std::io::{BufRead, BufReader, Lines, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use log::{error, info, warn};
use serde_json::Value;

use crate::error::Error;

use super::Post;

/// Iterator over the JSON records of a newline-delimited JSON stream.
///
/// Blank lines are skipped; unreadable or unparseable lines yield an `Err`
/// item and the iterator keeps going, leaving the skip/abort decision to the
/// caller.
pub struct JsonlReader<R: Read> {
    lines: Lines<BufReader<R>>,
}

impl<R: Read> JsonlReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            lines: BufReader::new(source).lines(),
        }
    }
}

impl<R: Read> Iterator for JsonlReader<R> {
    type Item = Result<Value, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    return Some(serde_json::from_str(&line).map_err(Error::from));
                }
                Err(e) => return Some(Err(Error::Io(e))),
            }
        }
    }
}

/// true if `path` looks like a corpus file we can read.
fn is_corpus_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(".jsonl") || name.ends_with(".jsonl.gz"))
        .unwrap_or(false)
}

/// list corpus files in the source folder, in lexicographic filename order.
///
/// The ordering is what makes ingestion ids (and everything seeded
/// downstream) stable across runs over the same folder.
fn corpus_paths(src: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(src)?
        .filter_map(|entry| {
            entry.map_or_else(
                |e| {
                    error!("error reading source directory: {}", e);
                    None
                },
                Some,
            )
        })
        .map(|entry| entry.path())
        .filter(|path| is_corpus_file(path))
        .collect();
    paths.sort();

    Ok(paths)
}

/// Load every post of a source folder into memory.
///
/// Each record gets an ingestion id equal to its position in the overall read
/// order. The `text` field is extracted leniently: a missing or non-string
/// field yields a textless [Post] (rejected later by the language filter)
/// rather than an error. Malformed lines are logged and skipped. A missing
/// source folder is fatal.
pub fn read_corpus(src: &Path) -> Result<Vec<Post>, Error> {
    let paths = corpus_paths(src)?;
    if paths.is_empty() {
        warn!("no .jsonl/.jsonl.gz files found in {:?}", src);
    }

    let mut posts = Vec::new();
    for path in paths {
        info!("reading {:?}", path);
        let file = File::open(&path)?;

        let reader: Box<dyn Read> = if path.extension().map_or(false, |ext| ext == "gz") {
            Box::new(MultiGzDecoder::new(file))
        } else {
            Box::new(file)
        };

        for record in JsonlReader::new(reader) {
            match record {
                Ok(value) => {
                    let text = value.get("text").and_then(Value::as_str).map(String::from);
                    posts.push(Post::new(posts.len(), text));
                }
                Err(e) => warn!("skipping malformed record in {:?}: {:?}", path, e),
            }
        }
    }

    Ok(posts)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{read_corpus, JsonlReader};

    #[test]
    fn reads_records_and_skips_garbage() {
        let source = "{\"text\": \"hello\"}\n\nnot json at all\n{\"text\": 42}\n";
        let records: Vec<_> = JsonlReader::new(source.as_bytes()).collect();

        assert_eq!(records.len(), 3);
        assert!(records[0].is_ok());
        assert!(records[1].is_err());
        assert!(records[2].is_ok());
    }

    #[test]
    fn corpus_ids_follow_read_order() {
        let dir = tempfile::tempdir().unwrap();

        // named so that b.jsonl sorts after a.jsonl
        let mut a = std::fs::File::create(dir.path().join("a.jsonl")).unwrap();
        writeln!(a, "{{\"text\": \"first\"}}").unwrap();
        writeln!(a, "{{\"text\": \"second\", \"lang\": \"en\"}}").unwrap();
        let mut b = std::fs::File::create(dir.path().join("b.jsonl")).unwrap();
        writeln!(b, "{{\"text\": \"third\"}}").unwrap();
        std::fs::File::create(dir.path().join("ignored.txt")).unwrap();

        let posts = read_corpus(dir.path()).unwrap();
        let texts: Vec<_> = posts.iter().map(|p| p.text().unwrap()).collect();

        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(posts[2].id(), 2);
    }

    #[test]
    fn non_string_text_is_kept_textless() {
        let dir = tempfile::tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("posts.jsonl")).unwrap();
        writeln!(f, "{{\"text\": 42}}").unwrap();
        writeln!(f, "{{\"no_text\": \"here\"}}").unwrap();

        let posts = read_corpus(dir.path()).unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.text().is_none()));
    }

    #[test]
    fn missing_source_dir_is_fatal() {
        assert!(read_corpus(std::path::Path::new("/nonexistent/corpus")).is_err());
    }
}
