//! Corpus downloading.
//!
//! Fetches corpus files (e.g. JSONL exports of a posts dataset) from a
//! newline-separated list of URLs, a few at a time.
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use bytes::Buf;
use log::{debug, error};
use url::Url;

use crate::error::Error;

/// holds urls to download and
/// the http client that will make the requests.
pub struct Downloader {
    urls: Vec<Url>,
    client: reqwest::Client,
    n_tasks: usize,
}

impl Downloader {
    /// Construct the url list from a paths file (one url per line).
    /// Unparseable lines are logged and dropped.
    pub fn from_paths_file(paths_file: &File, n_tasks: usize) -> Result<Self, Error> {
        let f = BufReader::new(paths_file);

        let (urls, failures): (Vec<_>, Vec<_>) = f
            .lines()
            .map(|line| {
                line.map_err(Error::from)
                    .and_then(|line| Url::parse(line.trim()).map_err(Error::from))
            })
            .partition(Result::is_ok);

        debug!(
            "got {valid}/{total} valid urls",
            valid = urls.len(),
            total = urls.len() + failures.len()
        );

        for failure in failures {
            error!("invalid paths file line: {:?}", failure.unwrap_err());
        }

        let urls = urls.into_iter().map(Result::unwrap).collect();

        Ok(Downloader {
            urls,
            client: reqwest::Client::new(),
            n_tasks,
        })
    }

    /// Destination file name for the `id`-th url: the url's last path segment,
    /// falling back to a numbered jsonl name.
    fn file_name(url: &Url, id: usize) -> String {
        url.path_segments()
            .and_then(|segments| segments.last())
            .filter(|name| !name.is_empty())
            .map(String::from)
            .unwrap_or_else(|| format!("{:04}.jsonl", id))
    }

    /// attempt to download from `url`, storing the result in dst.
    async fn fetch(&self, url: &Url, dst: &Path, id: usize) -> Result<PathBuf, Error> {
        debug!("downloading {}", url);
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let body = resp.bytes().await?;

        let path = dst.join(Self::file_name(url, id));
        let mut out = File::create(&path)?;
        std::io::copy(&mut body.reader(), &mut out)?;

        Ok(path)
    }

    /// Download all urls into `dst`, skipping the first `offset` ones.
    /// Runs `n_tasks` fetches concurrently; each url reports its own outcome.
    pub async fn download(&self, dst: &Path, offset: usize) -> Vec<Result<PathBuf, Error>> {
        let todo: Vec<(usize, &Url)> = self.urls.iter().enumerate().skip(offset).collect();
        let nb_links = todo.len();

        let mut results = Vec::with_capacity(nb_links);
        for chunk in todo.chunks(self.n_tasks.max(1)) {
            let batch = chunk.iter().map(|(id, url)| self.fetch(url, dst, *id));
            results.extend(futures::future::join_all(batch).await);
            debug!("downloaded {}/{}", results.len(), nb_links);
        }

        results
    }
}
