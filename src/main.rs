//! # Skylabel
//!
//! Skylabel builds pre-labeled disaster-post datasets: it filters a corpus of
//! short social media posts down to usable English text, assigns provisional
//! category labels through ordered keyword rules, draws a seeded stratified
//! sample against a quota table and writes the result as a CSV plus a Label
//! Studio import file.
//!
//! ## Getting started
//!
//! ```sh
//! skylabel 0.1.0
//! pre-labeled dataset generation tool.
//!
//! USAGE:
//!     skylabel <SUBCOMMAND>
//!
//! FLAGS:
//!     -h, --help       Prints help information
//!     -V, --version    Prints version information
//!
//! SUBCOMMANDS:
//!     download    Download corpus files from a url list
//!     help        Prints this message or the help of the given subcommand(s)
//!     pipeline    Run the pre-labeling pipeline
//! ```
use std::fs::File;
use std::io::Write;

use structopt::StructOpt;

#[macro_use]
extern crate log;

use skylabel::cli;
use skylabel::error::Error;
use skylabel::pipelines::{Pipeline, PreLabel};
use skylabel::sampling::QuotaTable;
use skylabel::sources::download::Downloader;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Skylabel::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Skylabel::Download(d) => {
            let paths = File::open(d.paths_file)?;
            let dl = Downloader::from_paths_file(&paths, d.n_tasks.unwrap_or(4))?;
            let results = dl.download(&d.dst, d.offset.unwrap_or(0)).await;

            let mut error_file = File::create("errors.txt")?;

            // write eventual download errors
            for failure in results.iter().filter(|result| result.is_err()) {
                error!("Error during download:\n {:?}", failure);
                writeln!(error_file, "{:?}", failure.as_ref().unwrap_err())?;
            }
        }

        cli::Skylabel::Pipeline(p) => {
            let quotas = match p.quotas {
                Some(path) => QuotaTable::from_file(&path)?,
                None => QuotaTable::default(),
            };

            let pipeline = PreLabel::new(p.src, p.dst, quotas, p.seed);
            pipeline.run()?;
        }
    };
    Ok(())
}
