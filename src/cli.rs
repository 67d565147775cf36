//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "skylabel", about = "pre-labeled dataset generation tool.")]
/// Holds every command that is callable by the `skylabel` command.
pub enum Skylabel {
    #[structopt(about = "Download corpus files from a url list")]
    Download(Download),
    #[structopt(about = "Run the pre-labeling pipeline")]
    Pipeline(Pipeline),
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
pub struct Download {
    #[structopt(parse(from_os_str), help = "path to a file listing corpus urls")]
    pub paths_file: PathBuf,
    #[structopt(parse(from_os_str), help = "download destination")]
    pub dst: PathBuf,
    #[structopt(short = "t", help = "number of concurrent downloads. Default is 4.")]
    pub n_tasks: Option<usize>,
    #[structopt(short = "o", help = "number of files to skip. Default is 0.")]
    pub offset: Option<usize>,
}

#[derive(Debug, StructOpt)]
/// Pipeline command and parameters.
pub struct Pipeline {
    #[structopt(parse(from_os_str), help = "source (contains .jsonl/.jsonl.gz files)")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "pipeline result destination")]
    pub dst: PathBuf,
    #[structopt(
        long = "seed",
        help = "random seed for the stratified sampler",
        default_value = "42"
    )]
    pub seed: u64,
    #[structopt(
        parse(from_os_str),
        long = "quotas",
        help = "path to a JSON quota table (defaults to the built-in 1000-post distribution)"
    )]
    pub quotas: Option<PathBuf>,
}
