use std::path::PathBuf;

use driftpack::SortMode;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Packs a folder of images into a weighted collage")]
pub struct Options {
    #[structopt(flatten)]
    pub global: GlobalOptions,

    #[structopt(subcommand)]
    pub command: Subcommand,
}

#[derive(Debug, StructOpt)]
pub struct GlobalOptions {
    /// The path to a collage.toml file, or a folder containing one. If not
    /// specified, a collage.toml in the current directory is used when
    /// present, otherwise the built-in defaults are.
    #[structopt(long)]
    pub config: Option<PathBuf>,

    /// The folder to read images from. Overrides `input-directory` from the
    /// config file.
    #[structopt(long)]
    pub input: Option<PathBuf>,

    /// How to order images before layout: none, area, width, height, or
    /// random. Overrides `sort` from the config file.
    #[structopt(long)]
    pub sort: Option<SortMode>,

    /// How many collages to generate in random mode. Overrides
    /// `trial-count` from the config file.
    #[structopt(long)]
    pub trials: Option<u32>,

    /// Seed for random mode. The same seed and inputs give the same
    /// collages.
    #[structopt(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, StructOpt)]
pub enum Subcommand {
    /// Lay out every image in the input folder and write the finished
    /// collage(s) as PNG files.
    Compose(ComposeOptions),

    /// Lay out every image in the input folder and print the resulting
    /// placements as JSON, without rendering anything.
    Plan(PlanOptions),
}

#[derive(Debug, StructOpt)]
pub struct ComposeOptions {
    /// Template for output file names. Every `#` is replaced with the sort
    /// mode and, when generating more than one collage, the trial number.
    /// Overrides `output-file` from the config file.
    #[structopt(long)]
    pub output: Option<String>,
}

#[derive(Debug, StructOpt)]
pub struct PlanOptions {
    /// Where to write the JSON plan. Defaults to stdout.
    #[structopt(long)]
    pub output: Option<PathBuf>,
}
