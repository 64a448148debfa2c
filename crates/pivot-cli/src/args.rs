use std::path::PathBuf;

use clap::Parser;

use pivot_core::DEFAULT_INPUT;

#[derive(Debug, Parser)]
#[command(
    name = "pivot",
    version,
    about = "Prune empty values from a JSON document and tag its sampling features"
)]
pub struct Args {
    /// Path to the JSON document
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Write the corrected document here instead of `<input>_corrected.json`
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Log per-run details
    #[arg(short, long)]
    pub verbose: bool,
}
