//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use clap_complete::Shell;

/// Interactive console toolkit: cube sums, factorial sums, temperature conversion
#[derive(Parser, Debug)]
#[command(name = "mathbox")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Settings file to use instead of the global one
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print author and version, then exit
    #[arg(long)]
    pub info: bool,

    /// Generate shell completions and exit
    #[arg(long = "generate", value_enum)]
    pub generator: Option<Shell>,
}
