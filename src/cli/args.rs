//! CLI argument definitions using clap derive

use clap::{Parser, ValueEnum};

use crate::cli::commands::generate::GenerateArgs;

#[derive(Parser)]
#[command(name = "hangar")]
#[command(author, version, about = "Assemble a random vehicle from a catalog of parts")]
#[command(long_about = "Reads part records (one per line, category first) from a plain-text file, \
classifies them into engine, fuselage, cabin, wings, armor and weapon buckets, \
and assembles a vehicle from randomly selected parts.")]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Single description line
    #[default]
    Auto,
    /// Single description line
    Text,
    /// Multi-line styled summary
    Styled,
    /// JSON format (for programming)
    Json,
}
