//! CLI argument definitions using clap.
//!
//! ttsync has a single pipeline (extract, merge into the base dictionary,
//! fill target dictionaries), so the surface is flat: a handful of options
//! that override the config file, no subcommands.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Directory to scan for translations (default: ./src)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Base language for translations (default: en)
    #[arg(long)]
    pub from: Option<String>,

    /// Target languages, comma-separated (default: ru)
    #[arg(long, value_delimiter = ',')]
    pub to: Vec<String>,

    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
