//! Command-line argument parsing

use clap::Parser;
use std::path::PathBuf;

/// Edit delimiter-separated text files in the terminal
#[derive(Parser, Debug)]
#[command(name = "delim-edit", version, about = "Edit CSV, TSV and other delimited files")]
pub struct CliArgs {
    /// Files to open. Only the first is edited; none starts a blank grid.
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Show selection and scroll state on the status bar
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    pub generate_config: bool,
}
