//! CLI argument definitions using clap.
//!
//! shoestock has no subcommands; it always starts the interactive menu.
//! Every flag is optional and overrides the config file.

use clap::Parser;
use std::path::PathBuf;

/// shoestock - track shoe stock in a warehouse
#[derive(Parser, Debug)]
#[command(name = "shoestock")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Inventory file to use instead of the configured one
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}
