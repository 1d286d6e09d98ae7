//! Command-line interface definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// doccheck
///
/// Style and link conformance checker for modular AsciiDoc documentation.
/// Validates documents against the modular documentation conventions and
/// verifies that external links are still reachable.
///
/// Exit Codes:
///   0  - No problems found
///   1  - One or more problems found, or a generic error occurred
///   2  - Input file not found
///  13  - Input file permission denied
///  21  - Input is not a regular file
///  22  - Invalid arguments or options
#[derive(Parser)]
#[command(name = "doccheck", version)]
#[command(about = "Conformance checker for modular documentation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check documents against the modular documentation style rules
    Validate {
        /// Report passing checks as well as failures
        #[arg(short, long)]
        verbose: bool,

        /// Style configuration file (default: ./doccheck.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// AsciiDoc files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Verify that external links in documents are reachable
    CheckLinks {
        /// Print every verdict, not only failures
        #[arg(short, long)]
        all: bool,

        /// Colorize the verdict tags
        #[arg(long)]
        color: bool,

        /// Resolve XML includes before extracting links (requires xmllint)
        #[arg(long)]
        expand_includes: bool,

        /// List the extracted links without probing them
        #[arg(short, long)]
        list: bool,

        /// Probe links in parallel
        #[arg(short, long)]
        parallel: bool,

        /// Worker pool size for parallel probing (default: one per link)
        #[arg(long, value_name = "N")]
        jobs: Option<usize>,

        /// AsciiDoc or DocBook XML files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}
