//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--config <path>`: Use this config file instead of searching
//! - `--data-dir <path>`: Directory holding the metadata file
//! - `--file <name>`: Name of the metadata file
//! - `--debug`: Enable debug logging

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::RegionName;

/// regionmeta - Look up per-region metadata
#[derive(Parser, Debug)]
#[command(name = "regionmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding the metadata file
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Name of the metadata file inside the data directory
    #[arg(long, global = true, value_name = "NAME")]
    pub file: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve metadata for a region, falling back to its ancestors
    #[command(after_help = "\
EXAMPLES:
    # Moscow has no entry of its own, so Russia's is used
    regionmeta lookup Russia_Moscow

    # Machine-readable output
    regionmeta lookup France_Normandy --json")]
    Lookup {
        /// Region name, e.g. Russia_Moscow
        name: RegionName,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the names tried when resolving a region
    Chain {
        /// Region name, e.g. Russia_Moscow_Central
        name: RegionName,
    },
}
