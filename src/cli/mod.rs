//! cli
//!
//! Command-line interface for regionmeta.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install the log subscriber
//! - Resolve configuration and dispatch to the lookup layer
//!
//! The library never installs a subscriber; only this layer does.

pub mod args;
pub mod output;

pub use args::{Cli, Command};

use std::io::IsTerminal;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::core::region::RegionError;
use crate::lookup::{lookup_in, RegionMetaReader};
use crate::storage::ResourceReader;

/// Run the CLI application.
///
/// Returns `Ok(true)` when the command found what it was asked for,
/// `Ok(false)` for a region without usable metadata.
pub fn run() -> Result<bool> {
    let cli = Cli::parse_args();
    init_logging(cli.debug)?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(cli.data_dir.clone(), cli.file.clone())?;

    tracing::debug!(
        config = ?config.path(),
        data_dir = %config.data_dir().display(),
        meta_file = config.meta_file(),
        "resolved configuration"
    );

    let reader = RegionMetaReader::from_config(&config);
    match cli.command {
        Command::Lookup { name, json } => lookup(&reader, name.as_str(), json),
        Command::Chain { name } => chain(&reader, name.as_str()),
    }
}

/// `RUST_LOG` takes precedence over the built-in `regionmeta=warn` default;
/// `--debug` raises regionmeta's own events to debug on top of either.
fn init_logging(debug: bool) -> Result<()> {
    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("regionmeta=warn"));
    if debug {
        filter = filter.add_directive("regionmeta=debug".parse()?);
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .init();
    Ok(())
}

fn lookup<R: ResourceReader>(
    reader: &RegionMetaReader<R>,
    name: &str,
    json: bool,
) -> Result<bool> {
    match reader.lookup(name) {
        Ok(resolved) => {
            if json {
                let text = serde_json::to_string_pretty(&resolved)
                    .context("failed to serialize region metadata")?;
                println!("{text}");
            } else {
                print!("{}", output::format_region(&resolved));
            }
            Ok(true)
        }
        Err(RegionError::NotFound(_)) => {
            eprintln!("no metadata for region '{name}'");
            Ok(false)
        }
        Err(RegionError::Malformed { country, reason }) => {
            report_malformed(&country, &reason);
            Ok(false)
        }
        Err(e) => Err(e).with_context(|| format!("failed to load {}", reader.meta_file())),
    }
}

fn chain<R: ResourceReader>(
    reader: &RegionMetaReader<R>,
    name: &str,
) -> Result<bool> {
    let document = reader
        .load_document()
        .with_context(|| format!("failed to load {}", reader.meta_file()))?;

    print!("{}", output::format_chain(name, &document));

    match lookup_in(&document, name) {
        Ok(_) => Ok(true),
        Err(RegionError::Malformed { country, reason }) => {
            report_malformed(&country, &reason);
            Ok(false)
        }
        Err(RegionError::NotFound(_)) => Ok(false),
        Err(e) => Err(e.into()),
    }
}

fn report_malformed(country: &str, reason: &str) {
    eprintln!("error: malformed metadata entry for '{country}': {reason}");
}
