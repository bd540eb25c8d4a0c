//! CLI for the pinfetch release fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pinfetch_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_install, run_url, run_verify};

/// Top-level CLI for pinfetch.
#[derive(Debug, Parser)]
#[command(name = "pinfetch")]
#[command(about = "Fetch, verify, and extract a pinned release tarball", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download the pinned release, verify its SHA-256, and extract it.
    Install {
        /// Release version to install (defaults to the built-in pin).
        #[arg(long)]
        version: Option<String>,
        /// Expected SHA-256 digest of the tarball. Required with --version.
        #[arg(long)]
        sha256: Option<String>,
        /// Directory to download into and extract to (defaults to the cache dir).
        #[arg(long, value_name = "DIR")]
        cache_dir: Option<PathBuf>,
    },

    /// Verify that a local file matches a SHA-256 digest.
    Verify {
        /// Path to the file.
        path: PathBuf,
        /// Expected SHA-256 digest (hex).
        sha256: String,
    },

    /// Compute SHA-256 of a file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Print the release download URL for a version.
    Url {
        /// Release version (defaults to the built-in pin).
        #[arg(long)]
        version: Option<String>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Install {
                version,
                sha256,
                cache_dir,
            } => run_install(&cfg, version.as_deref(), sha256.as_deref(), cache_dir)?,
            CliCommand::Verify { path, sha256 } => run_verify(&path, &sha256)?,
            CliCommand::Checksum { path } => run_checksum(&path)?,
            CliCommand::Url { version } => run_url(&cfg, version.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
