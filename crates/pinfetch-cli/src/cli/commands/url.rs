//! `pinfetch url` – print the derived release download URL.

use anyhow::Result;
use pinfetch_core::config::PinfetchConfig;
use pinfetch_core::release::{self, DEFAULT_VERSION};

pub fn run_url(cfg: &PinfetchConfig, version: Option<&str>) -> Result<()> {
    let version = version.unwrap_or(DEFAULT_VERSION);
    let url = release::download_url(cfg, version)?;
    println!("{}", url);
    Ok(())
}
