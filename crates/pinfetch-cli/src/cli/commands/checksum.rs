//! `pinfetch checksum` – compute SHA-256 of a file.

use anyhow::Result;
use pinfetch_core::checksum;
use std::path::Path;

/// Compute and print SHA-256 of the given file in sha256sum format.
pub fn run_checksum(path: &Path) -> Result<()> {
    let digest = checksum::sha256_path(path)?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
