//! `pinfetch verify` – run the integrity gate on a local file.

use anyhow::Result;
use pinfetch_core::checksum;
use std::path::Path;

pub fn run_verify(path: &Path, sha256: &str) -> Result<()> {
    let digest = checksum::verify_sha256(path, sha256)?;
    println!("OK  {}  {}", digest, path.display());
    Ok(())
}
