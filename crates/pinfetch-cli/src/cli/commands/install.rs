//! `pinfetch install` – fetch, verify, and extract the pinned release.

use anyhow::{bail, Result};
use pinfetch_core::config::PinfetchConfig;
use pinfetch_core::install;
use pinfetch_core::release::ReleaseDescriptor;
use std::path::PathBuf;

/// Runs the full pipeline. A custom `--version` must come with its own
/// `--sha256`; the pin is never guessed for an unpinned version.
pub fn run_install(
    cfg: &PinfetchConfig,
    version: Option<&str>,
    sha256: Option<&str>,
    cache_dir: Option<PathBuf>,
) -> Result<()> {
    let desc = match (version, sha256) {
        (None, None) => ReleaseDescriptor::pinned_default(cfg)?,
        (Some(v), Some(h)) => ReleaseDescriptor::new(cfg, v, h)?,
        (Some(_), None) => bail!("--version requires --sha256 for the pinned digest"),
        (None, Some(_)) => bail!("--sha256 requires --version"),
    };

    let cache_dir = match cache_dir {
        Some(dir) => dir,
        None => cfg.cache_dir()?,
    };

    let report = install::install(&desc, &cache_dir, &cfg.fetch_options())
        .map_err(anyhow::Error::new)?;

    println!(
        "Installed {} {} ({} bytes, sha256 {})",
        cfg.tool_name,
        desc.version(),
        report.bytes_fetched,
        report.digest
    );
    println!("Add to PATH: {}", report.install_dir.display());
    Ok(())
}
