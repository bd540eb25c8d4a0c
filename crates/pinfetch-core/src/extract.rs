//! Tarball extraction, run only after the integrity gate has passed.
//!
//! Unpacks the `.tar.gz` into the cache directory as-is (the release tarball
//! is flat: the tool binary sits at the archive root). Entry paths are checked
//! against absolute and parent-directory components before anything touches
//! the filesystem.

use anyhow::{bail, Context, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::path::{Component, Path};
use tar::Archive;

/// Extracts a verified tar.gz archive into `dest_dir`, creating it if needed.
/// Existing files from a previous run are overwritten. Malformed archives and
/// entries escaping `dest_dir` are fatal.
pub fn extract_tar_gz(archive_path: &Path, dest_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dest_dir)
        .with_context(|| format!("create {}", dest_dir.display()))?;

    let file = File::open(archive_path)
        .with_context(|| format!("open {}", archive_path.display()))?;
    let mut archive = Archive::new(GzDecoder::new(file));

    for entry in archive
        .entries()
        .with_context(|| format!("read tar entries of {}", archive_path.display()))?
    {
        let mut entry =
            entry.with_context(|| format!("read tar entry of {}", archive_path.display()))?;
        let entry_path = entry.path().context("entry path")?.into_owned();

        if entry_path.is_absolute()
            || entry_path
                .components()
                .any(|c| matches!(c, Component::ParentDir))
        {
            bail!(
                "refusing to extract entry escaping the destination: {}",
                entry_path.display()
            );
        }

        let output_path = dest_dir.join(&entry_path);
        if entry.header().entry_type().is_dir() {
            std::fs::create_dir_all(&output_path)
                .with_context(|| format!("create {}", output_path.display()))?;
        } else {
            if let Some(parent) = output_path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
            entry
                .unpack(&output_path)
                .with_context(|| format!("extract {}", output_path.display()))?;
        }
        tracing::trace!("extracted {}", output_path.display());
    }

    Ok(())
}
