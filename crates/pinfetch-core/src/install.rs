//! The install pipeline: fetch, then verify, then extract, strictly in that
//! order with fail-fast propagation.
//!
//! The ordering is the whole point: extraction must never see bytes the
//! integrity gate has not passed, and the gate must never run on a partial
//! download (the fetch step only surfaces a file after a completed transfer
//! and atomic rename). A failed run reports the last phase it completed.

use anyhow::Context;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::checksum;
use crate::extract;
use crate::fetch::{self, FetchOptions};
use crate::release::ReleaseDescriptor;

/// Phases of one install run. A run either reaches `Done` or stops at the
/// first failure; `InstallError::phase_reached` names the last phase that
/// completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallPhase {
    Start,
    Fetched,
    Verified,
    Extracted,
    Done,
}

impl fmt::Display for InstallPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InstallPhase::Start => "start",
            InstallPhase::Fetched => "fetched",
            InstallPhase::Verified => "verified",
            InstallPhase::Extracted => "extracted",
            InstallPhase::Done => "done",
        };
        f.write_str(s)
    }
}

/// Terminal failure of an install run: the underlying error plus the last
/// phase that completed before it.
#[derive(Debug)]
pub struct InstallError {
    phase_reached: InstallPhase,
    source: anyhow::Error,
}

impl InstallError {
    pub fn phase_reached(&self) -> InstallPhase {
        self.phase_reached
    }
}

impl fmt::Display for InstallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "install failed after phase {}: {:#}",
            self.phase_reached, self.source
        )
    }
}

impl std::error::Error for InstallError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Outcome of a successful install run.
#[derive(Debug)]
pub struct InstallReport {
    /// Verified tarball left in the cache dir.
    pub tarball_path: PathBuf,
    /// `<hash>  <tarball>` sidecar written next to it.
    pub sidecar_path: PathBuf,
    /// Computed digest (equal to the pinned one).
    pub digest: String,
    /// Bytes transferred by the fetch step.
    pub bytes_fetched: u64,
    /// Directory the tarball contents were unpacked into; callers add this
    /// to their executable search path.
    pub install_dir: PathBuf,
}

/// Runs the full pipeline for one release pin into `cache_dir`.
///
/// Re-running with the same pin is idempotent-by-overwrite: the tarball is
/// re-fetched over the previous one and re-verified rather than trusting
/// prior state.
pub fn install(
    desc: &ReleaseDescriptor,
    cache_dir: &Path,
    opts: &FetchOptions,
) -> Result<InstallReport, InstallError> {
    let mut phase = InstallPhase::Start;
    run(desc, cache_dir, opts, &mut phase).map_err(|source| InstallError {
        phase_reached: phase,
        source,
    })
}

fn run(
    desc: &ReleaseDescriptor,
    cache_dir: &Path,
    opts: &FetchOptions,
    phase: &mut InstallPhase,
) -> anyhow::Result<InstallReport> {
    std::fs::create_dir_all(cache_dir)
        .with_context(|| format!("create cache dir {}", cache_dir.display()))?;
    let tarball_path = cache_dir.join(desc.tarball_name());

    let url = desc.download_url();
    tracing::info!(version = desc.version(), url = %url, "fetching release tarball");
    let bytes_fetched = fetch::fetch_tarball(url, &tarball_path, opts)
        .with_context(|| format!("fetch {}", url))?;
    *phase = InstallPhase::Fetched;

    let sidecar_path = checksum::write_sha256sum(
        cache_dir,
        desc.sidecar_name(),
        desc.expected_sha256(),
        desc.tarball_name(),
    )?;

    let digest = checksum::verify_sha256(&tarball_path, desc.expected_sha256())?;
    *phase = InstallPhase::Verified;
    tracing::info!(digest = %digest, "integrity check passed");

    extract::extract_tar_gz(&tarball_path, cache_dir)
        .with_context(|| format!("extract {}", tarball_path.display()))?;
    *phase = InstallPhase::Extracted;

    *phase = InstallPhase::Done;
    tracing::info!(dir = %cache_dir.display(), "install complete");
    Ok(InstallReport {
        tarball_path,
        sidecar_path,
        digest,
        bytes_fetched,
        install_dir: cache_dir.to_path_buf(),
    })
}
