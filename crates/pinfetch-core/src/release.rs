//! Release descriptor: pinned version + expected digest, and the naming
//! convention that derives the tarball name and download URL from them.
//!
//! Everything here is fixed at invocation time from authoring-time constants;
//! nothing is computed from external input at runtime.

use anyhow::{bail, Context, Result};
use url::Url;

use crate::config::PinfetchConfig;

/// Version pinned at authoring time, used when the caller supplies none.
pub const DEFAULT_VERSION: &str = "0.12.4";

/// SHA-256 digest of the default pinned release tarball.
pub const DEFAULT_SHA256: &str =
    "a9537853c7bbc2fa6ffb4b71899b44f3b49dd0a1f2d80819d89c581b961dcdde";

/// A fully resolved release pin: version, expected digest, and the names and
/// URL derived from the configured naming convention.
#[derive(Debug, Clone)]
pub struct ReleaseDescriptor {
    version: String,
    expected_sha256: String,
    tarball_name: String,
    sidecar_name: String,
    download_url: Url,
}

impl ReleaseDescriptor {
    /// Builds a descriptor for the given version and expected digest.
    ///
    /// The digest must be 64 hex characters (upper case is normalized to
    /// lower). The version must be a plain release tag; path separators and
    /// whitespace are rejected so filename derivation stays safe.
    pub fn new(cfg: &PinfetchConfig, version: &str, expected_sha256: &str) -> Result<Self> {
        validate_version(version)?;
        let expected_sha256 = validate_sha256(expected_sha256)?;
        let tarball_name = tarball_name(cfg, version);
        let download_url = download_url(cfg, version)?;
        Ok(Self {
            version: version.to_string(),
            expected_sha256,
            tarball_name,
            sidecar_name: sidecar_name(cfg),
            download_url,
        })
    }

    /// The authoring-time default pin.
    pub fn pinned_default(cfg: &PinfetchConfig) -> Result<Self> {
        Self::new(cfg, DEFAULT_VERSION, DEFAULT_SHA256)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Expected SHA-256 digest, lowercase hex.
    pub fn expected_sha256(&self) -> &str {
        &self.expected_sha256
    }

    /// e.g. `cargo-tarpaulin-0.12.4-travis.tar.gz`
    pub fn tarball_name(&self) -> &str {
        &self.tarball_name
    }

    /// Name of the `<hash>  <tarball>` sidecar file, e.g. `tarpaulin.sha256sum`.
    pub fn sidecar_name(&self) -> &str {
        &self.sidecar_name
    }

    pub fn download_url(&self) -> &Url {
        &self.download_url
    }
}

/// Tarball name under the fixed convention: `<tool>-<version>-<suffix>.tar.gz`.
pub fn tarball_name(cfg: &PinfetchConfig, version: &str) -> String {
    format!(
        "{}-{}-{}.tar.gz",
        cfg.tool_name, version, cfg.tarball_suffix
    )
}

/// Sidecar filename: `<project>.sha256sum`.
pub fn sidecar_name(cfg: &PinfetchConfig) -> String {
    format!("{}.sha256sum", cfg.github_project)
}

/// Release download URL:
/// `<base>/<org>/<project>/releases/download/<version>/<tarball>`.
///
/// The result must parse and use an http(s) scheme, which rules out
/// misconfigured base URLs (e.g. `file://`).
pub fn download_url(cfg: &PinfetchConfig, version: &str) -> Result<Url> {
    validate_version(version)?;
    let raw = format!(
        "{}/{}/{}/releases/download/{}/{}",
        cfg.base_url.trim_end_matches('/'),
        cfg.github_org,
        cfg.github_project,
        version,
        tarball_name(cfg, version)
    );
    let url = Url::parse(&raw).with_context(|| format!("invalid release URL {}", raw))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("release URL {} has unsupported scheme {}", url, other),
    }
}

fn validate_version(version: &str) -> Result<()> {
    if version.is_empty() {
        bail!("version must not be empty");
    }
    if !version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        bail!("version {:?} contains characters outside [A-Za-z0-9._-]", version);
    }
    Ok(())
}

fn validate_sha256(digest: &str) -> Result<String> {
    let digest = digest.trim().to_ascii_lowercase();
    if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("expected a 64-character hex SHA-256 digest, got {:?}", digest);
    }
    Ok(digest)
}
