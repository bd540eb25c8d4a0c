use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Global configuration loaded from `~/.config/pinfetch/config.toml`.
///
/// These values fix the release naming convention; together with a version
/// string they fully determine the download URL. They are authoring-time
/// constants, not runtime-derived input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinfetchConfig {
    /// Base URL of the release host.
    pub base_url: String,
    /// GitHub organization owning the release.
    pub github_org: String,
    /// GitHub project the release belongs to.
    pub github_project: String,
    /// Name of the tool binary shipped in the tarball.
    pub tool_name: String,
    /// Build-flavor suffix in the tarball name (e.g. `travis`).
    pub tarball_suffix: String,
    /// Connect timeout for the download, in seconds.
    pub connect_timeout_secs: u64,
    /// Overall transfer timeout for the download, in seconds.
    pub transfer_timeout_secs: u64,
    /// Optional cache directory override; defaults to the XDG cache dir.
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
}

impl Default for PinfetchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://github.com".to_string(),
            github_org: "xd009642".to_string(),
            github_project: "tarpaulin".to_string(),
            tool_name: "cargo-tarpaulin".to_string(),
            tarball_suffix: "travis".to_string(),
            connect_timeout_secs: 30,
            transfer_timeout_secs: 600,
            cache_dir: None,
        }
    }
}

impl PinfetchConfig {
    /// Directory the tarball is downloaded to and extracted into.
    /// Honors the config override, else `~/.cache/pinfetch`.
    pub fn cache_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.cache_dir {
            return Ok(dir.clone());
        }
        let xdg_dirs = xdg::BaseDirectories::with_prefix("pinfetch")?;
        Ok(xdg_dirs.get_cache_home())
    }

    /// Timeouts for the fetch step.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            transfer_timeout: Duration::from_secs(self.transfer_timeout_secs),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pinfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PinfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PinfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PinfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}
