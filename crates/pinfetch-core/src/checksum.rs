//! SHA-256 integrity gate for the downloaded tarball.
//!
//! The digest comparison is the one check standing between a downloaded
//! artifact and executing it, so a mismatch is always fatal to the run.

use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const BUF_SIZE: usize = 64 * 1024;

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded.
pub fn sha256_path(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    let digest = hasher.finalize();
    Ok(hex::encode(digest))
}

/// Verifies that `path` hashes to `expected` (lowercase hex compare).
/// Returns the computed digest on success so callers can report it.
pub fn verify_sha256(path: &Path, expected: &str) -> Result<String> {
    let computed = sha256_path(path)?;
    let expected = expected.to_ascii_lowercase();
    if computed != expected {
        bail!(
            "checksum mismatch for {}: expected {}, got {}",
            path.display(),
            expected,
            computed
        );
    }
    Ok(computed)
}

/// Writes the `<hash>  <tarball>` sidecar line (sha256sum check format) into
/// `dir` under `sidecar_name`. Returns the sidecar path.
pub fn write_sha256sum(
    dir: &Path,
    sidecar_name: &str,
    expected: &str,
    tarball_name: &str,
) -> Result<PathBuf> {
    let path = dir.join(sidecar_name);
    let line = format!("{}  {}\n", expected, tarball_name);
    std::fs::write(&path, line).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
