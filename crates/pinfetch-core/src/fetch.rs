//! Sequential HTTPS GET of the release tarball.
//!
//! Streams the response body to `<tarball>.part` and renames it onto the
//! final path only when the transfer finished with a 2xx status. Any failure
//! removes the partial file and is fatal to the caller; there is no retry,
//! because an unverifiable or partial artifact must never be trusted.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the in-flight download: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Timeouts applied to the download transfer.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    pub transfer_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            transfer_timeout: Duration::from_secs(600),
        }
    }
}

/// Error from the fetch step, split by the failure taxonomy that matters to
/// callers: transport (curl), non-success HTTP status, or local disk I/O.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, TLS, connect, timeout, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Transfer completed but the final response status was not 2xx.
    #[error("HTTP {0}")]
    Http(u32),
    /// Writing or renaming the local file failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Downloads `url` to `dest` with a single GET, following redirects (GitHub
/// release assets redirect to object storage). Returns the number of bytes
/// written. On any failure the `.part` file is removed and `dest` is left
/// untouched; re-runs overwrite `dest` via the rename.
pub fn fetch_tarball(url: &Url, dest: &Path, opts: &FetchOptions) -> Result<u64, FetchError> {
    let part = temp_path(dest);
    let mut file = fs::File::create(&part)?;
    let mut written: u64 = 0;
    let mut write_err: Option<std::io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str())?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    easy.timeout(opts.transfer_timeout)?;

    let perform_result = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            match file.write_all(data) {
                Ok(()) => {
                    written += data.len() as u64;
                    Ok(data.len())
                }
                Err(e) => {
                    write_err = Some(e);
                    // Abort the transfer; curl surfaces this as a write error.
                    Ok(0)
                }
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_err {
        let _ = fs::remove_file(&part);
        return Err(FetchError::Io(e));
    }
    if let Err(e) = perform_result {
        let _ = fs::remove_file(&part);
        return Err(FetchError::Curl(e));
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        let _ = fs::remove_file(&part);
        return Err(FetchError::Http(code));
    }

    file.flush()?;
    drop(file);
    if let Err(e) = fs::rename(&part, dest) {
        let _ = fs::remove_file(&part);
        return Err(FetchError::Io(e));
    }
    tracing::debug!(url = %url, bytes = written, "fetched {}", dest.display());
    Ok(written)
}
