use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use log::{debug, info, warn};
use sha2::{Digest, Sha256};
use url::Url;

use crate::config::AppIdentity;
use crate::error::{FetchError, Result};
use crate::hash::to_hex;
use crate::request::{FetchRequest, BROWSER_USER_AGENT};

/// Bytes pulled from the response body per read.
pub const CHUNK_SIZE: usize = 8192;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadResult {
    pub path: PathBuf,
    pub len: u64,
    pub hash_sha256: String,
}

/// Download `url` into `local_path`, truncating whatever was there.
///
/// The download only counts when the number of bytes read equals the
/// `Content-Length` the server declared. A response without one is a failure.
/// On any failure after the file was opened, the file at `local_path` is removed.
pub fn try_download_remote_file(identity: &AppIdentity, url: &str, local_path: &Path, use_fake_ua: bool) -> Result<DownloadResult> {
    let request = download_request(identity, url, use_fake_ua)?;

    let file = File::create(local_path).map_err(|source| FetchError::FileOpen {
        path: local_path.to_path_buf(),
        source,
    })?;

    let result = stream_to_file(&request, file, local_path);

    if result.is_err() && local_path.exists() {
        debug!("removing partial download {:?}", local_path.display());
        if let Err(e) = fs::remove_file(local_path) {
            warn!("failed to remove partial download {:?}: {}", local_path.display(), e);
        }
    }

    result
}

/// Like [`try_download_remote_file`], reduced to whether it succeeded.
pub fn download_remote_file(identity: &AppIdentity, url: &str, local_path: &Path, use_fake_ua: bool) -> bool {
    match try_download_remote_file(identity, url, local_path, use_fake_ua) {
        Ok(_) => true,
        Err(e) => {
            warn!("download of {} to {:?} failed: {}", url, local_path.display(), e);
            false
        }
    }
}

/// Check a finished download against an expected hex SHA-256, removing the file on mismatch.
pub fn verify_sha256(result: &DownloadResult, expected: &str) -> anyhow::Result<()> {
    if !expected.eq_ignore_ascii_case(&result.hash_sha256) {
        fs::remove_file(&result.path).context(format!("failed to remove {:?}", result.path.display()))?;
        bail!("SHA-256 mismatch for {:?}: expected {}, got {}", result.path.display(), expected, result.hash_sha256);
    }

    info!("SHA-256 of {:?} verified", result.path.display());
    Ok(())
}

// The URL being fetched doubles as its own Referer.
fn download_request(identity: &AppIdentity, url: &str, use_fake_ua: bool) -> Result<FetchRequest> {
    let user_agent = if use_fake_ua { BROWSER_USER_AGENT } else { identity.user_agent() };
    let request = FetchRequest::new(url, user_agent)?;
    let referer: Url = request.url().clone();
    Ok(request.with_referer(referer))
}

// `file` is dropped before returning, so the caller may remove the path afterwards.
fn stream_to_file(request: &FetchRequest, mut file: File, path: &Path) -> Result<DownloadResult> {
    let mut response = request.send()?;

    if !response.status().is_success() {
        warn!("{} answered {}, saving the body anyway", request.url(), response.status());
    }
    let declared = response.content_length();

    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut received: u64 = 0;

    loop {
        let count = response.read(&mut buf).map_err(FetchError::BodyRead)?;
        if count == 0 {
            break;
        }

        file.write_all(&buf[..count]).map_err(|source| FetchError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        hasher.update(&buf[..count]);
        received += count as u64;
    }

    file.flush().map_err(|source| FetchError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    if declared != Some(received) {
        return Err(FetchError::LengthMismatch { declared, received });
    }

    let hash_sha256 = to_hex(&hasher.finalize());
    info!("downloaded {} ({} bytes, sha256 {}) to {:?}", request.url(), received, hash_sha256, path.display());

    Ok(DownloadResult {
        path: path.to_path_buf(),
        len: received,
        hash_sha256,
    })
}
