use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Why a fetch or download produced nothing.
///
/// The collapsed entry points (`get_remote_json`, `download_remote_file`) only log
/// these; the `try_*` variants hand them back to the caller.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connect, TLS, timeout or protocol failure below HTTP semantics.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),

    #[error("response body is empty")]
    EmptyBody,

    #[error("malformed JSON body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to open {path:?} for writing: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read response body: {0}")]
    BodyRead(#[source] io::Error),

    #[error("failed to write {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bytes received differ from the declared `Content-Length`, or none was declared.
    #[error("received {received} bytes, server declared {declared:?}")]
    LengthMismatch { declared: Option<u64>, received: u64 },
}
