mod config;
pub use config::AppIdentity;

mod download;
pub use download::DownloadResult;
pub use download::{download_remote_file, try_download_remote_file, verify_sha256, CHUNK_SIZE};

mod error;
pub use error::{FetchError, Result};

mod hash;
pub use hash::DigestAlgorithm;
pub use hash::{hash_on_disk_digest, hmac_sha1_hex, to_hex};

mod json;
pub use json::{get_remote_json, try_get_remote_json};

pub mod request;
