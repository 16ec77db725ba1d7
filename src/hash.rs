use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use digest::DynDigest;
use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
}

#[allow(clippy::box_default)]
fn select_hasher(alg: DigestAlgorithm) -> Box<dyn DynDigest> {
    match alg {
        DigestAlgorithm::Sha1 => Box::new(Sha1::default()),
        DigestAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
    }
}

/// Lowercase hex, two characters per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // writing to a String cannot fail
        let _ = write!(out, "{:02x}", b);
    }
    out
}

/// HMAC-SHA1 of `message` keyed with `key`, as 40 hex characters.
pub fn hmac_sha1_hex(key: &str, message: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC can take key of any size");
    Mac::update(&mut mac, message.as_bytes());
    to_hex(&Mac::finalize(mac).into_bytes())
}

/// Hex digest of the file at `path`, limited to its first `maxlen` bytes if given.
pub fn hash_on_disk_digest(path: &Path, maxlen: Option<u64>, alg: DigestAlgorithm) -> Result<String> {
    let file = File::open(path).context(format!("failed to open path({:?})", path.display()))?;
    let filelen = file.metadata().context(format!("failed to get metadata of {:?}", path.display()))?.len();

    let mut remaining = maxlen.map_or(filelen, |len| len.min(filelen));

    const CHUNKLEN: usize = 10485760; // 10M

    let mut hasher = select_hasher(alg);
    let mut freader = BufReader::new(file);
    let mut databuf = vec![0u8; remaining.min(CHUNKLEN as u64) as usize];

    while remaining > 0 {
        let chunklen = remaining.min(CHUNKLEN as u64) as usize;

        freader.read_exact(&mut databuf[..chunklen]).context(format!("failed to read_exact(chunklen {:?})", chunklen))?;
        hasher.update(&databuf[..chunklen]);

        remaining -= chunklen as u64;
    }

    Ok(to_hex(&hasher.finalize()))
}
