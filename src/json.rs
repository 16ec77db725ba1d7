use log::debug;
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::AppIdentity;
use crate::error::{FetchError, Result};
use crate::request::FetchRequest;

/// GET `url` and parse the body as JSON.
///
/// Anything other than `200 OK` is reported as [`FetchError::Status`] without
/// looking at the body.
pub fn try_get_remote_json(identity: &AppIdentity, url: &str) -> Result<Value> {
    let response = FetchRequest::new(url, identity.user_agent())?.send()?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status(status));
    }

    let body = response.bytes()?;
    if body.is_empty() {
        return Err(FetchError::EmptyBody);
    }

    Ok(serde_json::from_slice(&body)?)
}

/// Like [`try_get_remote_json`], but every failure becomes `None`.
pub fn get_remote_json(identity: &AppIdentity, url: &str) -> Option<Value> {
    match try_get_remote_json(identity, url) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("no JSON from {}: {}", url, e);
            None
        }
    }
}
