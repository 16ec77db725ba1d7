use log::debug;
use reqwest::blocking::{Client, Response};
use reqwest::header::{REFERER, USER_AGENT};
use url::Url;

use crate::error::{FetchError, Result};

/// Desktop browser signature sent instead of the application's own identity,
/// for servers that turn away non-browser clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/56.0.2924.87 Safari/537.36";

/// A single GET request. Built per call and never reused.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    url: Url,
    user_agent: String,
    referer: Option<Url>,
}

impl FetchRequest {
    pub fn new(url: &str, user_agent: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        Ok(FetchRequest {
            url,
            user_agent: user_agent.to_string(),
            referer: None,
        })
    }

    pub fn with_referer(mut self, referer: Url) -> Self {
        self.referer = Some(referer);
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn referer(&self) -> Option<&Url> {
        self.referer.as_ref()
    }

    /// Issue the request and block until the response headers arrive.
    ///
    /// Each call gets its own client, so nothing is shared between calls.
    pub fn send(&self) -> Result<Response> {
        let client = Client::builder().build()?;

        let mut builder = client.get(self.url.clone()).header(USER_AGENT, self.user_agent.as_str());
        if let Some(referer) = &self.referer {
            builder = builder.header(REFERER, referer.as_str());
        }

        debug!("GET {} (User-Agent: {:?})", self.url, self.user_agent);
        let response = builder.send()?;
        debug!("GET {} -> {}", self.url, response.status());

        Ok(response)
    }
}
