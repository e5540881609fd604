// src/core/net.rs

// Page retrieval. The scrape loop only sees the `Fetch` trait, so tests can
// swap in canned pages and the HTTP client stays an implementation detail.

use std::time::Duration;

use reqwest::blocking::Client;
use thiserror::Error;
use tracing::debug;

use crate::config::consts::USER_AGENT;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
    #[error("building HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Anything that can turn a page locator into raw markup.
pub trait Fetch {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP GET. Redirects are followed by the client; non-2xx is an error.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy, TLS or header tweaks).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let request_err = |source: reqwest::Error| FetchError::Request { url: s!(url), source };

        let resp = self.client.get(url).send().map_err(request_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        // Charset comes from Content-Type when present, UTF-8 (lossy) otherwise.
        let body = resp.text().map_err(request_err)?;
        debug!(url, bytes = body.len(), "fetched");
        Ok(body)
    }
}
