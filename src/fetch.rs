//! Page fetching.
//!
//! [`Fetcher`] is the seam between the scrape loop and the network. The
//! production implementation is [`HttpFetcher`], a blocking reqwest client
//! with the request timeout disabled.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::error::{Error, Result};

/// A response as seen by the scrape loop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    /// HTTP status code.
    pub status: u16,
    /// `Content-Type` header value, if present and valid ASCII.
    pub content_type: Option<String>,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Status 200, exactly. Other 2xx codes are not treated as success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Performs one GET per call.
///
/// Any response, whatever its status, is `Ok`. `Err` is reserved for requests
/// that produced no response at all.
pub trait Fetcher {
    #[allow(clippy::missing_errors_doc)]
    fn get(&self, url: &Url) -> Result<FetchedPage>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn get(&self, url: &Url) -> Result<FetchedPage> {
        (**self).get(url)
    }
}

/// Blocking HTTP fetcher backed by `reqwest`.
///
/// No custom headers, no retries. Redirects follow the client default.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the request timeout disabled.
    #[allow(clippy::missing_errors_doc)]
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }

    /// Wrap an existing client.
    #[must_use]
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &Url) -> Result<FetchedPage> {
        let transport = |source: reqwest::Error| Error::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url.clone()).send().map_err(transport)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(transport)?.to_vec();

        debug!(%url, status, bytes = body.len(), "fetched page");

        Ok(FetchedPage {
            status,
            content_type,
            body,
        })
    }
}
