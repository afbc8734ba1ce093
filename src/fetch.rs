//! Retrieval boundary for documents and stylesheets.
//!
//! Fetching is a trait seam so the failure path is testable without a
//! network: the resolver takes any [`Fetcher`], and production code uses the
//! blocking [`HttpFetcher`]. Fetches are synchronous and sequential; a slow
//! or unreachable host is bounded by the per-request timeout and treated as
//! an ordinary fetch failure.

use std::time::Duration;

/// Per-request timeout; a timed-out fetch is a failed fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("style-stealer/", env!("CARGO_PKG_VERSION"));

/// Error for a single retrieval attempt.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure: connection, DNS, timeout, redirect loop.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {0} for {1}")]
    Status(u16, String),

    /// Reading a local file failed.
    #[error("file read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Retrieves the text behind a URL.
pub trait Fetcher {
    /// Fetch `url` and return its body as text.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] when the resource cannot be retrieved; the
    /// caller decides whether that is fatal (document) or skippable
    /// (stylesheet).
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP fetcher with a timeout, limited redirects and a UA string.
#[derive(Debug)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build the fetcher and its underlying client.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the TLS backend fails to initialize.
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16(), url.to_string()));
        }

        Ok(response.text()?)
    }
}
