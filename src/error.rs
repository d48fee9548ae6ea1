//! Error types for blog-pull.
//!
//! Only fatal conditions live here. A non-200 status or a page without a main
//! content element is a normal [`PageOutcome`](crate::PageOutcome), not an error.

use std::path::PathBuf;

/// Error type for fetch, extraction and save operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A templated page URL did not parse.
    #[error("invalid page URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, connect, TLS, malformed reply).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Writing an extracted fragment to disk failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for blog-pull operations.
pub type Result<T> = std::result::Result<T, Error>;
