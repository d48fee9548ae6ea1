//! # blog-pull
//!
//! Fetches a fixed series of blog posts and saves the main content element of
//! each one as a standalone HTML file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use blog_pull::{HttpFetcher, Options, Scraper};
//!
//! let scraper = Scraper::new(HttpFetcher::new()?, Options::default());
//! let reports = scraper.run(|report| println!("{}", report.outcome))?;
//! println!("{} pages processed", reports.len());
//! # Ok::<(), blog_pull::Error>(())
//! ```
//!
//! ## Per-page behavior
//!
//! - **Status 200 with main content**: the first `<article>`, or failing that
//!   the first `<div class="post-content">`, is written verbatim (outer HTML)
//!   to the page's output file, replacing any previous file.
//! - **Status 200 without main content**: reported, nothing written.
//! - **Any other status**: reported with the status code, nothing written.
//! - **No response at all, or a failed write**: the run stops with an
//!   [`Error`]; later pages are not requested.

mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Selector rules for locating the main content element.
pub mod selector;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Main content extraction from HTML text or response bytes.
pub mod extract;

/// The `Fetcher` seam and its reqwest implementation.
pub mod fetch;

/// URL and output file resolution per page index.
pub mod pages;

/// The fetch-and-extract loop.
pub mod scrape;

/// Tracing subscriber setup.
pub mod logging;

// Public API - re-exports
pub use error::{Error, Result};
pub use extract::{extract_main_content, extract_main_content_bytes};
pub use fetch::{FetchedPage, Fetcher, HttpFetcher};
pub use options::{Options, DEFAULT_FILE_TEMPLATE, DEFAULT_URL_TEMPLATE, INDEX_PLACEHOLDER};
pub use pages::PageTarget;
pub use result::{PageOutcome, PageReport};
pub use scrape::Scraper;
