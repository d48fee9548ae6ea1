//! Main content extraction.
//!
//! Parses a page and serializes the first element picked by
//! [`MAIN_CONTENT_RULES`]: the first `<article>`, else the first
//! `<div class="post-content">`.

use tracing::trace;

use crate::dom;
use crate::encoding;
use crate::selector::{self, content::MAIN_CONTENT_RULES};

/// Outer HTML of the page's main content element, if one exists.
///
/// # Example
///
/// ```rust
/// use blog_pull::extract_main_content;
///
/// let html = "<html><body><article>Part 2 text</article></body></html>";
/// assert_eq!(
///     extract_main_content(html).as_deref(),
///     Some("<article>Part 2 text</article>")
/// );
/// assert!(extract_main_content("<p>nothing here</p>").is_none());
/// ```
#[must_use]
pub fn extract_main_content(html: &str) -> Option<String> {
    let doc = dom::parse(html);
    let found = selector::first_match(&doc, MAIN_CONTENT_RULES)?;
    let fragment = dom::outer_html(&found);
    trace!(bytes = fragment.len(), "main content element found");
    Some(fragment.to_string())
}

/// Decode a response body and extract its main content element.
///
/// `content_type` is the response's `Content-Type` header, used for charset
/// detection ahead of `<meta>` declarations.
#[must_use]
pub fn extract_main_content_bytes(body: &[u8], content_type: Option<&str>) -> Option<String> {
    let html = encoding::decode_body(body, content_type);
    extract_main_content(&html)
}
