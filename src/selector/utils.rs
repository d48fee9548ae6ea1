//! Utility functions for selector rules
//!
//! Attribute access and element type checks shared by the rule functions.

use crate::dom;
use dom_query::Selection;

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Check if element has a specific tag name
#[inline]
#[must_use]
pub fn is_tag(sel: &Selection, expected: &str) -> bool {
    tag(sel) == expected
}

/// Check if one of the element's whitespace-separated classes equals `token`
///
/// `class` is a multi-valued attribute: `class="entry post-content wide"`
/// carries `post-content`, while `class="post-content-wrapper"` does not.
///
/// # Example
///
/// ```rust
/// use blog_pull::selector::utils;
/// use blog_pull::dom;
///
/// let doc = dom::parse(r#"<div class="entry  post-content">text</div>"#);
/// let div = doc.select("div");
///
/// assert!(utils::has_class(&div, "post-content"));
/// assert!(!utils::has_class(&div, "post"));
/// ```
#[must_use]
pub fn has_class(sel: &Selection, token: &str) -> bool {
    class(sel).split_ascii_whitespace().any(|c| c == token)
}
