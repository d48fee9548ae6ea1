//! Main content selector rules
//!
//! These rules identify the element holding a blog post's body.

use dom_query::Selection;

use crate::selector::utils::{has_class, is_tag};
use crate::selector::Rule;

/// Main content rules in priority order
/// First match wins - check in order
pub static MAIN_CONTENT_RULES: &[Rule] = &[article_rule, post_content_rule];

/// Rule 1: `<article>` element
#[must_use]
pub fn article_rule(sel: &Selection) -> bool {
    is_tag(sel, "article")
}

/// Rule 2: `<div>` carrying the `post-content` class
///
/// Only consulted when no `<article>` exists anywhere in the document.
#[must_use]
pub fn post_content_rule(sel: &Selection) -> bool {
    is_tag(sel, "div") && has_class(sel, "post-content")
}
