//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate so the rest of the crate speaks in
//! small named operations instead of raw `Selection` calls.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

/// Parse an HTML document.
///
/// Parsing never fails; malformed markup is repaired the way browsers do.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Get outer HTML content, the element's own tag included.
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn outer_html(sel: &Selection) -> StrTendril {
    sel.html()
}

/// The document node, whose descendants are every element in the page.
#[inline]
#[must_use]
pub fn root(doc: &Document) -> Selection<'_> {
    Selection::from(doc.root())
}
