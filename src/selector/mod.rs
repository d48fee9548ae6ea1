//! Selector Infrastructure
//!
//! Rules are simple functions that test if a Selection matches certain
//! criteria. A rule list is an ordered set of strategies: the first rule that
//! matches anywhere in the document wins.

use dom_query::{Document, Selection};

use crate::dom;

pub mod content;
pub mod utils;

/// A selector rule that tests if a selection matches certain criteria
pub type Rule = fn(&Selection) -> bool;

/// Query for first element matching the rule
///
/// Iterates through all descendants in document order and returns the first
/// element for which the rule returns true.
///
/// # Example
///
/// ```rust
/// use blog_pull::selector::{self, utils};
/// use blog_pull::dom;
///
/// let doc = dom::parse(r#"<div><p class="content">text</p></div>"#);
/// let root = doc.select("div");
///
/// fn has_content_class(sel: &dom_query::Selection) -> bool {
///     utils::has_class(sel, "content")
/// }
///
/// let result = selector::query(&root, has_content_class);
/// assert!(result.is_some());
/// ```
#[must_use]
pub fn query<'a>(root: &Selection<'a>, rule: Rule) -> Option<Selection<'a>> {
    root.select("*")
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .find(|sel| rule(sel))
}

/// Try each rule against the whole document, in order
///
/// A rule is exhausted over every element before the next rule is consulted,
/// so an earlier rule wins even when a later rule matches an element that
/// appears first in the document.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, rules: &[Rule]) -> Option<Selection<'a>> {
    let root = dom::root(doc);
    rules.iter().find_map(|rule| query(&root, *rule))
}
