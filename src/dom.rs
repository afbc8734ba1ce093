//! DOM operations adapter over the `dom_query` crate.
//!
//! Thin helpers so the extractors read as "given tag name, return matching
//! elements; given element, read attribute by name" without repeating
//! `dom_query` plumbing.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// All elements with the given tag name, in document order.
#[must_use]
pub fn elements_by_tag<'a>(doc: &'a Document, tag: &str) -> Vec<Selection<'a>> {
    doc.select(tag)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Values of `attr` across every `tag` element that carries it, in document
/// order with repeats preserved.
#[must_use]
pub fn attribute_values(doc: &Document, tag: &str, attr: &str) -> Vec<String> {
    elements_by_tag(doc, tag)
        .iter()
        .filter_map(|el| get_attribute(el, attr))
        .collect()
}
