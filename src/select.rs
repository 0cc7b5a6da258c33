//! Selector helpers for required and optional DOM lookups
//!
//! Structurally required elements go through [`require`], which fails with
//! a typed error naming the selector. Elements that may legitimately be
//! absent (a status abbreviation, an optional href) go through [`optional`].

use scraper::{ElementRef, Selector};
use thiserror::Error;

/// A structurally required element was absent from a parsed document
#[derive(Debug, Error)]
#[error("missing {what}: no match for `{selector}`")]
pub struct MissingElementError {
    what: String,
    selector: String,
}

impl MissingElementError {
    pub fn new(what: &str, selector: &str) -> Self {
        Self {
            what: what.to_string(),
            selector: selector.to_string(),
        }
    }
}

/// Finds the first match for `selector` under `scope`, failing when absent
///
/// # Arguments
///
/// * `scope` - The element to search under (use `doc.root_element()` for a
///   whole document)
/// * `selector` - A CSS selector literal
/// * `what` - Human description of the element, used in the error
pub fn require<'a>(
    scope: ElementRef<'a>,
    selector: &str,
    what: &str,
) -> Result<ElementRef<'a>, MissingElementError> {
    optional(scope, selector).ok_or_else(|| MissingElementError::new(what, selector))
}

/// Finds the first match for `selector` under `scope`, if any
///
/// An unparsable selector behaves as no match; selectors here are literals.
pub fn optional<'a>(scope: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    scope.select(&selector).next()
}

/// All matches for `selector` under `scope`
pub fn all<'a>(scope: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(selector) {
        Ok(selector) => scope.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

/// Concatenated, trimmed text of an element's subtree
pub fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
