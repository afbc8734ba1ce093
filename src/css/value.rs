//! CSS declaration value model and normalization.
//!
//! Parsed values are reduced to one canonical string per declaration so that
//! heterogeneous representations (`red`, `#f00`, `rgb(255, 0, 0)`) land in
//! the same frequency bucket.

use crate::colors::GreyscaleFilter;

/// Canonical stand-in for unrepresentable or intentionally suppressed values.
pub const UNKNOWN_VALUE: &str = "unknown";

/// A parsed CSS declaration value.
///
/// Multi-component values (comma- or space-separated) are a [`CssValue::List`];
/// normalization keeps only the first component, a deliberate simplification
/// for shorthand properties like `font-family: Arial, sans-serif`.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// A plain textual component: keyword, number, dimension, url.
    Literal(String),
    /// A quoted string, stored without its quotes.
    Quoted(String),
    /// Two or more components.
    List(Vec<CssValue>),
    /// A color literal, alpha already discarded.
    Color { r: u8, g: u8, b: u8 },
    /// A component shape the value model does not represent.
    Unsupported,
}

/// Reduce a value node to its canonical string form.
///
/// Total: every node shape yields a string, falling back to the
/// [`UNKNOWN_VALUE`] sentinel. Colors render as lowercase `#rrggbb` unless
/// the greyscale filter decides they should be suppressed, in which case they
/// land in the sentinel bucket too (they still count, under `"unknown"`).
#[must_use]
pub fn normalize(value: &CssValue, grey: &GreyscaleFilter) -> String {
    match value {
        CssValue::Literal(text) => text.clone(),
        CssValue::Quoted(text) => text.clone(),
        CssValue::List(components) => match components.first() {
            Some(first) => normalize(first, grey),
            None => UNKNOWN_VALUE.to_string(),
        },
        CssValue::Color { r, g, b } => {
            let hex = format!("#{r:02x}{g:02x}{b:02x}");
            if grey.should_skip(&hex) {
                UNKNOWN_VALUE.to_string()
            } else {
                hex
            }
        }
        CssValue::Unsupported => UNKNOWN_VALUE.to_string(),
    }
}
