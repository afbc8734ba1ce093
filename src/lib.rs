//! # style-stealer
//!
//! Extract visual-style signals from a rendered HTML document: image
//! sources, selected CSS property values (colors, font families) and Open
//! Graph meta data, summarized as frequency-ranked tables per field.
//!
//! The pipeline locates the document's stylesheets (linked and inline),
//! parses their text into declarations, filters by a configured set of
//! tracked properties, normalizes heterogeneous value shapes (`red`, `#f00`,
//! `rgb(255, 0, 0)` all land in the `#ff0000` bucket) and counts them. An
//! optional perceptual classifier collapses near-grey colors so palettes
//! aren't dominated by white/black boilerplate.
//!
//! ## Quick Start
//!
//! ```rust
//! use style_stealer::steal;
//!
//! let html = r#"<html><head>
//!     <style>p { color: red; } b { color: red; } i { color: blue; }</style>
//! </head><body><img src="hero.png"></body></html>"#;
//!
//! let result = steal(html)?;
//! assert_eq!(result.get("color")[0], ("#ff0000".to_string(), 2));
//! assert_eq!(result.get("images")[0], ("hero.png".to_string(), 1));
//! # Ok::<(), style_stealer::Error>(())
//! ```
//!
//! ## Degradation model
//!
//! Only configuration failures abort a run. An unreachable stylesheet or
//! unparsable CSS source is skipped and the remaining sources still
//! contribute, so results are best-effort partial rather than all-or-nothing.

mod config;
mod error;
mod frequency;
mod stealer;

/// Nearest-named-color classification for greyscale filtering.
pub mod colors;

/// CSS declaration extraction: value model, normalizer, tolerant parser.
pub mod css;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Fetching boundary: the `Fetcher` trait and the blocking HTTP fetcher.
pub mod fetch;

/// Image source extraction.
pub mod images;

/// Open Graph meta tag extraction.
pub mod meta_tags;

/// Stylesheet location, framework filtering and retrieval.
pub mod stylesheets;

/// URL validation, resolution and scheme handling.
pub mod url_utils;

// Public API - re-exports
pub use config::{Config, ConfigSource};
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use stealer::StyleStealer;

/// Extract style signals from an HTML string using the bundled default
/// configuration.
#[allow(clippy::missing_errors_doc)]
pub fn steal(html: &str) -> Result<StyleStealer> {
    StyleStealer::from_html(html, ConfigSource::Default)
}

/// Extract style signals from an HTML string with an explicit configuration
/// source.
///
/// # Example
///
/// ```rust
/// use style_stealer::{steal_with_config, ConfigSource};
/// use serde_json::json;
///
/// let html = "<html><head><style>h1 { font-family: Georgia, serif; }</style></head></html>";
/// let result = steal_with_config(
///     html,
///     ConfigSource::Map(json!({ "record": { "styles": ["font-family"] } })),
/// )?;
/// assert_eq!(result.get("font-family")[0], ("Georgia".to_string(), 1));
/// # Ok::<(), style_stealer::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn steal_with_config(html: &str, source: ConfigSource) -> Result<StyleStealer> {
    StyleStealer::from_html(html, source)
}
