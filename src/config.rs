//! Configuration resolution.
//!
//! A run's configuration can come from three places, tried in fixed
//! precedence: an explicit [`Config`] value, a raw JSON map with the
//! `record.styles` shape, or the bundled default resource. Resolution is a
//! pure function from a [`ConfigSource`] to an immutable [`Config`]; a source
//! that yields no usable tracked styles is a fatal [`Error::Config`].

use serde::Deserialize;

use crate::error::{Error, Result};

/// Bundled default configuration, used when no explicit source is given.
const DEFAULT_CONFIG_JSON: &str = include_str!("../resources/config/style-stealer.json");

/// Where the configuration comes from.
///
/// Variants are tried exactly as given; there is no fallback chain between
/// them. `Map` and `Default` share the same raw JSON shape.
#[derive(Debug, Clone)]
pub enum ConfigSource {
    /// An already-resolved configuration, used as-is.
    Explicit(Config),
    /// A raw JSON map with `record.styles`, `record.images`, etc.
    Map(serde_json::Value),
    /// The bundled default resource file.
    Default,
}

impl From<Config> for ConfigSource {
    fn from(config: Config) -> Self {
        Self::Explicit(config)
    }
}

impl From<serde_json::Value> for ConfigSource {
    fn from(value: serde_json::Value) -> Self {
        Self::Map(value)
    }
}

/// Raw on-disk / caller-provided configuration shape.
#[derive(Debug, Deserialize)]
struct RawConfig {
    record: RawRecord,
    #[serde(default)]
    skip_greyscale: bool,
    #[serde(default)]
    frameworks: bool,
    #[serde(default)]
    known_frameworks: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    styles: Vec<String>,
    #[serde(default)]
    images: bool,
    #[serde(default)]
    meta_tags: bool,
}

/// Immutable configuration for one extraction run.
#[derive(Debug, Clone)]
pub struct Config {
    /// CSS property names whose declared values are counted.
    pub tracked_styles: Vec<String>,
    /// Record `<img src>` frequencies under the `"images"` field.
    pub record_images: bool,
    /// Record `og:` meta tag content frequencies.
    pub record_meta_tags: bool,
    /// Collapse near-grey colors into the `"unknown"` bucket.
    pub skip_greyscale: bool,
    /// Skip stylesheets whose URL names a known CSS framework.
    pub skip_frameworks: bool,
    /// Lower-cased framework name substrings matched against stylesheet URLs.
    pub known_frameworks: Vec<String>,
}

impl Config {
    /// Resolve a [`ConfigSource`] into a usable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the source lacks the `record.styles`
    /// shape or tracks no styles at all. This aborts the run before any
    /// extraction happens.
    pub fn resolve(source: ConfigSource) -> Result<Self> {
        let config = match source {
            ConfigSource::Explicit(config) => config,
            ConfigSource::Map(value) => Self::from_raw_value(value)?,
            ConfigSource::Default => {
                let value = serde_json::from_str(DEFAULT_CONFIG_JSON).map_err(|e| {
                    Error::Config(format!("bundled default config is invalid: {e}"))
                })?;
                Self::from_raw_value(value)?
            }
        };

        if config.tracked_styles.is_empty() {
            return Err(Error::Config(
                "no tracked styles configured; record.styles must be non-empty".to_string(),
            ));
        }

        Ok(config)
    }

    fn from_raw_value(value: serde_json::Value) -> Result<Self> {
        let raw: RawConfig = serde_json::from_value(value)
            .map_err(|e| Error::Config(format!("config missing proper record fields: {e}")))?;

        Ok(Self {
            tracked_styles: raw.record.styles,
            record_images: raw.record.images,
            record_meta_tags: raw.record.meta_tags,
            skip_greyscale: raw.skip_greyscale,
            skip_frameworks: raw.frameworks,
            known_frameworks: raw
                .known_frameworks
                .into_iter()
                .map(|name| name.to_lowercase())
                .collect(),
        })
    }

    /// Whether `property` is one of the tracked CSS properties.
    #[must_use]
    pub fn tracks(&self, property: &str) -> bool {
        self.tracked_styles.iter().any(|s| s == property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn default_source_resolves_bundled_resource() {
        let config = Config::resolve(ConfigSource::Default).unwrap();

        assert_eq!(
            config.tracked_styles,
            vec!["font-family", "color", "background-color"]
        );
        assert!(config.record_images);
        assert!(config.record_meta_tags);
        assert!(!config.skip_greyscale);
        assert!(!config.skip_frameworks);
        assert!(config.known_frameworks.contains(&"bootstrap".to_string()));
    }

    #[test]
    fn map_source_resolves() {
        let config = Config::resolve(ConfigSource::Map(json!({
            "record": { "styles": ["color"], "images": true },
            "skip_greyscale": true
        })))
        .unwrap();

        assert_eq!(config.tracked_styles, vec!["color"]);
        assert!(config.record_images);
        assert!(!config.record_meta_tags);
        assert!(config.skip_greyscale);
    }

    #[test]
    fn missing_record_styles_is_a_config_error() {
        let result = Config::resolve(ConfigSource::Map(json!({
            "record": { "images": true }
        })));

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn empty_styles_is_a_config_error() {
        let result = Config::resolve(ConfigSource::Map(json!({
            "record": { "styles": [] }
        })));

        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn framework_names_are_lowercased() {
        let config = Config::resolve(ConfigSource::Map(json!({
            "record": { "styles": ["color"] },
            "frameworks": true,
            "known_frameworks": ["Bootstrap", "UIKit"]
        })))
        .unwrap();

        assert_eq!(config.known_frameworks, vec!["bootstrap", "uikit"]);
    }

    #[test]
    fn tracks_matches_exact_property_names() {
        let config = Config::resolve(ConfigSource::Map(json!({
            "record": { "styles": ["color", "font-family"] }
        })))
        .unwrap();

        assert!(config.tracks("color"));
        assert!(config.tracks("font-family"));
        assert!(!config.tracks("background-color"));
    }
}
