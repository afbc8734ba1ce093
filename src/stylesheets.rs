//! Stylesheet resolution: locate, filter, fetch and extract.
//!
//! Linked sheets surviving the framework-skip heuristic are fetched one at a
//! time; a failed fetch skips that sheet and the run continues. Inline
//! `<style>` blocks always contribute (they have no URL to match against).

use url::Url;

use crate::colors::GreyscaleFilter;
use crate::config::Config;
use crate::css;
use crate::dom::{self, Document};
use crate::fetch::Fetcher;
use crate::frequency::FrequencyTable;
use crate::url_utils;

/// Frequency-table field for raw stylesheet hrefs.
pub const STYLESHEETS_FIELD: &str = "stylesheets";

/// Resolve the document's stylesheets and feed their text to the CSS
/// extractor, accumulating into `table`.
pub fn resolve_and_extract(
    doc: &Document,
    config: &Config,
    base: Option<&Url>,
    fetcher: &dyn Fetcher,
    table: &mut FrequencyTable,
    grey: &GreyscaleFilter,
) {
    let mut hrefs = Vec::new();

    for link in dom::elements_by_tag(doc, "link") {
        let rel = dom::get_attribute(&link, "rel").unwrap_or_default();
        if !rel.trim().eq_ignore_ascii_case("stylesheet") {
            continue;
        }
        let Some(href) = dom::get_attribute(&link, "href") else {
            continue;
        };

        table.record(STYLESHEETS_FIELD, href.clone());
        hrefs.push(href);
    }

    for href in hrefs {
        if should_skip_framework(&href, config) {
            log::debug!("skipping framework stylesheet: {href}");
            continue;
        }

        let target = url_utils::resolve_href(&href, base);
        match fetcher.fetch(&target) {
            Ok(text) => css::extract(&text, &config.tracked_styles, table, grey),
            Err(err) => {
                // One unreachable sheet never aborts the run.
                log::warn!("skipping unreachable stylesheet {target}: {err}");
            }
        }
    }

    for style in dom::elements_by_tag(doc, "style") {
        css::extract(&style.text(), &config.tracked_styles, table, grey);
    }
}

/// True when framework-skipping is on and any known framework name occurs in
/// the href, case-insensitively.
fn should_skip_framework(href: &str, config: &Config) -> bool {
    if !config.skip_frameworks {
        return false;
    }

    let lowered = href.to_lowercase();
    config
        .known_frameworks
        .iter()
        .any(|framework| lowered.contains(framework.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigSource;
    use crate::fetch::FetchError;
    use serde_json::json;
    use std::collections::HashMap;

    struct StubFetcher {
        sheets: HashMap<String, String>,
    }

    impl Fetcher for StubFetcher {
        fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.sheets.get(url).cloned().ok_or_else(|| {
                FetchError::Status(404, url.to_string())
            })
        }
    }

    fn config(frameworks: bool) -> Config {
        Config::resolve(ConfigSource::Map(json!({
            "record": { "styles": ["color", "font-family"] },
            "frameworks": frameworks,
            "known_frameworks": ["bootstrap"]
        })))
        .unwrap()
    }

    #[test]
    fn fetches_linked_sheets_and_counts_declarations() {
        let doc = Document::from(
            r#"<html><head>
                <link rel="stylesheet" href="http://site.test/app.css">
            </head></html>"#,
        );
        let fetcher = StubFetcher {
            sheets: HashMap::from([(
                "http://site.test/app.css".to_string(),
                "body { color: red; }".to_string(),
            )]),
        };
        let mut table = FrequencyTable::new();

        resolve_and_extract(
            &doc,
            &config(false),
            None,
            &fetcher,
            &mut table,
            &GreyscaleFilter::new(false),
        );

        assert_eq!(table.ranked("color"), vec![("#ff0000".to_string(), 1)]);
        assert_eq!(
            table.ranked(STYLESHEETS_FIELD),
            vec![("http://site.test/app.css".to_string(), 1)]
        );
    }

    #[test]
    fn framework_sheets_are_skipped_when_enabled() {
        let doc = Document::from(
            r#"<html><head>
                <link rel="stylesheet" href="http://cdn.test/Bootstrap.min.css">
                <link rel="stylesheet" href="http://site.test/app.css">
            </head></html>"#,
        );
        let fetcher = StubFetcher {
            sheets: HashMap::from([
                (
                    "http://cdn.test/Bootstrap.min.css".to_string(),
                    "a { color: blue; }".to_string(),
                ),
                (
                    "http://site.test/app.css".to_string(),
                    "a { color: red; }".to_string(),
                ),
            ]),
        };
        let mut table = FrequencyTable::new();

        resolve_and_extract(
            &doc,
            &config(true),
            None,
            &fetcher,
            &mut table,
            &GreyscaleFilter::new(false),
        );

        assert_eq!(table.ranked("color"), vec![("#ff0000".to_string(), 1)]);
    }

    #[test]
    fn framework_sheets_are_included_when_disabled() {
        let doc = Document::from(
            r#"<html><head>
                <link rel="stylesheet" href="http://cdn.test/bootstrap.min.css">
            </head></html>"#,
        );
        let fetcher = StubFetcher {
            sheets: HashMap::from([(
                "http://cdn.test/bootstrap.min.css".to_string(),
                "a { color: blue; }".to_string(),
            )]),
        };
        let mut table = FrequencyTable::new();

        resolve_and_extract(
            &doc,
            &config(false),
            None,
            &fetcher,
            &mut table,
            &GreyscaleFilter::new(false),
        );

        assert_eq!(table.ranked("color"), vec![("#0000ff".to_string(), 1)]);
    }

    #[test]
    fn failed_fetches_are_skipped_silently() {
        let doc = Document::from(
            r#"<html><head>
                <link rel="stylesheet" href="http://site.test/missing.css">
                <link rel="stylesheet" href="http://site.test/app.css">
            </head></html>"#,
        );
        let fetcher = StubFetcher {
            sheets: HashMap::from([(
                "http://site.test/app.css".to_string(),
                "p { font-family: Arial; }".to_string(),
            )]),
        };
        let mut table = FrequencyTable::new();

        resolve_and_extract(
            &doc,
            &config(false),
            None,
            &fetcher,
            &mut table,
            &GreyscaleFilter::new(false),
        );

        assert_eq!(table.ranked("font-family"), vec![("Arial".to_string(), 1)]);
    }

    #[test]
    fn inline_style_blocks_always_contribute() {
        let doc = Document::from(
            r#"<html><head>
                <style>p { color: red; } b { color: red; }</style>
            </head></html>"#,
        );
        let fetcher = StubFetcher {
            sheets: HashMap::new(),
        };
        let mut table = FrequencyTable::new();

        // Framework skipping on: inline styles are never URL-matched.
        resolve_and_extract(
            &doc,
            &config(true),
            None,
            &fetcher,
            &mut table,
            &GreyscaleFilter::new(false),
        );

        assert_eq!(table.ranked("color"), vec![("#ff0000".to_string(), 2)]);
    }

    #[test]
    fn non_stylesheet_links_are_ignored() {
        let doc = Document::from(
            r#"<html><head>
                <link rel="icon" href="favicon.ico">
                <link rel="preload" href="font.woff2">
            </head></html>"#,
        );
        let fetcher = StubFetcher {
            sheets: HashMap::new(),
        };
        let mut table = FrequencyTable::new();

        resolve_and_extract(
            &doc,
            &config(false),
            None,
            &fetcher,
            &mut table,
            &GreyscaleFilter::new(false),
        );

        assert!(table.ranked(STYLESHEETS_FIELD).is_empty());
    }
}
