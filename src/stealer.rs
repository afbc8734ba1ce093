//! Run orchestration: configuration, extraction order, ranked queries.

use std::fs;
use std::path::Path;

use url::Url;

use crate::colors::GreyscaleFilter;
use crate::config::{Config, ConfigSource};
use crate::dom::Document;
use crate::error::Result;
use crate::fetch::{FetchError, Fetcher, HttpFetcher};
use crate::frequency::FrequencyTable;
use crate::url_utils;
use crate::{images, meta_tags, stylesheets};

/// One completed extraction run over a single document.
///
/// Construction resolves the configuration (the only fatal step), then
/// drives image, meta tag and stylesheet extraction into one frequency
/// table. Results are queried per field with [`StyleStealer::get`]. Each
/// instance is independent; nothing is shared or cached across runs.
#[derive(Debug)]
pub struct StyleStealer {
    config: Config,
    table: FrequencyTable,
}

impl StyleStealer {
    /// Extract from an HTML string.
    pub fn from_html(html: &str, source: ConfigSource) -> Result<Self> {
        let doc = Document::from(html);
        Self::from_document(&doc, source)
    }

    /// Extract from an already-parsed document.
    pub fn from_document(doc: &Document, source: ConfigSource) -> Result<Self> {
        let fetcher = HttpFetcher::new()?;
        Self::run(doc, source, None, &fetcher)
    }

    /// Fetch `url`, parse it leniently, and extract.
    ///
    /// A reference without a scheme is made fetchable first (`//host/x` and
    /// bare `host/x` get `http`). Relative stylesheet hrefs found in the
    /// page resolve against this URL.
    pub fn from_url(url: &str, source: ConfigSource) -> Result<Self> {
        let fetcher = HttpFetcher::new()?;
        Self::from_url_with_fetcher(url, source, &fetcher)
    }

    /// [`StyleStealer::from_url`] with an injected fetcher.
    pub fn from_url_with_fetcher(
        url: &str,
        source: ConfigSource,
        fetcher: &dyn Fetcher,
    ) -> Result<Self> {
        let target = url_utils::ensure_scheme(url, "http");
        let html = fetcher.fetch(&target)?;
        let base = Url::parse(&target).ok();
        let doc = Document::from(html.as_str());
        Self::run(&doc, source, base.as_ref(), fetcher)
    }

    /// Read a local HTML file and extract.
    pub fn from_file(path: impl AsRef<Path>, source: ConfigSource) -> Result<Self> {
        let html = fs::read_to_string(path).map_err(FetchError::from)?;
        Self::from_html(&html, source)
    }

    /// [`StyleStealer::from_document`] with an injected fetcher.
    pub fn from_document_with_fetcher(
        doc: &Document,
        source: ConfigSource,
        fetcher: &dyn Fetcher,
    ) -> Result<Self> {
        Self::run(doc, source, None, fetcher)
    }

    fn run(
        doc: &Document,
        source: ConfigSource,
        base: Option<&Url>,
        fetcher: &dyn Fetcher,
    ) -> Result<Self> {
        // Config failure aborts before any extraction starts.
        let config = Config::resolve(source)?;
        let grey = GreyscaleFilter::new(config.skip_greyscale);
        let mut table = FrequencyTable::new();

        if config.record_images {
            images::extract_images(doc, &mut table);
        }
        if config.record_meta_tags {
            meta_tags::extract_meta_tags(doc, &mut table);
        }
        stylesheets::resolve_and_extract(doc, &config, base, fetcher, &mut table, &grey);

        Ok(Self { config, table })
    }

    /// Ranked values for a field, ordered by descending count (ties keep
    /// first-seen order). Unknown fields yield an empty vec.
    ///
    /// Fields are `"images"`, `"stylesheets"`, each tracked CSS property
    /// name, and `og:` meta properties when meta recording is on.
    #[must_use]
    pub fn get(&self, field: &str) -> Vec<(String, u64)> {
        self.get_with(field, true)
    }

    /// Values for a field, ranked or in first-seen order.
    #[must_use]
    pub fn get_with(&self, field: &str, sorted: bool) -> Vec<(String, u64)> {
        if sorted {
            self.table.ranked(field)
        } else {
            self.table.unsorted(field)
        }
    }

    /// The configuration this run was resolved with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
