//! Open Graph meta tag extraction.
//!
//! When `record.meta_tags` is enabled, the content of every `og:` meta tag
//! is counted under a field named by the tag's property (`og:image`,
//! `og:site_name`, ...), so the same ranked-getter interface covers them.

use crate::dom::{self, Document};
use crate::frequency::FrequencyTable;

/// Count `og:` meta tag content values, one field per property name.
pub fn extract_meta_tags(doc: &Document, table: &mut FrequencyTable) {
    for meta in dom::elements_by_tag(doc, "meta") {
        let name = dom::get_attribute(&meta, "property")
            .or_else(|| dom::get_attribute(&meta, "name"))
            .unwrap_or_default()
            .to_lowercase();

        let content = dom::get_attribute(&meta, "content").unwrap_or_default();

        if !name.starts_with("og:") || content.is_empty() {
            continue;
        }

        table.record(&name, content);
    }
}
