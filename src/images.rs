//! Image source extraction.

use crate::dom::{self, Document};
use crate::frequency::FrequencyTable;

/// Frequency-table field for image sources.
pub const IMAGES_FIELD: &str = "images";

/// Count every `<img src>` value under the `"images"` field.
///
/// Elements without a `src` attribute are skipped.
pub fn extract_images(doc: &Document, table: &mut FrequencyTable) {
    for src in dom::attribute_values(doc, "img", "src") {
        table.record(IMAGES_FIELD, src);
    }
}
