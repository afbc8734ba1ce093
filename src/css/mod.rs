//! CSS declaration extraction into frequency tables.
//!
//! The extractor is tolerant by contract: malformed CSS contributes nothing
//! and never raises past this boundary. It can be invoked repeatedly against
//! the same table, once per stylesheet or inline `<style>` block, with counts
//! accumulating across calls.

mod parser;
mod value;

pub use parser::parse_declarations;
pub use value::{normalize, CssValue, UNKNOWN_VALUE};

use crate::colors::GreyscaleFilter;
use crate::frequency::FrequencyTable;

/// Extract tracked declarations from `raw_css` into `table`.
///
/// Each declaration whose property name is in `tracked` has its value
/// normalized and counted under that property's field. Untracked properties
/// are ignored.
pub fn extract(
    raw_css: &str,
    tracked: &[String],
    table: &mut FrequencyTable,
    grey: &GreyscaleFilter,
) {
    for (property, value) in parse_declarations(raw_css) {
        if !tracked.iter().any(|t| *t == property) {
            continue;
        }
        table.record(&property, normalize(&value, grey));
    }
}
