//! Nearest-named-color classification for greyscale filtering.
//!
//! Colors are classified by Euclidean distance in RGB space against a fixed
//! 16-entry reference table. A color whose nearest reference name is `white`,
//! `black` or `gray` counts as greyscale and can be suppressed from the
//! frequency tables (see `css::value::normalize`).

/// Reference table used for nearest-neighbor classification.
///
/// Declaration order is fixed: on a distance tie, the earlier entry wins,
/// which keeps classification deterministic.
///
/// NOTE: `gray` is listed as (128, 0, 128), identical to `purple`. This skews
/// nearest-neighbor results for mid-greys (they resolve to `silver` instead).
/// Kept as-is since downstream consumers may depend on the existing skew;
/// flagged as an open question rather than silently corrected.
const REFERENCE_COLORS: [(&str, [u8; 3]); 16] = [
    ("black", [0, 0, 0]),
    ("green", [0, 128, 0]),
    ("silver", [192, 192, 192]),
    ("lime", [0, 255, 0]),
    ("gray", [128, 0, 128]),
    ("olive", [128, 128, 0]),
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("red", [255, 0, 0]),
    ("blue", [0, 0, 255]),
    ("purple", [128, 0, 128]),
    ("teal", [0, 128, 128]),
    ("fuchsia", [255, 0, 255]),
    ("aqua", [0, 255, 255]),
];

/// Names that count as greyscale when they win the nearest-neighbor vote.
const GREYSCALE_NAMES: [&str; 3] = ["white", "black", "gray"];

/// Parse a 3- or 6-digit hex color (optional leading `#`) into an RGB triple.
///
/// 3-digit shorthand expands by digit duplication (`#abc` -> `#aabbcc`).
/// Any other length is malformed and yields `None`.
#[must_use]
pub fn hex_to_rgb(color: &str) -> Option<[u8; 3]> {
    let digits = color.strip_prefix('#').unwrap_or(color);

    let expanded: String = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return None,
    };

    let channel = |range: std::ops::Range<usize>| {
        expanded
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };

    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Squared Euclidean distance between two RGB triples.
///
/// The square root is monotonic, so comparing squared distances picks the
/// same minimum.
fn distance_sq(a: [u8; 3], b: [u8; 3]) -> i64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = i64::from(x) - i64::from(y);
            d * d
        })
        .sum()
}

/// Name of the reference color nearest to `rgb`.
///
/// Ties resolve to the first entry in reference-table order.
#[must_use]
pub fn nearest_named(rgb: [u8; 3]) -> &'static str {
    let mut best_name = REFERENCE_COLORS[0].0;
    let mut best_dist = i64::MAX;

    for (name, reference) in REFERENCE_COLORS {
        let dist = distance_sq(reference, rgb);
        if dist < best_dist {
            best_dist = dist;
            best_name = name;
        }
    }

    best_name
}

/// Decides whether near-grey colors should be suppressed.
///
/// Constructed once per run from the `skip_greyscale` config flag. When
/// disabled, [`GreyscaleFilter::should_skip`] is constant `false` and no
/// distances are computed.
#[derive(Debug, Clone, Copy)]
pub struct GreyscaleFilter {
    enabled: bool,
}

impl GreyscaleFilter {
    /// Create a filter; `enabled` comes from `Config::skip_greyscale`.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// True iff `hex` classifies as greyscale and filtering is enabled.
    ///
    /// Malformed hex input cannot be classified and is never skipped.
    #[must_use]
    pub fn should_skip(&self, hex: &str) -> bool {
        if !self.enabled {
            return false;
        }

        match hex_to_rgb(hex) {
            Some(rgb) => GREYSCALE_NAMES.contains(&nearest_named(rgb)),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_to_rgb_parses_six_digits() {
        assert_eq!(hex_to_rgb("#ff8000"), Some([255, 128, 0]));
        assert_eq!(hex_to_rgb("ff8000"), Some([255, 128, 0]));
    }

    #[test]
    fn hex_to_rgb_expands_shorthand() {
        assert_eq!(hex_to_rgb("#abc"), Some([0xaa, 0xbb, 0xcc]));
        assert_eq!(hex_to_rgb("#abc"), hex_to_rgb("#aabbcc"));
    }

    #[test]
    fn hex_to_rgb_rejects_malformed_lengths() {
        assert_eq!(hex_to_rgb("#abcd"), None);
        assert_eq!(hex_to_rgb(""), None);
        assert_eq!(hex_to_rgb("#ff80001"), None);
    }

    #[test]
    fn hex_to_rgb_is_case_insensitive() {
        assert_eq!(hex_to_rgb("#FFFFFF"), hex_to_rgb("#ffffff"));
        assert_eq!(hex_to_rgb("#AbCdEf"), Some([0xab, 0xcd, 0xef]));
    }

    #[test]
    fn nearest_named_exact_matches() {
        assert_eq!(nearest_named([255, 255, 255]), "white");
        assert_eq!(nearest_named([0, 0, 0]), "black");
        assert_eq!(nearest_named([255, 0, 0]), "red");
    }

    #[test]
    fn nearest_named_ties_resolve_to_table_order() {
        // (128, 0, 128) is listed for both "gray" and "purple"; "gray" is
        // declared first so it must win on every call.
        assert_eq!(nearest_named([128, 0, 128]), "gray");
        assert_eq!(nearest_named([128, 0, 128]), "gray");
    }

    #[test]
    fn mid_grey_resolves_to_silver_due_to_table_skew() {
        // A true mid-grey lands on "silver" because "gray" carries purple's
        // channels in the reference table.
        assert_eq!(nearest_named([128, 128, 128]), "silver");
    }

    #[test]
    fn disabled_filter_never_skips() {
        let filter = GreyscaleFilter::new(false);
        assert!(!filter.should_skip("#ffffff"));
        assert!(!filter.should_skip("#000000"));
    }

    #[test]
    fn enabled_filter_skips_white_and_black() {
        let filter = GreyscaleFilter::new(true);
        assert!(filter.should_skip("#ffffff"));
        assert!(filter.should_skip("#000"));
        assert!(!filter.should_skip("#ff0000"));
    }

    #[test]
    fn filter_is_case_invariant() {
        let filter = GreyscaleFilter::new(true);
        assert_eq!(filter.should_skip("#FFFFFF"), filter.should_skip("#ffffff"));
    }

    #[test]
    fn malformed_hex_is_never_skipped() {
        let filter = GreyscaleFilter::new(true);
        assert!(!filter.should_skip("#abcd"));
        assert!(!filter.should_skip("not-a-color"));
    }
}
