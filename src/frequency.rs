//! Per-field frequency counting with deterministic ranking.
//!
//! One table is created per extraction run and owned by the orchestrator;
//! every extractor records into it through a mutable borrow. Counts only ever
//! increase while a run is in progress.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Entry {
    count: u64,
    /// Position at which the value was first recorded, used as the ranking
    /// tie-breaker so equal counts order deterministically.
    first_seen: usize,
}

/// Field name -> value -> occurrence count.
///
/// Fields are `"images"`, `"stylesheets"`, tracked CSS property names and
/// `og:` meta property names.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    fields: HashMap<String, HashMap<String, Entry>>,
    next_seen: usize,
}

impl FrequencyTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `value` under `field`, initializing to 1 if
    /// the value has not been seen before.
    pub fn record(&mut self, field: &str, value: impl Into<String>) {
        let seen = self.next_seen;
        let entry = self
            .fields
            .entry(field.to_string())
            .or_default()
            .entry(value.into())
            .or_insert(Entry {
                count: 0,
                first_seen: seen,
            });
        entry.count += 1;
        self.next_seen += 1;
    }

    /// Whether any value was ever recorded under `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Entries for `field` ordered by descending count, ties broken by
    /// first-seen order. Unknown fields yield an empty vec.
    #[must_use]
    pub fn ranked(&self, field: &str) -> Vec<(String, u64)> {
        let mut entries: Vec<(&String, &Entry)> = match self.fields.get(field) {
            Some(values) => values.iter().collect(),
            None => return Vec::new(),
        };

        entries.sort_by(|(_, a), (_, b)| {
            b.count.cmp(&a.count).then(a.first_seen.cmp(&b.first_seen))
        });

        entries
            .into_iter()
            .map(|(value, entry)| (value.clone(), entry.count))
            .collect()
    }

    /// Entries for `field` in first-seen order.
    #[must_use]
    pub fn unsorted(&self, field: &str) -> Vec<(String, u64)> {
        let mut entries: Vec<(&String, &Entry)> = match self.fields.get(field) {
            Some(values) => values.iter().collect(),
            None => return Vec::new(),
        };

        entries.sort_by_key(|(_, entry)| entry.first_seen);

        entries
            .into_iter()
            .map(|(value, entry)| (value.clone(), entry.count))
            .collect()
    }
}
