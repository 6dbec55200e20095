//! Normalization of raw property mappings into ordered snapshots.

use std::collections::BTreeMap;

/// A normalized, deterministically ordered set of key/value pairs.
///
/// Keys are unique and sorted ascending by code point, so the ordering is
/// a pure function of the key set and never depends on how the raw
/// mapping happened to iterate. Constructed once per generation run and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySnapshot {
    entries: Vec<(String, String)>,
}

impl PropertySnapshot {
    /// Builds a snapshot from any iterable of string-convertible pairs.
    ///
    /// Duplicate keys resolve last-write-wins in the input's iteration
    /// order. An empty input yields an empty snapshot. This operation
    /// cannot fail.
    pub fn normalize<I, K, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let sorted: BTreeMap<String, String> = raw
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: sorted.into_iter().collect(),
        }
    }

    /// Pairs in ascending key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
