//! Header canonicalization and alias-based column lookup.

use std::collections::HashMap;

use sift_model::HeaderSet;

/// Reduce a header (or alias) to its canonical key.
///
/// Trims, lower-cases, and removes every space and underscore, so
/// `"Order Date"`, `"orderdate"` and `" ORDER_DATE "` share one key.
pub fn canonical_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '_'], "")
}

/// Canonical key -> first original header that produced it.
#[derive(Debug, Clone, Default)]
pub struct NormalizationMap {
    map: HashMap<String, String>,
}

impl NormalizationMap {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for header in headers {
            let header = header.as_ref();
            let key = canonical_key(header);
            if key.is_empty() {
                continue;
            }
            map.entry(key).or_insert_with(|| header.to_string());
        }
        Self { map }
    }

    pub fn from_headers(headers: &HeaderSet) -> Self {
        Self::new(headers.iter())
    }

    /// Original header for an already-canonical key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// First original header matching any alias, in alias priority order.
    pub fn resolve<S: AsRef<str>>(&self, aliases: &[S]) -> Option<&str> {
        aliases
            .iter()
            .find_map(|alias| self.get(&canonical_key(alias.as_ref())))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Build the normalization map for a header row.
///
/// The header row itself is returned untouched for use as output column order.
pub fn normalize_headers(headers: &HeaderSet) -> (NormalizationMap, &HeaderSet) {
    (NormalizationMap::from_headers(headers), headers)
}
