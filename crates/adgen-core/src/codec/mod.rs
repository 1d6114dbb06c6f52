//! # Configuration Codec
//!
//! Converts between the ordered, duplicate-tolerant editing rows and the
//! canonical key→value map used for persistence.
//!
//! The round trip keeps the set of `(key, value)` pairs but not the edit
//! order: [`to_ordered`] yields rows in ascending key order, whatever order
//! produced the map. Duplicate keys collapse with the last row winning.

use std::collections::BTreeMap;

use crate::model::{OverrideEntry, Overrides};

/// Canonical override map. Keys are unique; iteration is ascending by key.
pub type CanonicalOverrides = BTreeMap<String, String>;

/// Collapse edit rows into the canonical map.
///
/// Rows with an empty key are dropped. For repeated keys the last row wins.
/// Empty values are kept.
pub fn to_canonical(entries: &[OverrideEntry]) -> CanonicalOverrides {
    let mut canonical = CanonicalOverrides::new();
    for entry in entries.iter().filter(|e| e.is_effective()) {
        canonical.insert(entry.key.clone(), entry.value.clone());
    }

    tracing::debug!(
        event = "core.codec.to_canonical_completed",
        rows = entries.len(),
        keys = canonical.len()
    );
    canonical
}

/// Expand the canonical map into edit rows, one per key, ascending by key.
pub fn to_ordered(canonical: &CanonicalOverrides) -> Overrides {
    canonical
        .iter()
        .map(|(key, value)| OverrideEntry::new(key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(pairs: &[(&str, &str)]) -> Vec<OverrideEntry> {
        pairs
            .iter()
            .map(|(k, v)| OverrideEntry::new(*k, *v))
            .collect()
    }

    #[test]
    fn test_last_occurrence_wins() {
        let canonical = to_canonical(&rows(&[("a", "1"), ("a", "2")]));
        assert_eq!(canonical.len(), 1);
        assert_eq!(canonical.get("a").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_empty_key_dropped() {
        let canonical = to_canonical(&rows(&[("", "x"), ("k", "v")]));
        assert_eq!(
            canonical,
            CanonicalOverrides::from([("k".to_string(), "v".to_string())])
        );
    }

    #[test]
    fn test_empty_value_kept() {
        let canonical = to_canonical(&rows(&[("gdpr", "")]));
        assert_eq!(canonical.get("gdpr").map(String::as_str), Some(""));
    }

    #[test]
    fn test_round_trip_preserves_pairs_not_order() {
        let edit = rows(&[("zeta", "1"), ("alpha", "2"), ("zeta", "3"), ("", "skip")]);
        let canonical = to_canonical(&edit);
        let ordered = to_ordered(&canonical);

        // Re-deriving the map from the rows gives the same pairs back.
        assert_eq!(to_canonical(ordered.as_slice()), canonical);

        // Edit order is not reproduced; rows come back ascending by key.
        let keys: Vec<&str> = ordered.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_to_ordered_is_deterministic() {
        let canonical = to_canonical(&rows(&[("b", "2"), ("c", "3"), ("a", "1")]));
        assert_eq!(to_ordered(&canonical), to_ordered(&canonical));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(to_canonical(&[]).is_empty());
        assert!(to_ordered(&CanonicalOverrides::new()).is_empty());
    }
}
