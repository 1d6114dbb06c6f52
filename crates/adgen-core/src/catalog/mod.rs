//! # Parameter Catalog
//!
//! Documented vocabulary of ad request override keys. The catalog only
//! supplies hints (description, example, placeholder); any string is a legal
//! override key whether or not it appears here.

pub mod registry;
pub mod types;

pub use registry::{entries, group_names, grouped_view, is_known, lookup};
pub use types::ParameterEntry;

use crate::model::OverrideEntry;

/// Catalog hint for an override row, if its key is documented.
pub fn hint_for(entry: &OverrideEntry) -> Option<&'static ParameterEntry> {
    lookup(&entry.key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_known_and_unknown() {
        assert!(hint_for(&OverrideEntry::new("gdpr", "1")).is_some());
        assert!(hint_for(&OverrideEntry::new("x_custom", "1")).is_none());
        assert!(hint_for(&OverrideEntry::default()).is_none());
    }
}
