use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec::{CanonicalOverrides, to_canonical, to_ordered};
use crate::model::{ConfigurationModel, RawConfiguration, ValidationErrors, validate};

/// The persisted shape of one named configuration.
///
/// Overrides are stored canonically: unique keys, no order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedConfiguration {
    pub name: String,
    pub placement_count: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub overrides: CanonicalOverrides,
}

impl PersistedConfiguration {
    /// Owned snapshot of the model as it is right now.
    ///
    /// A save carries this snapshot, so edits made after the save was
    /// requested never leak into it.
    pub fn snapshot(name: impl Into<String>, model: &ConfigurationModel) -> Self {
        Self {
            name: name.into(),
            placement_count: model.placement_count(),
            width: model.width(),
            height: model.height(),
            overrides: to_canonical(model.overrides().as_slice()),
        }
    }

    /// Rebuild an editable model. Dimensions are re-validated since the
    /// stored data may have been edited by hand.
    pub fn to_model(&self) -> Result<ConfigurationModel, ValidationErrors> {
        let raw = RawConfiguration {
            overrides: to_ordered(&self.overrides).as_slice().to_vec(),
            ..RawConfiguration::new(self.placement_count, self.width, self.height)
        };
        validate(&raw)
    }
}

impl ConfigurationModel {
    /// Rebuild a model from a persisted configuration.
    ///
    /// See [`PersistedConfiguration::to_model`] for details.
    pub fn from_persisted(persisted: &PersistedConfiguration) -> Result<Self, ValidationErrors> {
        persisted.to_model()
    }
}

/// A persisted configuration plus the identity the store assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPreset {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub configuration: PersistedConfiguration,
}

impl StoredPreset {
    pub fn name(&self) -> &str {
        &self.configuration.name
    }

    /// Whether `name_or_id` is this preset's id or its exact name.
    pub fn matches(&self, name_or_id: &str) -> bool {
        let needle = name_or_id.trim();
        self.configuration.name == needle || self.id.to_string() == needle
    }
}

/// Stored presets data (serialization DTO for the presets file).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetsData {
    /// Presets in creation order, oldest first.
    #[serde(default)]
    pub presets: Vec<StoredPreset>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OverrideEntry, validate};

    fn sample_model() -> ConfigurationModel {
        validate(
            &RawConfiguration::new(3i64, 320i64, 50i64)
                .with_override("gdpr", "1")
                .with_override("", "draft")
                .with_override("bidfloor", "0.2")
                .with_override("gdpr", "0"),
        )
        .unwrap()
    }

    #[test]
    fn test_snapshot_canonicalizes_overrides() {
        let snapshot = PersistedConfiguration::snapshot("mobile", &sample_model());
        assert_eq!(snapshot.name, "mobile");
        assert_eq!(snapshot.placement_count, 3);
        assert_eq!(snapshot.width, 320);
        assert_eq!(snapshot.height, 50);
        assert_eq!(snapshot.overrides.len(), 2);
        assert_eq!(
            snapshot.overrides.get("gdpr").map(String::as_str),
            Some("0")
        );
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let mut model = sample_model();
        let snapshot = PersistedConfiguration::snapshot("mobile", &model);

        model.overrides_mut().push("test", "1");
        model.set_width(728i64).unwrap();

        assert_eq!(snapshot.width, 320);
        assert!(!snapshot.overrides.contains_key("test"));
    }

    #[test]
    fn test_to_model_round_trip_values() {
        let snapshot = PersistedConfiguration::snapshot("mobile", &sample_model());
        let model = ConfigurationModel::from_persisted(&snapshot).unwrap();
        assert_eq!(model.placement_count(), 3);
        assert_eq!(
            model.overrides().as_slice(),
            &[
                OverrideEntry::new("bidfloor", "0.2"),
                OverrideEntry::new("gdpr", "0"),
            ]
        );
        assert_eq!(PersistedConfiguration::snapshot("mobile", &model), snapshot);
    }

    #[test]
    fn test_to_model_rejects_tampered_dimensions() {
        let snapshot = PersistedConfiguration {
            name: "broken".to_string(),
            placement_count: 99,
            width: 0,
            height: 250,
            overrides: CanonicalOverrides::new(),
        };
        let errors = snapshot.to_model().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_stored_preset_serializes_flat() {
        let preset = StoredPreset {
            id: Uuid::nil(),
            created_at: DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
            configuration: PersistedConfiguration::snapshot("mobile", &sample_model()),
        };
        let json = serde_json::to_value(&preset).unwrap();
        assert_eq!(json["name"], "mobile");
        assert_eq!(json["width"], 320);
        assert_eq!(json["overrides"]["bidfloor"], "0.2");

        let parsed: StoredPreset = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, preset);
    }

    #[test]
    fn test_matches_name_or_id() {
        let preset = StoredPreset {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            configuration: PersistedConfiguration::snapshot("mobile", &sample_model()),
        };
        assert!(preset.matches("mobile"));
        assert!(preset.matches(" mobile "));
        assert!(preset.matches(&preset.id.to_string()));
        assert!(!preset.matches("Mobile"));
    }
}
