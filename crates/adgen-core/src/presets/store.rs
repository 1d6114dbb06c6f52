use chrono::Utc;
use uuid::Uuid;

use super::errors::PresetError;
use super::types::{PersistedConfiguration, StoredPreset};

/// Create/list/fetch of named presets.
///
/// The store owns naming policy: names are trimmed, must be non-empty and
/// are unique within one store.
pub trait PresetStore {
    /// Persist a new preset and return it with its assigned identity.
    fn create(&mut self, configuration: PersistedConfiguration)
    -> Result<StoredPreset, PresetError>;

    /// All presets, newest first.
    fn list(&self) -> Result<Vec<StoredPreset>, PresetError>;

    /// Fetch by exact name or id. `Ok(None)` when nothing matches.
    fn get(&self, name_or_id: &str) -> Result<Option<StoredPreset>, PresetError>;
}

/// Check the name and wrap the configuration with a fresh identity.
pub(crate) fn new_stored(
    existing: &[StoredPreset],
    mut configuration: PersistedConfiguration,
) -> Result<StoredPreset, PresetError> {
    let name = configuration.name.trim();
    if name.is_empty() {
        return Err(PresetError::InvalidName);
    }
    if existing.iter().any(|p| p.name() == name) {
        return Err(PresetError::AlreadyExists {
            name: name.to_string(),
        });
    }
    configuration.name = name.to_string();

    Ok(StoredPreset {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        configuration,
    })
}

/// Presets are kept oldest first; callers see them newest first.
pub(crate) fn newest_first(presets: &[StoredPreset]) -> Vec<StoredPreset> {
    presets.iter().rev().cloned().collect()
}

pub(crate) fn find(presets: &[StoredPreset], name_or_id: &str) -> Option<StoredPreset> {
    presets.iter().find(|p| p.matches(name_or_id)).cloned()
}

/// Process-local store, used by tests and embedders without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPresetStore {
    presets: Vec<StoredPreset>,
}

impl InMemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl PresetStore for InMemoryPresetStore {
    fn create(
        &mut self,
        configuration: PersistedConfiguration,
    ) -> Result<StoredPreset, PresetError> {
        let stored = new_stored(&self.presets, configuration)?;
        self.presets.push(stored.clone());
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<StoredPreset>, PresetError> {
        Ok(newest_first(&self.presets))
    }

    fn get(&self, name_or_id: &str) -> Result<Option<StoredPreset>, PresetError> {
        Ok(find(&self.presets, name_or_id))
    }
}
