use tracing::{info, warn};

use super::errors::PresetError;
use super::store::PresetStore;
use super::types::{PersistedConfiguration, StoredPreset};
use crate::model::ConfigurationModel;

/// Save the current state of `model` under `name`.
///
/// The model is only read; a failed save leaves it exactly as it was.
pub fn save_model(
    store: &mut dyn PresetStore,
    name: &str,
    model: &ConfigurationModel,
) -> Result<StoredPreset, PresetError> {
    info!(event = "core.presets.save_started", name = name);

    let snapshot = PersistedConfiguration::snapshot(name, model);
    match store.create(snapshot) {
        Ok(stored) => {
            info!(
                event = "core.presets.save_completed",
                name = stored.name(),
                id = %stored.id
            );
            Ok(stored)
        }
        Err(e) => {
            warn!(event = "core.presets.save_failed", name = name, error = %e);
            Err(e)
        }
    }
}

/// Load a preset by name or id and rebuild an editable model.
///
/// `Ok(None)` when no preset matches.
pub fn load_model(
    store: &dyn PresetStore,
    name_or_id: &str,
) -> Result<Option<(StoredPreset, ConfigurationModel)>, PresetError> {
    let Some(stored) = store.get(name_or_id)? else {
        info!(event = "core.presets.load_not_found", name = name_or_id);
        return Ok(None);
    };

    let model = stored
        .configuration
        .to_model()
        .map_err(|errors| PresetError::InvalidStored {
            name: stored.name().to_string(),
            errors,
        })?;

    info!(
        event = "core.presets.load_completed",
        name = stored.name(),
        overrides = model.overrides().len()
    );
    Ok(Some((stored, model)))
}
