use std::path::{Path, PathBuf};

use super::errors::PresetError;
use super::store::{PresetStore, find, new_stored, newest_first};
use super::types::{PersistedConfiguration, PresetsData, StoredPreset};

/// Preset store backed by a pretty-printed JSON file.
///
/// Every call reads the file fresh, so several processes see each other's
/// saves. A corrupt file is reported, never overwritten.
#[derive(Debug, Clone)]
pub struct JsonFilePresetStore {
    path: PathBuf,
}

impl JsonFilePresetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `ADGEN_PRESETS_FILE`, else `configured`, else
    /// `~/.adgen/presets.json`.
    pub fn from_env_or(configured: Option<&Path>) -> Self {
        Self::new(presets_file_path(configured))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PresetStore for JsonFilePresetStore {
    fn create(
        &mut self,
        configuration: PersistedConfiguration,
    ) -> Result<StoredPreset, PresetError> {
        let mut data = load_presets(&self.path)?;
        let stored = new_stored(&data.presets, configuration)?;
        data.presets.push(stored.clone());
        save_presets(&self.path, &data)?;

        tracing::info!(
            event = "core.presets.created",
            name = stored.name(),
            id = %stored.id
        );
        Ok(stored)
    }

    fn list(&self) -> Result<Vec<StoredPreset>, PresetError> {
        let data = load_presets(&self.path)?;
        Ok(newest_first(&data.presets))
    }

    fn get(&self, name_or_id: &str) -> Result<Option<StoredPreset>, PresetError> {
        let data = load_presets(&self.path)?;
        Ok(find(&data.presets, name_or_id))
    }
}

/// Load presets from `path`. A missing file is an empty store.
pub fn load_presets(path: &Path) -> Result<PresetsData, PresetError> {
    if !path.exists() {
        return Ok(PresetsData::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        // ERROR (not warn): file exists but can't be read; needs user action.
        tracing::error!(
            event = "core.presets.load_failed",
            path = %path.display(),
            error = %e
        );
        PresetError::LoadCorrupted {
            message: format!(
                "Failed to read presets file: {}. Check permissions on {}",
                e,
                path.display()
            ),
        }
    })?;

    serde_json::from_str(&content).map_err(|e| {
        tracing::error!(
            event = "core.presets.json_parse_failed",
            path = %path.display(),
            error = %e,
            "Presets file exists but contains invalid JSON"
        );
        PresetError::LoadCorrupted {
            message: format!("{}. Delete {} to reset.", e, path.display()),
        }
    })
}

fn cleanup_temp_file(temp_path: &Path, original_error: &std::io::Error) {
    if let Err(cleanup_err) = std::fs::remove_file(temp_path) {
        tracing::warn!(
            event = "core.presets.temp_file_cleanup_failed",
            temp_file = %temp_path.display(),
            original_error = %original_error,
            cleanup_error = %cleanup_err
        );
    }
}

/// Save presets to `path`, creating parent directories.
///
/// The file is replaced whole: readers see either the old contents or the
/// new ones.
pub fn save_presets(path: &Path, data: &PresetsData) -> Result<(), PresetError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| PresetError::SaveFailed {
            message: format!("Failed to create directory ({}): {}", parent.display(), e),
        })?;
    }

    let json = serde_json::to_string_pretty(data).map_err(|e| PresetError::SaveFailed {
        message: format!("Failed to serialize presets: {}", e),
    })?;

    // Write to a sibling temp file, then rename over the target.
    let temp_path = path.with_extension("json.tmp");
    if let Err(e) = std::fs::write(&temp_path, json) {
        cleanup_temp_file(&temp_path, &e);
        return Err(PresetError::SaveFailed {
            message: format!("Failed to write temp file ({}): {}", temp_path.display(), e),
        });
    }
    if let Err(e) = std::fs::rename(&temp_path, path) {
        cleanup_temp_file(&temp_path, &e);
        return Err(PresetError::SaveFailed {
            message: format!("Failed to replace presets file ({}): {}", path.display(), e),
        });
    }

    tracing::info!(
        event = "core.presets.saved",
        path = %path.display(),
        count = data.presets.len()
    );

    Ok(())
}

/// Resolve the presets file location.
pub fn presets_file_path(configured: Option<&Path>) -> PathBuf {
    // Allow override via env var for testing.
    if let Ok(path_str) = std::env::var("ADGEN_PRESETS_FILE")
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    if let Some(path) = configured {
        return path.to_path_buf();
    }

    match dirs::home_dir() {
        Some(home) => home.join(".adgen").join("presets.json"),
        None => {
            tracing::error!(
                event = "core.presets.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".adgen").join("presets.json")
        }
    }
}

/// Helpers for tests that set `ADGEN_PRESETS_FILE`.
#[cfg(test)]
pub(crate) mod test_helpers {
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify ADGEN_PRESETS_FILE env var.
    pub static PRESETS_FILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that removes ADGEN_PRESETS_FILE env var on drop.
    pub struct PresetsFileEnvGuard;

    impl PresetsFileEnvGuard {
        pub fn new(path: &std::path::Path) -> Self {
            // SAFETY: Caller must hold PRESETS_FILE_ENV_LOCK to serialize access
            // from Rust test code.
            unsafe { std::env::set_var("ADGEN_PRESETS_FILE", path) };
            Self
        }
    }

    impl Drop for PresetsFileEnvGuard {
        fn drop(&mut self) {
            // SAFETY: Guard is only constructed while PRESETS_FILE_ENV_LOCK is held.
            unsafe { std::env::remove_var("ADGEN_PRESETS_FILE") };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::{PRESETS_FILE_ENV_LOCK, PresetsFileEnvGuard};
    use super::*;
    use crate::codec::CanonicalOverrides;

    fn config(name: &str) -> PersistedConfiguration {
        PersistedConfiguration {
            name: name.to_string(),
            placement_count: 2,
            width: 300,
            height: 250,
            overrides: CanonicalOverrides::from([("bidfloor".to_string(), "0.5".to_string())]),
        }
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let store = JsonFilePresetStore::new(temp_dir.path().join("presets.json"));
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_create_persists_across_instances() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("presets.json");

        let mut store = JsonFilePresetStore::new(&path);
        let stored = store.create(config("banner")).unwrap();
        assert!(path.exists());

        let reopened = JsonFilePresetStore::new(&path);
        let loaded = reopened.get("banner").unwrap().expect("preset saved");
        assert_eq!(loaded, stored);
        let overrides = &loaded.configuration.overrides;
        assert_eq!(overrides.get("bidfloor").map(String::as_str), Some("0.5"));
    }

    #[test]
    fn test_save_replaces_file_without_leftover_temp() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("presets.json");

        let mut store = JsonFilePresetStore::new(&path);
        store.create(config("banner")).unwrap();
        store.create(config("leader")).unwrap();

        let data = load_presets(&path).unwrap();
        assert_eq!(data.presets.len(), 2);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_failed_rename_cleans_up_temp_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        // A directory in the way makes the final rename fail.
        let path = temp_dir.path().join("presets.json");
        std::fs::create_dir(&path).unwrap();

        let result = save_presets(&path, &PresetsData::default());
        assert!(matches!(result, Err(PresetError::SaveFailed { .. })));
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn test_list_newest_first_from_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let mut store = JsonFilePresetStore::new(temp_dir.path().join("presets.json"));
        store.create(config("old")).unwrap();
        store.create(config("new")).unwrap();

        let names: Vec<String> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|p| p.configuration.name)
            .collect();
        assert_eq!(names, vec!["new", "old"]);
    }

    #[test]
    fn test_duplicate_name_leaves_file_untouched() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("presets.json");
        let mut store = JsonFilePresetStore::new(&path);
        store.create(config("banner")).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        assert!(matches!(
            store.create(config("banner")),
            Err(PresetError::AlreadyExists { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_corrupt_file_is_reported_not_overwritten() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("presets.json");
        std::fs::write(&path, "{ not json").unwrap();

        let mut store = JsonFilePresetStore::new(&path);
        assert!(matches!(store.list(), Err(PresetError::LoadCorrupted { .. })));
        assert!(matches!(
            store.create(config("banner")),
            Err(PresetError::LoadCorrupted { .. })
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
    }

    #[test]
    fn test_presets_file_path_env_override() {
        let _lock = PRESETS_FILE_ENV_LOCK.lock().unwrap();
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("env.json");
        let _guard = PresetsFileEnvGuard::new(&path);

        let configured = temp_dir.path().join("configured.json");
        assert_eq!(presets_file_path(Some(&configured)), path);
    }

    #[test]
    fn test_presets_file_path_configured() {
        let _lock = PRESETS_FILE_ENV_LOCK.lock().unwrap();
        let configured = PathBuf::from("/tmp/adgen-configured.json");
        assert_eq!(presets_file_path(Some(&configured)), configured);
    }
}
