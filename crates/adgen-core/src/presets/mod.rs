//! # Presets
//!
//! Named, reloadable configurations. The core talks to storage only through
//! the [`PresetStore`] trait; [`JsonFilePresetStore`] is the file-backed
//! implementation the CLI uses.

pub mod errors;
pub mod handler;
pub mod persistence;
pub mod store;
pub mod types;

pub use errors::PresetError;
pub use handler::{load_model, save_model};
pub use persistence::{JsonFilePresetStore, load_presets, presets_file_path, save_presets};
pub use store::{InMemoryPresetStore, PresetStore};
pub use types::{PersistedConfiguration, PresetsData, StoredPreset};
