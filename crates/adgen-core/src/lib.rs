//! adgen-core: Core library for building test ad requests
//!
//! This library turns operator input (placement count, dimensions and free
//! key/value overrides) into request URLs for an ad-serving endpoint, and
//! saves configurations as named presets. It is used by the CLI.
//!
//! # Main Entry Points
//!
//! - [`catalog`] - Documented override keys and their hints
//! - [`model`] - Validation of raw input into a [`ConfigurationModel`]
//! - [`codec`] - Edit rows to canonical map and back
//! - [`urls`] - Request URL construction
//! - [`presets`] - Named preset storage
//! - [`config`] - Configuration management

pub mod catalog;
pub mod codec;
pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod model;
pub mod presets;
pub mod urls;

// Re-export commonly used types at crate root for convenience
pub use catalog::ParameterEntry;
pub use codec::{CanonicalOverrides, to_canonical, to_ordered};
pub use config::AdgenConfig;
pub use errors::{AdgenError, AdgenResult, ConfigError};
pub use model::{
    ConfigurationModel, Field, OverrideEntry, Overrides, RawConfiguration, RawValue,
    ValidationError, ValidationErrors,
};
pub use presets::{
    InMemoryPresetStore, JsonFilePresetStore, PersistedConfiguration, PresetError, PresetStore,
    StoredPreset,
};
pub use urls::{AdRequest, BuildContext, Endpoint, UrlBuilder};

// Re-export logging initialization
pub use logging::init_logging;
