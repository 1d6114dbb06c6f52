//! Configuration type definitions.
//!
//! These types are deserialized from TOML config files. Every field is
//! optional so a file only needs to name what it changes.
//!
//! # Example Configuration
//!
//! ```toml
//! [endpoint]
//! base_url = "https://ads.eskimi.com/getad/"
//! tag = "97cc83bb9917a07bdf3d53e8507157b2"
//! domain = "demo.eskimi.com"
//! page = "https://demo.eskimi.com/publisher/"
//!
//! [defaults]
//! placements = 2
//! width = 320
//! height = 50
//!
//! [presets]
//! file = "/home/me/.adgen/presets.json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.adgen/config.toml`
/// 2. Project config: `./.adgen/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdgenConfig {
    /// Fixed request parameters
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Starting values for a new configuration
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Preset storage
    #[serde(default)]
    pub presets: PresetsConfig,
}

/// Endpoint configuration. Unset fields use the built-in demo endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Page reference sent with every request unless `--page` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

/// Default placement count and dimensions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placements: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetsConfig {
    /// Presets file location. Default: `~/.adgen/presets.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}
