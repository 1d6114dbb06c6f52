//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.adgen/config.toml` (global user preferences)
//! 3. **Project config** - `./.adgen/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::types::{AdgenConfig, DefaultsConfig, EndpointConfig, PresetsConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<AdgenConfig, ConfigError> {
    let user_path = dirs::home_dir().map(|home| home.join(".adgen").join("config.toml"));
    let project_path = std::env::current_dir()?.join(".adgen").join("config.toml");
    load_from_paths(user_path.as_deref(), &project_path)
}

/// Load and merge the user and project files at explicit paths.
pub fn load_from_paths(
    user_path: Option<&Path>,
    project_path: &Path,
) -> Result<AdgenConfig, ConfigError> {
    let mut config = AdgenConfig::default();

    if let Some(path) = user_path
        && let Some(user_config) = load_config_file(path)?
    {
        config = merge_configs(config, user_config);
    }

    if let Some(project_config) = load_config_file(project_path)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    tracing::debug!(
        event = "core.config.load_completed",
        project_path = %project_path.display()
    );
    Ok(config)
}

/// Load a configuration file. `Ok(None)` if it does not exist.
fn load_config_file(path: &Path) -> Result<Option<AdgenConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Each field is replaced only if the override sets it.
pub fn merge_configs(base: AdgenConfig, override_config: AdgenConfig) -> AdgenConfig {
    AdgenConfig {
        endpoint: EndpointConfig {
            base_url: override_config.endpoint.base_url.or(base.endpoint.base_url),
            tag: override_config.endpoint.tag.or(base.endpoint.tag),
            domain: override_config.endpoint.domain.or(base.endpoint.domain),
            page: override_config.endpoint.page.or(base.endpoint.page),
        },
        defaults: DefaultsConfig {
            placements: override_config
                .defaults
                .placements
                .or(base.defaults.placements),
            width: override_config.defaults.width.or(base.defaults.width),
            height: override_config.defaults.height.or(base.defaults.height),
        },
        presets: PresetsConfig {
            file: override_config.presets.file.or(base.presets.file),
        },
    }
}

/// Path of the project config file relative to `dir`.
pub fn project_config_path(dir: &Path) -> PathBuf {
    dir.join(".adgen").join("config.toml")
}
