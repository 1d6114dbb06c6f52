//! Configuration validation.

use crate::config::types::AdgenConfig;
use crate::errors::ConfigError;
use crate::model::{Field, RawValue, validate_field};

/// Validate the merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` for a base URL that is not an
/// absolute http(s) URL without a query, a blank tag or domain, or default
/// dimensions the model would reject.
pub fn validate_config(config: &AdgenConfig) -> Result<(), ConfigError> {
    if let Some(base_url) = &config.endpoint.base_url {
        validate_base_url(base_url)?;
    }

    for (name, value) in [
        ("endpoint.tag", &config.endpoint.tag),
        ("endpoint.domain", &config.endpoint.domain),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} cannot be empty", name),
            });
        }
    }

    for (field, value) in [
        (Field::PlacementCount, config.defaults.placements),
        (Field::Width, config.defaults.width),
        (Field::Height, config.defaults.height),
    ] {
        if let Some(value) = value {
            validate_field(field, Some(&RawValue::from(value))).map_err(|e| {
                ConfigError::InvalidConfiguration {
                    message: format!("defaults: {}", e),
                }
            })?;
        }
    }

    Ok(())
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(base_url).map_err(|e| ConfigError::InvalidConfiguration {
        message: format!("endpoint.base_url '{}' is not a valid URL: {}", base_url, e),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "endpoint.base_url must use http or https, got '{}'",
                parsed.scheme()
            ),
        });
    }

    if parsed.query().is_some() {
        return Err(ConfigError::InvalidConfiguration {
            message: "endpoint.base_url must not contain a query string".to_string(),
        });
    }

    Ok(())
}
