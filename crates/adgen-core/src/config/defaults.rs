//! Resolved values for configuration fields.
//!
//! Unset fields fall back to the built-in demo endpoint and the model's
//! default dimensions.

use std::path::Path;

use crate::config::types::AdgenConfig;
use crate::model::{DEFAULT_HEIGHT, DEFAULT_PLACEMENT_COUNT, DEFAULT_WIDTH, RawConfiguration};
use crate::urls::{
    BuildContext, DEFAULT_BASE_URL, DEFAULT_DOMAIN, DEFAULT_PAGE, DEFAULT_TAG, Endpoint,
};

impl AdgenConfig {
    /// Endpoint with built-in values for unset fields.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint {
            base_url: self
                .endpoint
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            tag: self
                .endpoint
                .tag
                .clone()
                .unwrap_or_else(|| DEFAULT_TAG.to_string()),
            domain: self
                .endpoint
                .domain
                .clone()
                .unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
        }
    }

    /// Build context using the configured page, or `page` if given.
    pub fn build_context(&self, page: Option<&str>) -> BuildContext {
        let page = page
            .map(str::to_string)
            .or_else(|| self.endpoint.page.clone())
            .unwrap_or_else(|| DEFAULT_PAGE.to_string());
        BuildContext::new(page)
    }

    /// Starting raw input for a new configuration.
    pub fn default_input(&self) -> RawConfiguration {
        RawConfiguration::new(
            self.defaults.placements.unwrap_or(DEFAULT_PLACEMENT_COUNT),
            self.defaults.width.unwrap_or(DEFAULT_WIDTH),
            self.defaults.height.unwrap_or(DEFAULT_HEIGHT),
        )
    }

    pub fn presets_file(&self) -> Option<&Path> {
        self.presets.file.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::{DefaultsConfig, EndpointConfig};
    use crate::model::RawValue;

    #[test]
    fn test_default_endpoint_matches_builtin() {
        assert_eq!(AdgenConfig::default().endpoint(), Endpoint::default());
    }

    #[test]
    fn test_partial_endpoint_override() {
        let config = AdgenConfig {
            endpoint: EndpointConfig {
                tag: Some("staging".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let endpoint = config.endpoint();
        assert_eq!(endpoint.tag, "staging");
        assert_eq!(endpoint.base_url, DEFAULT_BASE_URL);
        assert_eq!(endpoint.domain, DEFAULT_DOMAIN);
    }

    #[test]
    fn test_build_context_precedence() {
        let mut config = AdgenConfig::default();
        assert_eq!(config.build_context(None).page, DEFAULT_PAGE);

        config.endpoint.page = Some("https://configured.example/".to_string());
        assert_eq!(
            config.build_context(None).page,
            "https://configured.example/"
        );
        assert_eq!(
            config.build_context(Some("https://flag.example/")).page,
            "https://flag.example/"
        );
    }

    #[test]
    fn test_default_input() {
        let config = AdgenConfig {
            defaults: DefaultsConfig {
                placements: Some(4),
                ..Default::default()
            },
            ..Default::default()
        };
        let raw = config.default_input();
        assert_eq!(raw.placement_count, Some(RawValue::Integer(4)));
        assert_eq!(raw.width, Some(RawValue::Integer(300)));
        assert_eq!(raw.height, Some(RawValue::Integer(250)));
    }
}
