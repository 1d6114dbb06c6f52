//! # Configuration System
//!
//! Hierarchical TOML configuration for adgen.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - The demo endpoint and a 1 x 300x250 placement
//! 2. **User config** - `~/.adgen/config.toml`
//! 3. **Project config** - `./.adgen/config.toml`
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use adgen_core::config::AdgenConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AdgenConfig::load_hierarchy()?;
//!     let endpoint = config.endpoint();
//!     println!("{}", endpoint.base_url);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{AdgenConfig, DefaultsConfig, EndpointConfig, PresetsConfig};
pub use validation::validate_config;

impl AdgenConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
