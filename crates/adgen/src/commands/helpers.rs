use clap::ArgMatches;
use tracing::warn;

use adgen_core::{
    AdgenConfig, ConfigurationModel, JsonFilePresetStore, OverrideEntry, RawConfiguration,
    RawValue, ValidationErrors,
};

/// Load config, falling back to defaults with a warning on failure.
pub fn load_config_with_warning() -> AdgenConfig {
    match AdgenConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.adgen/config.toml and ./.adgen/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            AdgenConfig::default()
        }
    }
}

/// Preset store honouring `ADGEN_PRESETS_FILE` and the config file.
pub fn open_store(config: &AdgenConfig) -> JsonFilePresetStore {
    JsonFilePresetStore::from_env_or(config.presets_file())
}

/// Parse a `KEY=VALUE` override. The value may be empty; the key is taken
/// verbatim.
pub fn parse_param(input: &str) -> Result<OverrideEntry, String> {
    match input.split_once('=') {
        Some((key, value)) => Ok(OverrideEntry::new(key, value)),
        None => Err(format!(
            "Invalid --param '{}': expected KEY=VALUE (use KEY= for an empty value)",
            input
        )),
    }
}

/// Apply model flags on top of `base`. `--param` rows are appended after the
/// base rows, in the order given.
pub fn apply_model_flags(
    matches: &ArgMatches,
    mut base: RawConfiguration,
) -> Result<RawConfiguration, String> {
    if let Some(value) = matches.get_one::<String>("placements") {
        base.placement_count = Some(RawValue::from(value.as_str()));
    }
    if let Some(value) = matches.get_one::<String>("width") {
        base.width = Some(RawValue::from(value.as_str()));
    }
    if let Some(value) = matches.get_one::<String>("height") {
        base.height = Some(RawValue::from(value.as_str()));
    }
    if let Some(params) = matches.get_many::<String>("param") {
        for param in params {
            base.overrides.push(parse_param(param)?);
        }
    }
    Ok(base)
}

/// Validate, printing every field error on failure.
pub fn validate_or_report(raw: &RawConfiguration) -> Result<ConfigurationModel, ValidationErrors> {
    ConfigurationModel::validate(raw).inspect_err(|errors| {
        eprintln!("❌ Invalid configuration:");
        for error in errors.iter() {
            eprintln!("   {}", error);
        }
    })
}
