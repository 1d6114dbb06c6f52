use clap::ArgMatches;
use tracing::{error, info};

use adgen_core::presets::load_model;
use adgen_core::{RawConfiguration, UrlBuilder, events};

use super::helpers::{apply_model_flags, load_config_with_warning, open_store, validate_or_report};

pub(crate) fn handle_generate_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let preset = matches.get_one::<String>("preset");
    let page = matches.get_one::<String>("page");

    info!(
        event = "cli.generate_started",
        json_output = json_output,
        preset = preset.map(String::as_str)
    );

    let config = load_config_with_warning();

    // 1. Starting point: a preset, or the configured defaults
    let base = match preset {
        Some(name) => match load_model(&open_store(&config), name) {
            Ok(Some((_, model))) => RawConfiguration::from(&model),
            Ok(None) => {
                eprintln!("❌ Preset '{}' not found.", name);
                error!(
                    event = "cli.generate_preset_not_found",
                    preset = name.as_str()
                );
                return Err(format!("Preset '{}' not found", name).into());
            }
            Err(e) => {
                eprintln!("❌ Failed to load preset '{}': {}", name, e);
                error!(event = "cli.generate_failed", preset = name.as_str(), error = %e);
                events::log_app_error(&e);
                return Err(e.into());
            }
        },
        None => config.default_input(),
    };

    // 2. Flags on top, then validate
    let raw = apply_model_flags(matches, base)
        .inspect_err(|e| eprintln!("❌ {}", e))?;
    let model = match validate_or_report(&raw) {
        Ok(model) => model,
        Err(errors) => {
            error!(event = "cli.generate_invalid", error_count = errors.len());
            events::log_app_error(&errors);
            return Err(errors.into());
        }
    };

    // 3. Build
    let context = config.build_context(page.map(String::as_str));
    let requests = UrlBuilder::new(config.endpoint()).build(&model, &context);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&requests)?);
    } else {
        println!(
            "{} placement{} of {}x{}:",
            requests.len(),
            if requests.len() == 1 { "" } else { "s" },
            model.width(),
            model.height()
        );
        for (i, request) in requests.iter().enumerate() {
            println!("  #{:<2} {}", i + 1, request.url);
        }
    }

    info!(
        event = "cli.generate_completed",
        placements = requests.len(),
        overrides = model.overrides().effective().count()
    );

    Ok(())
}
