use clap::ArgMatches;
use tracing::{error, info};

use adgen_core::presets::{load_model, save_model};
use adgen_core::{PresetStore, events};

use super::helpers::{apply_model_flags, load_config_with_warning, open_store, validate_or_report};
use crate::table::PresetTable;

pub(crate) fn handle_presets_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("save", sub_matches)) => handle_save(sub_matches),
        Some(("list", sub_matches)) => handle_list(sub_matches),
        Some(("show", sub_matches)) => handle_show(sub_matches),
        _ => {
            error!(event = "cli.presets_command_unknown");
            Err("Unknown presets command".into())
        }
    }
}

fn handle_save(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Name argument is required")?;

    info!(event = "cli.presets_save_started", name = name.as_str());

    let config = load_config_with_warning();
    let raw = apply_model_flags(matches, config.default_input())
        .inspect_err(|e| eprintln!("❌ {}", e))?;
    let model = match validate_or_report(&raw) {
        Ok(model) => model,
        Err(errors) => {
            error!(
                event = "cli.presets_save_invalid",
                error_count = errors.len()
            );
            events::log_app_error(&errors);
            return Err(errors.into());
        }
    };

    let mut store = open_store(&config);
    match save_model(&mut store, name, &model) {
        Ok(stored) => {
            let saved = &stored.configuration;
            let count = saved.overrides.len();
            println!("✅ Preset '{}' saved", stored.name());
            println!("   ID: {}", stored.id);
            println!(
                "   {} x {}x{}, {} override{}",
                saved.placement_count,
                saved.width,
                saved.height,
                count,
                if count == 1 { "" } else { "s" }
            );
            info!(event = "cli.presets_save_completed", id = %stored.id);
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Failed to save preset '{}': {}", name, e);
            error!(event = "cli.presets_save_failed", name = name.as_str(), error = %e);
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_list(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.presets_list_started",
        json_output = json_output
    );

    let config = load_config_with_warning();
    let presets = match open_store(&config).list() {
        Ok(presets) => presets,
        Err(e) => {
            eprintln!("❌ Failed to list presets: {}", e);
            error!(event = "cli.presets_list_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&presets)?);
    } else if presets.is_empty() {
        println!("No presets saved.");
    } else {
        PresetTable::new(&presets).print_table(&presets);
    }

    info!(event = "cli.presets_list_completed", count = presets.len());

    Ok(())
}

fn handle_show(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches
        .get_one::<String>("name")
        .ok_or("Name argument is required")?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.presets_show_started", name = name.as_str());

    let config = load_config_with_warning();
    let (stored, model) = match load_model(&open_store(&config), name) {
        Ok(Some(found)) => found,
        Ok(None) => {
            eprintln!("❌ Preset '{}' not found.", name);
            error!(event = "cli.presets_show_not_found", name = name.as_str());
            return Err(format!("Preset '{}' not found", name).into());
        }
        Err(e) => {
            eprintln!("❌ Failed to load preset '{}': {}", name, e);
            error!(event = "cli.presets_show_failed", name = name.as_str(), error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&stored)?);
    } else {
        println!("Preset: {}", stored.name());
        println!("  ID:          {}", stored.id);
        println!("  Created:     {}", stored.created_at.to_rfc3339());
        println!("  Placements:  {}", model.placement_count());
        println!("  Size:        {}x{}", model.width(), model.height());
        if model.overrides().is_empty() {
            println!("  Overrides:   (none)");
        } else {
            println!("  Overrides:");
            for entry in model.overrides() {
                println!("    {} = {}", entry.key, entry.value);
            }
        }
    }

    info!(event = "cli.presets_show_completed", name = stored.name());

    Ok(())
}
