use clap::ArgMatches;
use tracing::error;

use adgen_core::events;

pub mod helpers;

mod completions;
mod describe;
mod generate;
mod params;
mod presets;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup(matches.subcommand_name().unwrap_or("none"));

    match matches.subcommand() {
        Some(("generate", sub_matches)) => generate::handle_generate_command(sub_matches),
        Some(("params", sub_matches)) => params::handle_params_command(sub_matches),
        Some(("describe", sub_matches)) => describe::handle_describe_command(sub_matches),
        Some(("presets", sub_matches)) => presets::handle_presets_command(sub_matches),
        Some(("completions", sub_matches)) => {
            completions::handle_completions_command(sub_matches)
        }
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}
