use clap::ArgMatches;
use tracing::info;

use adgen_core::catalog;

pub(crate) fn handle_describe_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = matches
        .get_one::<String>("key")
        .ok_or("Key argument is required")?;

    // Unknown keys are not an error: any key may be sent.
    match catalog::lookup(key) {
        Some(param) => {
            println!("{} ({})", param.key, param.group);
            println!("  {}", param.summary());
            if let Some(hint) = param.default_hint {
                println!("  Default: {}", hint);
            }
            info!(
                event = "cli.describe_completed",
                key = key.as_str(),
                known = true
            );
        }
        None => {
            println!(
                "'{}' is not documented. It can still be used as an override.",
                key
            );
            info!(
                event = "cli.describe_completed",
                key = key.as_str(),
                known = false
            );
        }
    }

    Ok(())
}
