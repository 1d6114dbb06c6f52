use clap::ArgMatches;
use tracing::{error, info};

use adgen_core::catalog;

use crate::table::CatalogTable;

pub(crate) fn handle_params_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let group = matches.get_one::<String>("group");

    info!(
        event = "cli.params_started",
        json_output = json_output,
        group = group.map(String::as_str)
    );

    let mut groups = catalog::grouped_view();
    if let Some(group) = group {
        groups.retain(|name, _| *name == group.as_str());
        if groups.is_empty() {
            eprintln!(
                "Unknown group '{}'. Groups: {}",
                group,
                catalog::group_names().join(", ")
            );
            error!(event = "cli.params_unknown_group", group = group.as_str());
            return Err(format!("Unknown group '{}'", group).into());
        }
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        let table = CatalogTable::new(groups.values().flatten().copied());
        for (name, params) in &groups {
            println!("{}", name);
            table.print_table(params);
            println!();
        }
        println!("Any other key can be used as an override too; these are only documented.");
    }

    info!(
        event = "cli.params_completed",
        groups = groups.len(),
        count = groups.values().map(Vec::len).sum::<usize>()
    );

    Ok(())
}
