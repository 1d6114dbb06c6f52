use clap::{Arg, ArgAction, Command};

/// Flags that describe a configuration: dimensions, count and overrides.
fn model_args() -> [Arg; 4] {
    [
        Arg::new("placements")
            .long("placements")
            .short('n')
            .help("Number of placements to request (1-20, overrides config)"),
        Arg::new("width")
            .long("width")
            .short('W')
            .help("Placement width in pixels (overrides config)"),
        Arg::new("height")
            .long("height")
            .short('H')
            .help("Placement height in pixels (overrides config)"),
        Arg::new("param")
            .long("param")
            .short('p')
            .value_name("KEY=VALUE")
            .help("Query override, repeatable; appended in the order given")
            .action(ArgAction::Append)
            .allow_hyphen_values(true),
    ]
}

pub fn build_cli() -> Command {
    Command::new("adgen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Build test requests for an ad-serving endpoint")
        .long_about(
            "adgen assembles ad requests from a placement size, a placement count and \
             free-form query overrides, prints the resulting request URLs, and saves \
             configurations as named presets for later replay.",
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate")
                .about("Validate a configuration and print its request URLs")
                .args(model_args())
                .arg(
                    Arg::new("preset")
                        .long("preset")
                        .help("Start from a saved preset; other flags override its values"),
                )
                .arg(
                    Arg::new("page")
                        .long("page")
                        .help("Page reference sent as 'page' (overrides config)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("params")
                .about("List documented override keys by group")
                .arg(
                    Arg::new("group")
                        .long("group")
                        .short('g')
                        .help("Only show one group"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("describe")
                .about("Show the documentation for one override key")
                .arg(
                    Arg::new("key")
                        .help("Override key")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("presets")
                .about("Save and inspect named presets")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("save")
                        .about("Save a configuration under a name")
                        .arg(
                            Arg::new("name")
                                .help("Preset name")
                                .required(true)
                                .index(1),
                        )
                        .args(model_args()),
                )
                .subcommand(
                    Command::new("list")
                        .about("List saved presets, newest first")
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .help("Output in JSON format")
                                .action(ArgAction::SetTrue),
                        ),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show one saved preset")
                        .arg(
                            Arg::new("name")
                                .help("Preset name or id")
                                .required(true)
                                .index(1),
                        )
                        .arg(
                            Arg::new("json")
                                .long("json")
                                .help("Output in JSON format")
                                .action(ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Target shell")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(clap_complete::Shell)),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_build() {
        let app = build_cli();
        assert_eq!(app.get_name(), "adgen");
        app.debug_assert();
    }

    #[test]
    fn test_generate_flags() {
        let app = build_cli();
        let args = "adgen generate -n 2 -W 300 -H 250 -p bidfloor=0.5 --param gdpr=1 --json";
        let matches = app.try_get_matches_from(args.split_whitespace()).unwrap();

        let sub = matches.subcommand_matches("generate").unwrap();
        assert_eq!(sub.get_one::<String>("placements").unwrap(), "2");
        assert_eq!(sub.get_one::<String>("width").unwrap(), "300");
        let params: Vec<&String> = sub.get_many::<String>("param").unwrap().collect();
        assert_eq!(params, vec!["bidfloor=0.5", "gdpr=1"]);
        assert!(sub.get_flag("json"));
    }

    #[test]
    fn test_quiet_is_global() {
        let app = build_cli();
        let args = "adgen params --quiet";
        let matches = app.try_get_matches_from(args.split_whitespace()).unwrap();
        assert!(matches.get_flag("quiet"));
    }

    #[test]
    fn test_presets_save_requires_name() {
        let app = build_cli();
        let result = app.try_get_matches_from(["adgen", "presets", "save"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_presets_save_accepts_model_flags() {
        let app = build_cli();
        let args = "adgen presets save mobile -W 320 -H 50";
        let matches = app.try_get_matches_from(args.split_whitespace()).unwrap();
        let presets = matches.subcommand_matches("presets").unwrap();
        let save = presets.subcommand_matches("save").unwrap();
        assert_eq!(save.get_one::<String>("name").unwrap(), "mobile");
        assert_eq!(save.get_one::<String>("height").unwrap(), "50");
    }

    #[test]
    fn test_describe_requires_key() {
        let app = build_cli();
        assert!(app.try_get_matches_from(["adgen", "describe"]).is_err());
    }

    #[test]
    fn test_completions_rejects_unknown_shell() {
        let app = build_cli();
        let args = "adgen completions tcsh";
        let result = app.try_get_matches_from(args.split_whitespace());
        assert!(result.is_err());
    }
}
