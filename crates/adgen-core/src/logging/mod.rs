use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable with extra filter directives, e.g. `adgen_core=debug`.
pub const LOG_ENV: &str = "ADGEN_LOG";

/// Level used when `ADGEN_LOG` is unset or empty.
pub fn default_level(quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else {
        LevelFilter::INFO
    }
}

/// Initialize JSON logging on stderr.
///
/// stdout carries generated URLs and `--json` output, so nothing else may
/// write there. `--quiet` drops the default to errors only; `ADGEN_LOG`
/// directives refine either level.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(quiet).into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}
