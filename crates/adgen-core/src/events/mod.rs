use tracing::{error, info, warn};

use crate::errors::AdgenError;

/// App-level startup event, tagged with the subcommand being run.
pub fn log_app_startup(command: &str) {
    info!(
        event = "core.app.startup_completed",
        version = env!("CARGO_PKG_VERSION"),
        command = command
    );
}

/// Record a failure that ends a command.
///
/// User errors (bad input, duplicate names) go out at warn, everything else
/// at error.
pub fn log_app_error(error: &dyn AdgenError) {
    if error.is_user_error() {
        warn!(
            event = "core.app.user_error",
            error = %error,
            error_code = error.error_code()
        );
    } else {
        error!(
            event = "core.app.error_occurred",
            error = %error,
            error_code = error.error_code()
        );
    }
}
