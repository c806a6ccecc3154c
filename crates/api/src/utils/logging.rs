use std::time::Duration;

use rizzmaster_domain::RizzError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a logical identifier such as `"generation::generate_replies"`;
/// never pass user content through it.
#[inline]
pub fn log_command_execution(
    command: &str,
    elapsed: Duration,
    error: Option<&RizzError>,
) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, "command.success"),
        Some(err) => warn!(command, duration_ms, error_type = err.label(), error = %err, "command.failure"),
    }
}
