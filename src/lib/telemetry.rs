//! Browser console logging. `init` runs once at start-up; everything else logs
//! through `tracing` macros and is filtered by the configured level.

use super::errors::AppError;
use tracing::Level;

/// Map verbosity count to tracing level
const fn get_verbosity_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Parses a level name (`error`..`trace`) or a verbosity count (`0`..`5`).
///
/// # Errors
///
/// Returns a config error for anything else.
pub fn parse_log_level(level: &str) -> Result<Level, AppError> {
    let level = level.trim();
    if let Ok(parsed) = level.parse::<u8>() {
        if parsed <= 5 {
            return Ok(get_verbosity_level(parsed));
        }
    }

    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        _ => Err(AppError::Config(format!("invalid log level: {level}"))),
    }
}

/// Installs the panic hook and the console subscriber.
#[cfg(target_arch = "wasm32")]
pub fn init(config: &super::config::AppConfig) {
    use tracing_wasm::{WASMLayerConfigBuilder, set_as_global_default_with_config};

    console_error_panic_hook::set_once();

    let parsed = parse_log_level(&config.log_level);
    let level = parsed.as_ref().map_or(Level::INFO, |level| *level);
    set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(level)
            .set_report_logs_in_timings(false)
            .build(),
    );

    if let Err(err) = parsed {
        tracing::warn!(error = %err, "falling back to INFO logging");
    }
    tracing::debug!(
        commit = super::GIT_COMMIT_HASH,
        api = config.has_api(),
        "swiftlogin started"
    );
}
