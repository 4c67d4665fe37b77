//! `tracing` subscriber setup.

use crate::core::error::VacaturError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `vacatur=debug`.
pub const LOG_ENV: &str = "VACATUR_LOG";

/// Parse a configured log level into a filter.
///
/// Accepts a bare level (`warn`) or `EnvFilter` directives with an explicit
/// level (`vacatur=debug,zip=off`). A bare word that is not a level is
/// rejected instead of being read as a target name.
pub fn level_filter(level: &str) -> Result<EnvFilter, VacaturError> {
    if level.trim().is_empty() {
        return Err(VacaturError::Config("log.level must not be empty".to_string()));
    }
    for directive in level.split(',').map(str::trim).filter(|d| !d.is_empty()) {
        if !directive.contains('=') && directive.parse::<LevelFilter>().is_err() {
            return Err(VacaturError::Config(format!(
                "log.level '{}' is not a level (trace, debug, info, warn, error, off) or target=level directive",
                directive
            )));
        }
    }
    EnvFilter::try_new(level)
        .map_err(|e| VacaturError::Config(format!("log.level '{}': {}", level, e)))
}

/// Initialize the global tracing subscriber writing compact lines to stderr.
///
/// `VACATUR_LOG` wins over `level`. Subsequent calls are no-ops.
pub fn init_subscriber(level: &str) -> Result<(), VacaturError> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => level_filter(level)?,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    let _ = subscriber.try_init();
    Ok(())
}
