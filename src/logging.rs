use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::errors::{AppError, AppResult};

/// Environment variable that overrides the configured log level.
pub const LOG_ENV: &str = "TIMEVAULT_LOG";

/// Install the stderr subscriber. `TIMEVAULT_LOG` wins over `level`; a
/// second call (tests, embedding) reports an error and changes nothing.
pub fn init_tracing(level: Option<&str>) -> AppResult<()> {
    let default_level = level.unwrap_or("warn");
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init()
        .map_err(|err| AppError::Other(err.to_string()))?;

    Ok(())
}
