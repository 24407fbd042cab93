//! Tracing subscriber setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};
use crate::errors::ConfigError;

/// Install a global tracing subscriber built from `config`.
///
/// `RUST_LOG` wins over `config.level` when it is set. Fails if the level
/// directive does not parse or a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<(), ConfigError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| ConfigError::InvalidValue {
            key: String::from("LOG_LEVEL"),
            value: format!("{} ({})", config.level, e),
        })?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(config.colored)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match config.format {
        LogFormat::Json => registry.with(fmt_layer.json()).try_init(),
        LogFormat::Pretty => registry.with(fmt_layer.pretty()).try_init(),
        LogFormat::Compact => registry.with(fmt_layer.compact()).try_init(),
    };

    result.map_err(|e| ConfigError::Logging {
        message: e.to_string(),
    })
}
