use std::{env, error::Error};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ConfigPaths, GeneralConfig};

/// Initialize tracing for the command line client
///
/// Diagnostics go to stderr so command output on stdout stays clean.
/// Uses RUST_LOG if set, otherwise the configured log level. Output is
/// compact by default; MPRISCTL_LOG_FORMAT selects "json" or "pretty".
/// With `log_to_file` enabled logs are also written to a daily rotated
/// file in the log directory.
///
/// The returned guard flushes the log file when dropped and must be held
/// until the program exits.
///
/// # Errors
/// Returns error if the log directory can't be created or a global
/// subscriber is already installed
pub fn init(config: &GeneralConfig) -> Result<Option<WorkerGuard>, Box<dyn Error>> {
    const DAYS_TO_KEEP: usize = 7;
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    let (file_layer, guard) = if config.log_to_file {
        let log_dir = ConfigPaths::log_dir()?;
        let file_appender = tracing_appender::rolling::Builder::new()
            .rotation(tracing_appender::rolling::Rotation::DAILY)
            .max_log_files(DAYS_TO_KEEP)
            .filename_prefix("mprisctl")
            .filename_suffix("log")
            .build(&log_dir)?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let layer = fmt::layer()
            .compact()
            .with_target(true)
            .with_level(true)
            .with_writer(non_blocking)
            .with_ansi(false);

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    let format = env::var("MPRISCTL_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    match format.as_str() {
        "json" => {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
        "pretty" => {
            registry
                .with(
                    fmt::layer()
                        .pretty()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
        _ => {
            registry
                .with(
                    fmt::layer()
                        .compact()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()?;
        }
    }

    Ok(guard)
}
