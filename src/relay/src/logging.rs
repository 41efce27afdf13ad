use crate::config::Config;
use crate::constants::{DEFAULT_LOG_FILTER, LOG_FILE_NAME};
use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, time::SystemTime},
    prelude::*,
    EnvFilter,
};

/// Installs the global subscriber: stdout always, plus `relay.log` under `log_dir` when set.
pub fn setup_logging(config: &Config) -> Result<()> {
    // RUST_LOG wins, otherwise info and up
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let stdout_layer = fmt::layer().with_target(true).with_level(true);

    let file_layer = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(LOG_FILE_NAME)
                .build(dir)
                .context("Failed to create log file appender")?;

            Some(
                fmt::layer()
                    .with_file(true)
                    .with_line_number(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(false)
                    .with_timer(SystemTime)
                    .with_writer(file_appender),
            )
        }
        None => None,
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    match &config.log_dir {
        Some(dir) => tracing::info!(
            "Logging system initialized. Writing to {}",
            dir.join(LOG_FILE_NAME).display()
        ),
        None => tracing::info!("Logging system initialized"),
    }

    Ok(())
}
