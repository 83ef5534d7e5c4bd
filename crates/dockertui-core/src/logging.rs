//! Logging configuration using tracing
//!
//! The terminal is owned by the UI, so everything goes to a rolling file.

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Daily files are named `dockertui.log.YYYY-MM-DD`
const LOG_FILE_NAME: &str = "dockertui.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/docker-tui/logs/`
/// Log level is controlled by `DOCKERTUI_LOG` environment variable.
///
/// # Examples
/// ```bash
/// DOCKERTUI_LOG=debug dockertui
/// DOCKERTUI_LOG=dockertui_app=trace dockertui
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter = EnvFilter::try_from_env("DOCKERTUI_LOG")
        .unwrap_or_else(|_| EnvFilter::new("dockertui=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("docker-tui starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("docker-tui").join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_live_under_docker_tui() {
        assert!(get_log_directory().ends_with("docker-tui/logs"));
    }
}
