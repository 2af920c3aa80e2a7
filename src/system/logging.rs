//! Logging system initialization
//!
//! Sets up the global `tracing` subscriber from the `[logging]` section.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use crate::config::LoggingConfig;

const DEFAULT_LOG_FILE_NAME: &str = "shortlink.log";

/// Initialize logging system based on configuration
///
/// The returned `WorkerGuard` must be kept alive for the duration of the
/// program so buffered log lines are flushed on exit.
///
/// A log file that cannot be opened falls back to stdout with a message on
/// stderr instead of aborting startup.
pub fn init_logging(config: &LoggingConfig) -> WorkerGuard {
    let log_file = config.file.as_deref().filter(|f| !f.is_empty());

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file {
        Some(log_file) => match open_log_writer(log_file, config) {
            Ok(writer) => writer,
            Err(e) => {
                eprintln!(
                    "[ERROR] Failed to open log file '{}': {}, logging to stdout",
                    log_file, e
                );
                Box::new(std::io::stdout())
            }
        },
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level).unwrap_or_else(|e| {
        eprintln!(
            "[ERROR] Invalid log level '{}': {}, using 'info'",
            config.level, e
        );
        tracing_subscriber::EnvFilter::new("info")
    });

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    // 测试或重复初始化时全局 subscriber 可能已存在
    let result = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("[WARN] Logging already initialized: {}", e);
    }

    guard
}

fn open_log_writer(
    log_file: &str,
    config: &LoggingConfig,
) -> std::io::Result<Box<dyn std::io::Write + Send + Sync>> {
    let path = Path::new(log_file);

    if config.enable_rotation {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let filename = path
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(DEFAULT_LOG_FILE_NAME);

        let appender = rolling::Builder::new()
            .rotation(rolling::Rotation::DAILY)
            .filename_prefix(filename.trim_end_matches(".log"))
            .filename_suffix("log")
            .max_log_files(config.max_backups.max(1) as usize)
            .build(dir)
            .map_err(std::io::Error::other)?;
        Ok(Box::new(appender))
    } else {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Box::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_plain_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let config = LoggingConfig {
            enable_rotation: false,
            ..LoggingConfig::default()
        };

        let writer = open_log_writer(path.to_str().unwrap(), &config);
        assert!(writer.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_open_rotating_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        let config = LoggingConfig::default();

        assert!(open_log_writer(path.to_str().unwrap(), &config).is_ok());
    }
}
