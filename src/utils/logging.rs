// src/utils/logging.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::error::{PipelineError, Result};

/// File name of the debug log for one run of `binary`, stamped with the start time.
pub fn log_file_name(binary: &str) -> String {
    format!(
        "{}_{}.log",
        binary,
        chrono::Local::now().format("%Y%m%d%H%M%S")
    )
}

/// Installs the global subscriber: a console layer at info and above (or
/// `RUST_LOG`) plus a debug-level file layer under `log_dir`.
///
/// The returned guard flushes the file writer when dropped, so binaries keep
/// it alive until they exit.
pub fn init_logging(binary: &str, log_dir: &Path) -> Result<(WorkerGuard, PathBuf)> {
    fs::create_dir_all(log_dir)?;

    let file_name = log_file_name(binary);
    let stem = file_name.trim_end_matches(".log").to_string();
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(stem)
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| {
            PipelineError::ConfigError(format!(
                "Failed to create log file in '{}': {}",
                log_dir.display(),
                e
            ))
        })?;
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")); // Default to info if RUST_LOG is not set
    let console_layer = fmt::layer().with_target(false).with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| PipelineError::Unexpected(format!("Failed to install logger: {}", e)))?;

    Ok((guard, log_dir.join(file_name)))
}
