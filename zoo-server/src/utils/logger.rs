//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::server::config::LogFormat;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "zoo_server=info,tower_http=info";

/// Initialize the logger with optional JSON output and optional file output.
///
/// File output is only enabled when `log_dir` exists; logs roll daily.
pub fn init_logger(format: LogFormat, log_dir: Option<&str>) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let file_appender = log_dir
        .map(Path::new)
        .filter(|dir| dir.is_dir())
        .map(|dir| tracing_appender::rolling::daily(dir, "zoo-server"));

    match (format, file_appender) {
        (LogFormat::Json, Some(appender)) => subscriber.json().with_writer(appender).init(),
        (LogFormat::Json, None) => subscriber.json().init(),
        (LogFormat::Pretty, Some(appender)) => {
            subscriber.with_ansi(false).with_writer(appender).init()
        }
        (LogFormat::Pretty, None) => subscriber.init(),
    }
}
