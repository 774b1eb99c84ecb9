//! Logging Infrastructure
//!
//! Structured logging setup. Console output always; a daily rolling file
//! when a log directory is configured.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(true);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if let Err(e) = std::fs::create_dir_all(log_path) {
            eprintln!("Failed to create log directory {dir}: {e}");
        } else if let Some(dir_str) = log_path.to_str() {
            let file_appender = tracing_appender::rolling::daily(dir_str, "pos-server");
            let builder = builder.with_writer(file_appender).with_ansi(false);
            if json {
                builder.json().init();
            } else {
                builder.init();
            }
            return;
        }
    }

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
