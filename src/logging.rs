//! File-based logging initialization

use std::fs;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// The terminal belongs to the UI, so logs go to a daily-rotated file in
/// `log_dir` through a non-blocking writer. `RUST_LOG` overrides
/// `default_level`. Keep the returned guard alive until exit or buffered
/// lines are lost.
pub fn init(log_dir: &Path, default_level: &str) -> Option<WorkerGuard> {
    if let Err(e) = fs::create_dir_all(log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(log_dir, "token-about.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("token_about=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    if tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .is_err()
    {
        // Already initialized (tests, embedding)
        return None;
    }

    tracing::info!(
        log_dir = %log_dir.display(),
        log_level = %default_level,
        version = env!("CARGO_PKG_VERSION"),
        "Logging initialized"
    );

    Some(guard)
}
