//! Tracing setup: console output plus a daily rolling log file.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_CONSOLE_FILTER: &str = "warn";
const DEFAULT_FILE_FILTER: &str = "info";

/// Initializes logging. The returned guard must be kept alive until exit so
/// buffered file output is flushed.
///
/// `RUST_LOG` overrides both filters. When the log directory cannot be
/// created, only console logging is installed.
pub fn init(logs_dir: Option<&Path>, verbose: bool) -> Option<WorkerGuard> {
    let console_default = if verbose { "debug" } else { DEFAULT_CONSOLE_FILTER };
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(console_default));
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);

    let file_writer = logs_dir.and_then(|dir| match std::fs::create_dir_all(dir) {
        Ok(()) => Some(tracing_appender::non_blocking(
            tracing_appender::rolling::daily(dir, "gatehouse.log"),
        )),
        Err(e) => {
            eprintln!("Failed to create log directory {:?}: {}", dir, e);
            None
        }
    });

    match file_writer {
        Some((writer, guard)) => {
            let file_filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILE_FILTER));
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(file_filter);

            tracing_subscriber::registry()
                .with(console_layer)
                .with(file_layer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(console_layer).init();
            None
        }
    }
}
