//! Logging initialization.
//!
//! Console layer always; an additional daily-rotated file layer when
//! `logging.file` is configured. `RUST_LOG` wins over the configured level so
//! operators can tighten the filter without touching config.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::bootstrap::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// Returns the file writer guard when file logging is enabled; the caller must
/// keep it alive for the lifetime of the process or buffered lines are lost.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer().with_target(true);
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer);

    if let Some(file) = &config.file {
        let directory = file.parent().filter(|p| !p.as_os_str().is_empty());
        let file_name = file
            .file_name()
            .map_or_else(|| "calc-server.log".into(), ToOwned::to_owned);
        let appender =
            tracing_appender::rolling::daily(directory.unwrap_or(Path::new(".")), file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        registry
            .with(fmt::layer().with_ansi(false).with_writer(writer))
            .init();
        Some(guard)
    } else {
        registry.init();
        None
    }
}
