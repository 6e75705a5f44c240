//! Logging Setup
//!
//! Console output plus a daily rolling log file in the data directory.

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::{get_or_create_data_dir, is_development};
use crate::constants::LOG_FILE_PREFIX;

/// Install the global subscriber.
///
/// Keep the returned guard alive for the life of the process, dropping it
/// flushes and closes the log file.
pub fn init_tracing() -> Option<WorkerGuard> {
    let level = if is_development() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let (file_layer, guard) = match get_or_create_data_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_timer(fmt::time::LocalTime::rfc_3339())
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("File logging disabled: {e}");
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .init();

    guard
}
