//! File logging
//!
//! The terminal belongs to the UI, so logs go to a file in the config
//! directory through a non-blocking writer.

use crate::config::Config;
use std::fs;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_NAME: &str = "floating-sheets.log";

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit or buffered lines are lost;
/// it must be dropped, not skipped by `process::exit`, for the tail of the
/// log to reach disk. Returns None, leaving logging disabled, when there
/// is nowhere to write.
pub fn init(config: &Config) -> Option<WorkerGuard> {
    let dir = Config::config_dir()?;
    let (subscriber, guard) = file_subscriber(&dir, filter(config))?;
    tracing::subscriber::set_global_default(subscriber).ok()?;
    Some(guard)
}

/// Subscriber writing to `LOG_FILE_NAME` inside `dir`
fn file_subscriber(
    dir: &Path,
    filter: EnvFilter,
) -> Option<(impl Subscriber + Send + Sync, WorkerGuard)> {
    fs::create_dir_all(dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    Some((subscriber, guard))
}

fn filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dropping_guard_flushes_last_line() {
        let dir = std::env::temp_dir().join(format!("floating-sheets-log-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);

        let (subscriber, guard) = file_subscriber(&dir, EnvFilter::new("info")).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!("event loop failed");
        });
        drop(guard);

        let contents = fs::read_to_string(dir.join(LOG_FILE_NAME)).unwrap();
        let _ = fs::remove_dir_all(&dir);
        assert!(contents.contains("event loop failed"));
        assert!(contents.contains("ERROR"));
    }
}
