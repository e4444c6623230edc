//! File Manager Logging & Observability Module
//!
//! Provides structured file logging, old log cleanup, and crash reports.
//! Stdout belongs to the interactive session, so nothing here writes to it.

mod panic_hook;
mod logging;

pub use panic_hook::init_panic_hook;
pub use logging::{cleanup_logs_in, cleanup_old_logs, init_logging, init_logging_in};
pub use tracing_appender::non_blocking::WorkerGuard;

use std::path::{Path, PathBuf};
use directories::ProjectDirs;

/// Get the application log directory
pub fn log_dir() -> PathBuf {
    ProjectDirs::from("com", "FileManager", "FileManager")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialize all observability features.
///
/// Logging is best effort: when the log directory is unusable a warning goes
/// to stderr and the session runs without a log file. The returned guard
/// flushes buffered log lines when dropped; keep it alive until exit.
pub fn init() -> Option<WorkerGuard> {
    let guard = try_file_logging(&log_dir());
    init_panic_hook();
    guard
}

fn try_file_logging(dir: &Path) -> Option<WorkerGuard> {
    match init_logging_in(dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled ({}): {}", dir.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unusable_log_dir_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();

        assert!(try_file_logging(&blocker.join("logs")).is_none());
    }
}
