//! Tracing subscriber initialization.
//!
//! While the text window is open it owns the terminal, so logs go to a file
//! (follow them with `tail -f`). Headless runs never open a window and log
//! to stderr instead.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file, creating its directory if needed.
    File(PathBuf),
    /// Write to stderr.
    Stderr,
}

impl LogTarget {
    /// File logging while a window may own the terminal, stderr otherwise.
    pub fn for_session(log_path: &Path, headless: bool) -> Self {
        if headless {
            LogTarget::Stderr
        } else {
            LogTarget::File(log_path.to_path_buf())
        }
    }
}

/// Install the global tracing subscriber for `target`.
///
/// Respects `RUST_LOG`, defaulting to `info`.
///
/// # Errors
///
/// Fails if the log directory cannot be created, the path has no file name,
/// or a subscriber was already installed.
pub fn init(target: &LogTarget) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    match target {
        LogTarget::File(path) => {
            let (directory, file_name) = prepare_log_file(path)?;
            let file_appender = tracing_appender::rolling::never(directory, file_name);
            builder
                .with_writer(file_appender)
                .with_ansi(false)
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
    }
    .map_err(|_| LoggingError::SubscriberAlreadySet)
}

/// Split `path` into directory and file name, creating the directory.
fn prepare_log_file(path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(path.to_path_buf()))?
        .to_string();

    // A bare file name logs into the working directory
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    Ok((directory, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    #[test]
    fn session_target_is_file_unless_headless() {
        let path = Path::new("/tmp/textwindow/textwindow.log");
        assert_eq!(
            LogTarget::for_session(path, false),
            LogTarget::File(path.to_path_buf())
        );
        assert_eq!(LogTarget::for_session(path, true), LogTarget::Stderr);
    }

    #[test]
    fn prepare_creates_missing_directory() {
        let test_dir = std::env::temp_dir().join("textwindow_test_logs_create");
        let _ = fs::remove_dir_all(&test_dir);

        let (directory, file_name) = prepare_log_file(&test_dir.join("test.log")).unwrap();

        assert_eq!(directory, test_dir);
        assert_eq!(file_name, "test.log");
        assert!(test_dir.exists(), "Log directory should be created: {:?}", test_dir);

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn prepare_accepts_existing_directory() {
        let test_dir = std::env::temp_dir().join("textwindow_test_logs_exists");
        fs::create_dir_all(&test_dir).unwrap();

        assert!(prepare_log_file(&test_dir.join("app.log")).is_ok());

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn prepare_uses_working_directory_for_bare_file_name() {
        let (directory, file_name) = prepare_log_file(Path::new("textwindow.log")).unwrap();
        assert_eq!(directory, PathBuf::from("."));
        assert_eq!(file_name, "textwindow.log");
    }

    #[test]
    fn prepare_rejects_path_without_file_name() {
        let err = prepare_log_file(Path::new("/")).unwrap_err();
        assert!(matches!(err, LoggingError::InvalidPath(_)));
    }

    #[test]
    #[serial(tracing_init)]
    fn second_init_reports_subscriber_already_set() {
        let test_dir = std::env::temp_dir().join("textwindow_test_logs_twice");
        let log_file = LogTarget::File(test_dir.join("twice.log"));

        // The first call may already fail if another test installed a subscriber
        let _ = init(&log_file);
        assert!(matches!(
            init(&log_file),
            Err(LoggingError::SubscriberAlreadySet)
        ));

        let _ = fs::remove_dir_all(&test_dir);
    }
}
