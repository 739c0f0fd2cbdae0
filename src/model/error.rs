//! Error types for the text window.
//!
//! Errors use `thiserror` and compose through `From` so the binary can bubble
//! everything up with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - [`ShellError`] - Terminal/window I/O failures
//!   - [`SessionError`] - Background render thread could not be started
//!   - `std::io::Error` - Reading the text to display
//!
//! # Recovery Behavior
//!
//! Only startup failures are surfaced as errors. Once the viewer is running,
//! failures are logged instead of raised: a shell error ends the render loop
//! (the window is still torn down), a failed reboot is logged and the window
//! stays up, and a worker that misses its join deadline is reported with a
//! warning.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Top-level error for the `textwindow` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// The terminal shell could not be created.
    #[error("Shell error: {0}")]
    Shell(#[from] ShellError),

    /// The viewer session could not be started.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// The text to display could not be read.
    #[error("Failed to read input: {0}")]
    Input(#[from] io::Error),
}

/// Failures raised by an application shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Failures starting a viewer session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The OS refused to spawn the render thread.
    #[error("Failed to spawn text window thread: {0}")]
    Spawn(#[source] io::Error),
}

/// Failures from host platform control.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The reboot command could not be started.
    #[error("Failed to run reboot command `{command}`: {source}")]
    RebootSpawn {
        /// Program that was invoked.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The reboot command ran but reported failure.
    #[error("Reboot command `{command}` exited with {status}")]
    RebootFailed {
        /// Program that was invoked.
        command: String,
        /// Exit status reported by the command.
        status: ExitStatus,
    },
}
