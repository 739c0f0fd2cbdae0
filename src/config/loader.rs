//! Configuration file loading with precedence handling.

use crate::platform::PlatformKind;
use crate::view::ViewerLayout;
use crate::view::constants::{FONT_SIZE, LINE_HEIGHT, MARGIN};
use clap::ValueEnum;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable whose presence marks a headless (CI) environment.
pub const HEADLESS_ENV_VAR: &str = "CI";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Offending field.
        field: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/textwindow/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Window title.
    #[serde(default)]
    pub title: Option<String>,

    /// Font size of the displayed text, in pixels.
    #[serde(default)]
    pub font_size: Option<f32>,

    /// Distance between lines, in pixels.
    #[serde(default)]
    pub line_height: Option<f32>,

    /// Window margin, in pixels.
    #[serde(default)]
    pub margin: Option<f32>,

    /// How long closing waits for the render thread, in milliseconds.
    #[serde(default)]
    pub join_timeout_ms: Option<u64>,

    /// Host kind ("pc" or "device").
    #[serde(default)]
    pub platform: Option<PlatformKind>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Window title.
    pub title: String,
    /// Font size.
    pub font_size: f32,
    /// Line height.
    pub line_height: f32,
    /// Margin.
    pub margin: f32,
    /// Join timeout in milliseconds.
    pub join_timeout_ms: u64,
    /// Host kind.
    pub platform: PlatformKind,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            title: "Text".to_string(),
            font_size: FONT_SIZE,
            line_height: LINE_HEIGHT,
            margin: MARGIN,
            join_timeout_ms: 2000,
            platform: PlatformKind::detect(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Layout with the configured dimensions.
    pub fn layout(&self) -> ViewerLayout {
        ViewerLayout {
            font_size: self.font_size,
            line_height: self.line_height,
            margin: self.margin,
            ..ViewerLayout::default()
        }
    }

    /// Deadline for the render thread to finish after close.
    pub fn join_timeout(&self) -> Duration {
        Duration::from_millis(self.join_timeout_ms)
    }

    /// Reject dimensions the layout cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("font_size", self.font_size),
            ("line_height", self.line_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "margin",
                reason: format!("must not be negative, got {}", self.margin),
            });
        }
        Ok(())
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/textwindow/textwindow.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("textwindow").join("textwindow.log")
    } else {
        PathBuf::from("textwindow.log")
    }
}

/// Whether the process runs headless (no window should be opened).
pub fn headless_from_env() -> bool {
    std::env::var_os(HEADLESS_ENV_VAR).is_some()
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/textwindow/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("textwindow").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `TEXTWINDOW_CONFIG` environment variable
/// 3. Default path `~/.config/textwindow/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("TEXTWINDOW_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TEXTWINDOW_PLATFORM`: Override host kind (`pc` or `device`)
///
/// Unrecognized values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(value) = std::env::var("TEXTWINDOW_PLATFORM") {
        match PlatformKind::from_str(&value, true) {
            Ok(platform) => config.platform = platform,
            Err(_) => warn!(value = %value, "Ignoring unknown TEXTWINDOW_PLATFORM"),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        title: config.title.unwrap_or(defaults.title),
        font_size: config.font_size.unwrap_or(defaults.font_size),
        line_height: config.line_height.unwrap_or(defaults.line_height),
        margin: config.margin.unwrap_or(defaults.margin),
        join_timeout_ms: config.join_timeout_ms.unwrap_or(defaults.join_timeout_ms),
        platform: config.platform.unwrap_or(defaults.platform),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    platform_override: Option<PlatformKind>,
) -> ResolvedConfig {
    if let Some(platform) = platform_override {
        config.platform = platform;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
