//! Configuration module.

mod loader;

pub use loader::{
    ConfigError, ConfigFile, HEADLESS_ENV_VAR, ResolvedConfig, apply_cli_overrides,
    apply_env_overrides, default_config_path, default_log_path, headless_from_env,
    load_config_file, load_config_with_precedence, merge_config,
};
