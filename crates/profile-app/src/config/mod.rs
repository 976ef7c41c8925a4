//! Configuration file parsing for the profile editor
//!
//! Supports a single TOML file, located via `--config`, `$PROFED_CONFIG`,
//! or the platform config directory.

pub mod settings;
pub mod types;

pub use settings::{load_settings, load_settings_from, resolve_config_path, CONFIG_ENV_VAR};
pub use types::*;
