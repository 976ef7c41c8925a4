//! Settings loader for config.toml

use super::types::Settings;
use crate::sections::validate_record;
use profile_core::prelude::*;
use profile_core::AccountRecord;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "profile-editor";

/// Environment variable naming an alternative config file
pub const CONFIG_ENV_VAR: &str = "PROFED_CONFIG";

/// Resolve which config file to read.
///
/// Priority:
/// 1. Explicit path (command line)
/// 2. `$PROFED_CONFIG`
/// 3. `<config dir>/profile-editor/config.toml`
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }

    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`.
///
/// Missing file means defaults. A file that cannot be read or parsed also
/// falls back to defaults, with a warning.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    let settings = match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!(
                    "{}; using defaults",
                    Error::config(format!("failed to parse {:?}: {}", config_path, e))
                );
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    };

    sanitize(settings)
}

/// Load settings the way the binary does.
///
/// An explicitly requested file must exist; implicit locations are optional.
pub fn load_settings_from(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
    }

    Ok(match resolve_config_path(explicit) {
        Some(path) => load_settings(&path),
        None => Settings::default(),
    })
}

/// Replace a configured seed record that would break the "always valid"
/// invariant of the page.
fn sanitize(mut settings: Settings) -> Settings {
    let errors = validate_record(&settings.account, &settings.validation);
    if !errors.is_empty() {
        warn!(
            "{}; using the built-in record",
            Error::invalid_record(errors.to_string())
        );
        settings.account = AccountRecord::default();
    }
    settings
}
