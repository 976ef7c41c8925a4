//! Configuration types for the profile editor
//!
//! Defines:
//! - `Settings` - Top-level application settings
//! - `UiSettings` - Presentation options
//! - `EditActionMode` - How the Edit action looks while another section is open

use profile_core::{AccountRecord, ValidationLimits};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// Record shown when the page opens
    #[serde(default)]
    pub account: AccountRecord,

    #[serde(default)]
    pub validation: ValidationLimits,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Presentation of a section's Edit action while a different section is
/// being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EditActionMode {
    /// Not drawn at all
    #[default]
    Hidden,
    /// Drawn dimmed and inert
    Disabled,
}

impl std::fmt::Display for EditActionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditActionMode::Hidden => write!(f, "hidden"),
            EditActionMode::Disabled => write!(f, "disabled"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub edit_action_when_other_editing: EditActionMode,

    /// Show the page location (with its query string) in the header
    #[serde(default = "default_true")]
    pub show_location: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            edit_action_when_other_editing: EditActionMode::default(),
            show_location: true,
        }
    }
}

fn default_true() -> bool {
    true
}
