//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use crate::config::Settings;
use crate::controller::PageController;
use crate::editing::{EditingState, SectionId};
use crate::location::Location;

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Account record and editing-state machine
    pub controller: PageController,

    /// Navigable state mirrored from the editing state
    pub location: Location,

    pub settings: Settings,

    /// Section card with keyboard focus while browsing
    pub focused_section: SectionId,

    /// When the record was last replaced by a successful save
    pub last_saved: Option<DateTime<Local>>,

    should_quit: bool,
}

impl AppState {
    /// Create state with default settings at the default location
    pub fn new() -> Self {
        Self::with_settings(Settings::default(), Location::default())
    }

    pub fn with_settings(settings: Settings, location: Location) -> Self {
        let controller =
            PageController::new(settings.account.clone(), settings.validation);
        Self {
            controller,
            location,
            settings,
            focused_section: SectionId::LegalInformation,
            last_saved: None,
            should_quit: false,
        }
    }

    pub fn editing(&self) -> EditingState {
        self.controller.editing()
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn focus_next_section(&mut self) {
        self.focused_section = self.focused_section.next();
    }

    pub fn focus_previous_section(&mut self) {
        self.focused_section = self.focused_section.prev();
    }

    pub fn mark_saved(&mut self) {
        self.last_saved = Some(Local::now());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_core::AccountRecord;

    #[test]
    fn test_new_state_is_browsing() {
        let state = AppState::new();
        assert_eq!(state.editing(), EditingState::NoSectionEditing);
        assert_eq!(state.focused_section, SectionId::LegalInformation);
        assert!(state.last_saved.is_none());
        assert!(!state.should_quit());
    }

    #[test]
    fn test_controller_seeded_from_settings() {
        let mut settings = Settings::default();
        settings.account = AccountRecord::new("Ada", "Lovelace", "Ada", "She/Her");
        let state = AppState::with_settings(settings, Location::default());
        assert_eq!(state.controller.record().legal_first_name, "Ada");
    }

    #[test]
    fn test_section_focus_wraps() {
        let mut state = AppState::new();
        state.focus_next_section();
        assert_eq!(state.focused_section, SectionId::Preferences);
        state.focus_next_section();
        assert_eq!(state.focused_section, SectionId::LegalInformation);
        state.focus_previous_section();
        assert_eq!(state.focused_section, SectionId::Preferences);
    }
}
