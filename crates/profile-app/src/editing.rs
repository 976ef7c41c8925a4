//! Editing state: which section, if any, is open for edits

use std::fmt;

/// Stable identifier of an editable section.
///
/// The string key is what gets mirrored into the location's query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    LegalInformation,
    Preferences,
}

impl SectionId {
    /// Fixed registry order, top to bottom on the page.
    pub const ALL: [SectionId; 2] = [SectionId::LegalInformation, SectionId::Preferences];

    pub fn key(&self) -> &'static str {
        match self {
            SectionId::LegalInformation => "legal-information",
            SectionId::Preferences => "preferences",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    /// Position in [`SectionId::ALL`]
    pub fn index(&self) -> usize {
        match self {
            SectionId::LegalInformation => 0,
            SectionId::Preferences => 1,
        }
    }

    pub fn next(self) -> Self {
        match self {
            SectionId::LegalInformation => SectionId::Preferences,
            SectionId::Preferences => SectionId::LegalInformation,
        }
    }

    pub fn prev(self) -> Self {
        // Two sections: previous and next coincide
        self.next()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Global editing state owned by the page controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingState {
    #[default]
    NoSectionEditing,
    Editing(SectionId),
}

impl EditingState {
    /// Derive the three-way view a single section renders from.
    pub fn view_for(&self, section: SectionId) -> SectionView {
        match self {
            EditingState::NoSectionEditing => SectionView::NoSectionEditing,
            EditingState::Editing(id) if *id == section => SectionView::ThisSectionEditing,
            EditingState::Editing(_) => SectionView::OtherSectionEditing,
        }
    }

    pub fn editing_section(&self) -> Option<SectionId> {
        match self {
            EditingState::NoSectionEditing => None,
            EditingState::Editing(id) => Some(*id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditingState::Editing(_))
    }
}

/// A section's local view of the global [`EditingState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionView {
    /// Show the edit form
    ThisSectionEditing,
    /// Read-only, Edit action suppressed
    OtherSectionEditing,
    /// Read-only with Edit action
    NoSectionEditing,
}

impl SectionView {
    pub fn is_form(&self) -> bool {
        matches!(self, SectionView::ThisSectionEditing)
    }

    pub fn shows_edit_action(&self) -> bool {
        matches!(self, SectionView::NoSectionEditing)
    }
}
