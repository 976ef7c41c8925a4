//! Page controller: owns the account record and the editing-state machine
//!
//! The open [`SectionForm`] is the single source of truth for which section
//! is being edited, so "at most one section in edit mode" holds by
//! construction. Every transition is a single `&mut self` call: observers
//! see either the old record with a form open or the new record with nothing
//! open, never a mix.

use profile_core::prelude::*;
use profile_core::{AccountRecord, ValidationLimits};

use crate::editing::{EditingState, SectionId, SectionView};
use crate::sections::SectionForm;

#[derive(Debug, Clone, PartialEq)]
pub struct PageController {
    record: AccountRecord,
    form: Option<SectionForm>,
    limits: ValidationLimits,
}

impl PageController {
    pub fn new(record: AccountRecord, limits: ValidationLimits) -> Self {
        Self {
            record,
            form: None,
            limits,
        }
    }

    pub fn record(&self) -> &AccountRecord {
        &self.record
    }

    pub fn editing(&self) -> EditingState {
        match &self.form {
            Some(form) => EditingState::Editing(form.section()),
            None => EditingState::NoSectionEditing,
        }
    }

    pub fn view_for(&self, section: SectionId) -> SectionView {
        self.editing().view_for(section)
    }

    /// The open section's form, if any.
    pub fn form(&self) -> Option<&SectionForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut SectionForm> {
        self.form.as_mut()
    }

    /// Open `section` for editing, pre-empting any other open section.
    ///
    /// The draft is always re-seeded from the current record, even when
    /// `section` was already open.
    pub fn begin_edit(&mut self, section: SectionId) {
        if let Some(previous) = self.editing().editing_section() {
            if previous != section {
                debug!("Discarding draft of '{}' to edit '{}'", previous, section);
            }
        }
        self.form = Some(SectionForm::open(section, &self.record));
        debug!("Editing section '{}'", section);
    }

    /// Close the open section, discarding its draft. The record is untouched.
    pub fn cancel_edit(&mut self) {
        match self.form.take() {
            Some(form) => debug!("Cancelled editing '{}'", form.section()),
            None => debug!("Cancel requested with no section open"),
        }
    }

    /// Replace the record and return to no-section-editing in one step.
    pub fn commit_update(&mut self, record: AccountRecord) {
        match self.form.take() {
            Some(form) => info!("Committed update from '{}'", form.section()),
            None => warn!("Commit received with no section open; applying record anyway"),
        }
        self.record = record;
    }

    /// Validate the open form and commit it on success.
    ///
    /// Returns the committed record. On validation failure the errors stay on
    /// the form, the form stays open and `None` is returned.
    pub fn submit(&mut self) -> Option<&AccountRecord> {
        let form = self.form.as_mut()?;
        let section = form.section();
        match form.submit(&self.record, &self.limits) {
            Some(updated) => {
                self.commit_update(updated);
                Some(&self.record)
            }
            None => {
                debug!("Validation failed for '{}': {}", section, form.errors);
                None
            }
        }
    }
}

impl Default for PageController {
    fn default() -> Self {
        Self::new(AccountRecord::default(), ValidationLimits::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::FormDraft;

    #[test]
    fn test_starts_with_nothing_editing() {
        let controller = PageController::default();
        assert_eq!(controller.editing(), EditingState::NoSectionEditing);
        assert!(controller.form().is_none());
    }

    #[test]
    fn test_begin_then_cancel_leaves_record_unchanged() {
        for id in SectionId::ALL {
            let mut controller = PageController::default();
            let before = controller.record().clone();

            controller.begin_edit(id);
            if let Some(form) = controller.form_mut() {
                form.clear_field();
                form.input_char('Z');
            }
            controller.cancel_edit();

            assert_eq!(controller.record(), &before);
            assert_eq!(controller.editing(), EditingState::NoSectionEditing);
        }
    }

    #[test]
    fn test_most_recent_begin_edit_wins() {
        let mut controller = PageController::default();
        controller.begin_edit(SectionId::LegalInformation);
        controller.begin_edit(SectionId::Preferences);

        assert_eq!(
            controller.editing(),
            EditingState::Editing(SectionId::Preferences)
        );
        assert_eq!(
            controller.view_for(SectionId::LegalInformation),
            SectionView::OtherSectionEditing
        );
        assert_eq!(
            controller.view_for(SectionId::Preferences),
            SectionView::ThisSectionEditing
        );
    }

    #[test]
    fn test_begin_edit_reseeds_draft() {
        let mut controller = PageController::default();
        controller.begin_edit(SectionId::Preferences);
        if let Some(form) = controller.form_mut() {
            form.clear_field();
        }
        controller.begin_edit(SectionId::Preferences);
        let form = controller.form().unwrap();
        assert_eq!(form.draft.value("preferredName"), Some("Tom"));
    }

    #[test]
    fn test_submit_unchanged_round_trips() {
        for id in SectionId::ALL {
            let mut controller = PageController::default();
            let before = controller.record().clone();
            controller.begin_edit(id);
            assert_eq!(controller.submit(), Some(&before));
            assert_eq!(controller.editing(), EditingState::NoSectionEditing);
        }
    }

    #[test]
    fn test_failed_submit_keeps_form_open_and_record() {
        let mut controller = PageController::default();
        let before = controller.record().clone();
        controller.begin_edit(SectionId::LegalInformation);
        controller.form_mut().unwrap().clear_field();

        assert!(controller.submit().is_none());
        assert_eq!(controller.record(), &before);
        assert_eq!(
            controller.editing(),
            EditingState::Editing(SectionId::LegalInformation)
        );
        assert!(controller
            .form()
            .unwrap()
            .errors
            .contains("legalFirstName"));
    }

    #[test]
    fn test_cancel_after_failed_submit() {
        let mut controller = PageController::default();
        controller.begin_edit(SectionId::LegalInformation);
        controller.form_mut().unwrap().clear_field();
        assert!(controller.submit().is_none());

        controller.cancel_edit();
        assert_eq!(controller.editing(), EditingState::NoSectionEditing);
        assert_eq!(controller.record(), &AccountRecord::default());
    }

    #[test]
    fn test_commit_update_closes_form() {
        let mut controller = PageController::default();
        controller.begin_edit(SectionId::Preferences);
        let updated = AccountRecord::new("Thomas", "Pretty", "Tommy", "They/Them");
        controller.commit_update(updated.clone());
        assert_eq!(controller.record(), &updated);
        assert_eq!(controller.editing(), EditingState::NoSectionEditing);
    }

    #[test]
    fn test_submit_without_open_form() {
        let mut controller = PageController::default();
        assert!(controller.submit().is_none());
    }
}
