//! Editable sections of the profile page
//!
//! Each section pairs a read-only display of one slice of the
//! [`AccountRecord`] with a validated edit form for it:
//! - `legal_information`: legal first and last name
//! - `preferences`: preferred name and pronouns
//!
//! A section never mutates the record. Submitting its form either yields a
//! complete replacement record (validated fields overlaid onto the unchanged
//! remainder) or a [`FieldErrors`] mapping that stays with the open form.

pub mod legal_information;
pub mod preferences;

pub use legal_information::{LegalInformation, LegalInformationDraft};
pub use preferences::{Preferences, PreferencesDraft, PRONOUN_CHOICES};

use profile_core::{AccountRecord, FieldErrors, ValidationLimits};

use crate::editing::SectionId;

/// One read-only label/value row of a section's display mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    pub label: &'static str,
    pub value: String,
}

impl DisplayField {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Input widget kind for a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input
    Text,
    /// Radio group over fixed options
    Choice(&'static [&'static str]),
}

/// A visible field of an open edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    /// Schema field name, also the key into [`FieldErrors`]
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
        }
    }

    pub const fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Choice(options),
        }
    }
}

/// Draft form value: the in-progress field values of an open section.
pub trait FormDraft {
    /// Currently visible fields, in tab order.
    fn fields(&self) -> Vec<FormField>;

    fn value(&self, field: &str) -> Option<&str>;

    /// Mutable access to a text field. `None` for choice or unknown fields.
    fn text_mut(&mut self, field: &str) -> Option<&mut String>;

    /// Move a choice field to its next/previous option. Returns `false` if
    /// `field` is not a choice field.
    fn cycle_choice(&mut self, field: &str, forward: bool) -> bool;
}

/// Contract shared by every editable section.
pub trait EditableSection {
    type Draft: FormDraft + Clone + PartialEq + std::fmt::Debug;

    const ID: SectionId;
    const TITLE: &'static str;

    fn display_fields(record: &AccountRecord) -> Vec<DisplayField>;

    /// Seed a fresh draft from the current record.
    ///
    /// Pure: called on every entry into edit mode so derived values are
    /// never carried over from an earlier session.
    fn seed(record: &AccountRecord) -> Self::Draft;

    fn validate(draft: &Self::Draft, limits: &ValidationLimits) -> FieldErrors;

    /// Build the full replacement record from a validated draft.
    fn overlay(draft: &Self::Draft, record: &AccountRecord) -> AccountRecord;

    fn submit(
        draft: &Self::Draft,
        record: &AccountRecord,
        limits: &ValidationLimits,
    ) -> Result<AccountRecord, FieldErrors> {
        let errors = Self::validate(draft, limits);
        if errors.is_empty() {
            Ok(Self::overlay(draft, record))
        } else {
            Err(errors)
        }
    }
}

pub fn title(id: SectionId) -> &'static str {
    match id {
        SectionId::LegalInformation => LegalInformation::TITLE,
        SectionId::Preferences => Preferences::TITLE,
    }
}

pub fn display_fields(id: SectionId, record: &AccountRecord) -> Vec<DisplayField> {
    match id {
        SectionId::LegalInformation => LegalInformation::display_fields(record),
        SectionId::Preferences => Preferences::display_fields(record),
    }
}

/// Validate a whole record against every section schema.
///
/// Used to vet records that did not come through a form (e.g. a configured
/// seed record).
pub fn validate_record(record: &AccountRecord, limits: &ValidationLimits) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for id in SectionId::ALL {
        let draft = SectionDraft::seed(id, record);
        for (field, message) in draft.validate(limits).iter() {
            errors.insert_first(field, message);
        }
    }
    errors
}

/// Draft of whichever section is open.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionDraft {
    LegalInformation(LegalInformationDraft),
    Preferences(PreferencesDraft),
}

impl SectionDraft {
    pub fn seed(id: SectionId, record: &AccountRecord) -> Self {
        match id {
            SectionId::LegalInformation => Self::LegalInformation(LegalInformation::seed(record)),
            SectionId::Preferences => Self::Preferences(Preferences::seed(record)),
        }
    }

    pub fn section(&self) -> SectionId {
        match self {
            Self::LegalInformation(_) => LegalInformation::ID,
            Self::Preferences(_) => Preferences::ID,
        }
    }

    pub fn validate(&self, limits: &ValidationLimits) -> FieldErrors {
        match self {
            Self::LegalInformation(draft) => LegalInformation::validate(draft, limits),
            Self::Preferences(draft) => Preferences::validate(draft, limits),
        }
    }

    pub fn submit(
        &self,
        record: &AccountRecord,
        limits: &ValidationLimits,
    ) -> Result<AccountRecord, FieldErrors> {
        match self {
            Self::LegalInformation(draft) => LegalInformation::submit(draft, record, limits),
            Self::Preferences(draft) => Preferences::submit(draft, record, limits),
        }
    }

    fn as_form(&self) -> &dyn FormDraft {
        match self {
            Self::LegalInformation(draft) => draft,
            Self::Preferences(draft) => draft,
        }
    }

    fn as_form_mut(&mut self) -> &mut dyn FormDraft {
        match self {
            Self::LegalInformation(draft) => draft,
            Self::Preferences(draft) => draft,
        }
    }
}

impl FormDraft for SectionDraft {
    fn fields(&self) -> Vec<FormField> {
        self.as_form().fields()
    }

    fn value(&self, field: &str) -> Option<&str> {
        self.as_form().value(field)
    }

    fn text_mut(&mut self, field: &str) -> Option<&mut String> {
        self.as_form_mut().text_mut(field)
    }

    fn cycle_choice(&mut self, field: &str, forward: bool) -> bool {
        self.as_form_mut().cycle_choice(field, forward)
    }
}

/// Focus target inside an open form: the visible fields, then the buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FormField),
    Save,
    Cancel,
}

/// Edit session of the open section: its draft, the errors of the last
/// failed submit, and keyboard focus.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionForm {
    pub draft: SectionDraft,
    pub errors: FieldErrors,
    focus_index: usize,
}

impl SectionForm {
    /// Open a form for `id`, seeded from `record`.
    pub fn open(id: SectionId, record: &AccountRecord) -> Self {
        Self {
            draft: SectionDraft::seed(id, record),
            errors: FieldErrors::new(),
            focus_index: 0,
        }
    }

    pub fn section(&self) -> SectionId {
        self.draft.section()
    }

    /// Number of focus stops: fields plus Save and Cancel.
    fn stop_count(&self) -> usize {
        self.draft.fields().len() + 2
    }

    pub fn focus(&self) -> FormFocus {
        let fields = self.draft.fields();
        let index = self.focus_index.min(fields.len() + 1);
        match fields.get(index) {
            Some(field) => FormFocus::Field(*field),
            None if index == fields.len() => FormFocus::Save,
            None => FormFocus::Cancel,
        }
    }

    pub fn focused_field(&self) -> Option<FormField> {
        match self.focus() {
            FormFocus::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn focus_next(&mut self) {
        let count = self.stop_count();
        self.focus_index = (self.focus_index.min(count - 1) + 1) % count;
    }

    pub fn focus_prev(&mut self) {
        let count = self.stop_count();
        let current = self.focus_index.min(count - 1);
        self.focus_index = if current == 0 { count - 1 } else { current - 1 };
    }

    /// Type a character into the focused text field.
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            if let Some(value) = self.draft.text_mut(field.name) {
                value.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            if let Some(value) = self.draft.text_mut(field.name) {
                value.pop();
            }
        }
    }

    pub fn clear_field(&mut self) {
        if let Some(field) = self.focused_field() {
            if let Some(value) = self.draft.text_mut(field.name) {
                value.clear();
            }
        }
    }

    /// Cycle the focused choice field.
    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(field) = self.focused_field() {
            self.draft.cycle_choice(field.name, forward);
        }
    }

    /// Validate the draft against `record`.
    ///
    /// On success returns the replacement record; on failure the form keeps
    /// the new error mapping and stays open.
    pub fn submit(
        &mut self,
        record: &AccountRecord,
        limits: &ValidationLimits,
    ) -> Option<AccountRecord> {
        match self.draft.submit(record, limits) {
            Ok(updated) => {
                self.errors.clear();
                Some(updated)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}
