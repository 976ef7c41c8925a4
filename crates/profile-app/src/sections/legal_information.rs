//! Legal information section: legal first and last name

use profile_core::{AccountRecord, FieldErrors, FieldRules, ValidationLimits};

use super::{DisplayField, EditableSection, FormDraft, FormField};
use crate::editing::SectionId;

pub const LEGAL_FIRST_NAME: &str = "legalFirstName";
pub const LEGAL_LAST_NAME: &str = "legalLastName";

const FIELDS: [FormField; 2] = [
    FormField::text(LEGAL_FIRST_NAME, "Legal first name"),
    FormField::text(LEGAL_LAST_NAME, "Legal last name"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegalInformationDraft {
    pub legal_first_name: String,
    pub legal_last_name: String,
}

impl FormDraft for LegalInformationDraft {
    fn fields(&self) -> Vec<FormField> {
        FIELDS.to_vec()
    }

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            LEGAL_FIRST_NAME => Some(&self.legal_first_name),
            LEGAL_LAST_NAME => Some(&self.legal_last_name),
            _ => None,
        }
    }

    fn text_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            LEGAL_FIRST_NAME => Some(&mut self.legal_first_name),
            LEGAL_LAST_NAME => Some(&mut self.legal_last_name),
            _ => None,
        }
    }

    fn cycle_choice(&mut self, _field: &str, _forward: bool) -> bool {
        false
    }
}

/// Section marker for the legal name fields.
pub struct LegalInformation;

impl EditableSection for LegalInformation {
    type Draft = LegalInformationDraft;

    const ID: SectionId = SectionId::LegalInformation;
    const TITLE: &'static str = "Legal information";

    fn display_fields(record: &AccountRecord) -> Vec<DisplayField> {
        vec![
            DisplayField::new("Legal first name", &record.legal_first_name),
            DisplayField::new("Legal last name", &record.legal_last_name),
        ]
    }

    fn seed(record: &AccountRecord) -> LegalInformationDraft {
        LegalInformationDraft {
            legal_first_name: record.legal_first_name.clone(),
            legal_last_name: record.legal_last_name.clone(),
        }
    }

    fn validate(draft: &LegalInformationDraft, limits: &ValidationLimits) -> FieldErrors {
        let mut errors = FieldErrors::new();
        FieldRules::new(LEGAL_FIRST_NAME)
            .required()
            .max_length(limits.first_name_max_len)
            .check_into(&draft.legal_first_name, &mut errors);
        FieldRules::new(LEGAL_LAST_NAME)
            .required()
            .check_into(&draft.legal_last_name, &mut errors);
        errors
    }

    fn overlay(draft: &LegalInformationDraft, record: &AccountRecord) -> AccountRecord {
        AccountRecord {
            legal_first_name: draft.legal_first_name.clone(),
            legal_last_name: draft.legal_last_name.clone(),
            ..record.clone()
        }
    }
}
