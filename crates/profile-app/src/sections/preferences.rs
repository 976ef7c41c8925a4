//! Preferences section: preferred name and pronouns
//!
//! Pronouns are edited through a selector over the standard set plus an
//! "Other" choice. Picking "Other" reveals a free-text field whose value
//! becomes the stored pronouns.

use profile_core::{
    AccountRecord, FieldErrors, FieldRules, ValidationLimits, OTHER_PRONOUNS, STANDARD_PRONOUNS,
};

use super::{DisplayField, EditableSection, FormDraft, FormField};
use crate::editing::SectionId;

pub const PREFERRED_NAME: &str = "preferredName";
pub const PRONOUNS: &str = "pronouns";
pub const CUSTOM_PRONOUNS: &str = "customPronouns";

/// Selector options: the standard set followed by the "Other" sentinel.
pub const PRONOUN_CHOICES: [&str; 4] = [
    STANDARD_PRONOUNS[0],
    STANDARD_PRONOUNS[1],
    STANDARD_PRONOUNS[2],
    OTHER_PRONOUNS,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferencesDraft {
    pub preferred_name: String,
    /// Selector value: a standard option or [`OTHER_PRONOUNS`]
    pub pronouns: String,
    pub custom_pronouns: String,
}

impl PreferencesDraft {
    pub fn is_other_selected(&self) -> bool {
        self.pronouns == OTHER_PRONOUNS
    }

    /// The value that would be stored on commit.
    pub fn effective_pronouns(&self) -> &str {
        if self.is_other_selected() {
            &self.custom_pronouns
        } else {
            &self.pronouns
        }
    }
}

impl FormDraft for PreferencesDraft {
    fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![
            FormField::text(PREFERRED_NAME, "Preferred name"),
            FormField::choice(PRONOUNS, "Pronouns", &PRONOUN_CHOICES),
        ];
        if self.is_other_selected() {
            fields.push(FormField::text(CUSTOM_PRONOUNS, "Custom pronouns"));
        }
        fields
    }

    fn value(&self, field: &str) -> Option<&str> {
        match field {
            PREFERRED_NAME => Some(&self.preferred_name),
            PRONOUNS => Some(&self.pronouns),
            CUSTOM_PRONOUNS => Some(&self.custom_pronouns),
            _ => None,
        }
    }

    fn text_mut(&mut self, field: &str) -> Option<&mut String> {
        match field {
            PREFERRED_NAME => Some(&mut self.preferred_name),
            CUSTOM_PRONOUNS if self.is_other_selected() => Some(&mut self.custom_pronouns),
            _ => None,
        }
    }

    fn cycle_choice(&mut self, field: &str, forward: bool) -> bool {
        if field != PRONOUNS {
            return false;
        }
        let len = PRONOUN_CHOICES.len();
        let next = match PRONOUN_CHOICES.iter().position(|c| *c == self.pronouns) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.pronouns = PRONOUN_CHOICES[next].to_string();
        true
    }
}

/// Section marker for the preference fields.
pub struct Preferences;

impl EditableSection for Preferences {
    type Draft = PreferencesDraft;

    const ID: SectionId = SectionId::Preferences;
    const TITLE: &'static str = "Preferences";

    fn display_fields(record: &AccountRecord) -> Vec<DisplayField> {
        vec![
            DisplayField::new("Preferred name", &record.preferred_name),
            DisplayField::new("Pronouns", &record.pronouns),
        ]
    }

    fn seed(record: &AccountRecord) -> PreferencesDraft {
        let custom = record.has_custom_pronouns();
        PreferencesDraft {
            preferred_name: record.preferred_name.clone(),
            pronouns: if custom {
                OTHER_PRONOUNS.to_string()
            } else {
                record.pronouns.clone()
            },
            custom_pronouns: if custom {
                record.pronouns.clone()
            } else {
                String::new()
            },
        }
    }

    fn validate(draft: &PreferencesDraft, limits: &ValidationLimits) -> FieldErrors {
        let mut errors = FieldErrors::new();
        FieldRules::new(PREFERRED_NAME)
            .required()
            .max_length(limits.preferred_name_max_len)
            .check_into(&draft.preferred_name, &mut errors);
        FieldRules::new(PRONOUNS)
            .required()
            .check_into(&draft.pronouns, &mut errors);
        // Custom text is only consulted when "Other" is selected
        if draft.is_other_selected() {
            FieldRules::new(CUSTOM_PRONOUNS)
                .required()
                .check_into(&draft.custom_pronouns, &mut errors);
        }
        errors
    }

    fn overlay(draft: &PreferencesDraft, record: &AccountRecord) -> AccountRecord {
        AccountRecord {
            preferred_name: draft.preferred_name.clone(),
            pronouns: draft.effective_pronouns().to_string(),
            ..record.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> ValidationLimits {
        ValidationLimits::default()
    }

    fn record_with_pronouns(pronouns: &str) -> AccountRecord {
        AccountRecord {
            pronouns: pronouns.to_string(),
            ..AccountRecord::default()
        }
    }

    #[test]
    fn test_seed_standard_pronouns() {
        let draft = Preferences::seed(&record_with_pronouns("They/Them"));
        assert_eq!(draft.pronouns, "They/Them");
        assert_eq!(draft.custom_pronouns, "");
        assert!(!draft.is_other_selected());
    }

    #[test]
    fn test_seed_custom_pronouns_selects_other() {
        let draft = Preferences::seed(&record_with_pronouns("Xyz/Xyz"));
        assert_eq!(draft.pronouns, "Other");
        assert_eq!(draft.custom_pronouns, "Xyz/Xyz");
    }

    #[test]
    fn test_standard_selection_ignores_custom_text() {
        let record = record_with_pronouns("Xyz/Xyz");
        let mut draft = Preferences::seed(&record);
        draft.pronouns = "She/Her".to_string();
        let updated = Preferences::submit(&draft, &record, &limits()).unwrap();
        assert_eq!(updated.pronouns, "She/Her");
    }

    #[test]
    fn test_other_selection_commits_custom_text() {
        let record = AccountRecord::default();
        let mut draft = Preferences::seed(&record);
        draft.pronouns = "Other".to_string();
        draft.custom_pronouns = "Ze/Zir".to_string();
        let updated = Preferences::submit(&draft, &record, &limits()).unwrap();
        assert_eq!(updated.pronouns, "Ze/Zir");
    }

    #[test]
    fn test_other_with_empty_custom_text_fails() {
        let record = AccountRecord::default();
        let mut draft = Preferences::seed(&record);
        draft.pronouns = "Other".to_string();
        let errors = Preferences::submit(&draft, &record, &limits()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(CUSTOM_PRONOUNS));
    }

    #[test]
    fn test_preferred_name_rules() {
        let record = AccountRecord::default();
        let mut draft = Preferences::seed(&record);

        draft.preferred_name = String::new();
        let errors = Preferences::validate(&draft, &limits());
        assert_eq!(
            errors.get(PREFERRED_NAME),
            Some("String must contain at least 1 character(s)")
        );

        draft.preferred_name = "Tommy Boy 2".to_string();
        let errors = Preferences::validate(&draft, &limits());
        assert_eq!(
            errors.get(PREFERRED_NAME),
            Some("String must contain at most 10 character(s)")
        );
    }

    #[test]
    fn test_unchanged_custom_draft_round_trips() {
        let record = record_with_pronouns("Xyz/Xyz");
        let draft = Preferences::seed(&record);
        assert_eq!(Preferences::submit(&draft, &record, &limits()), Ok(record));
    }

    #[test]
    fn test_custom_field_visible_only_for_other() {
        let mut draft = Preferences::seed(&AccountRecord::default());
        assert_eq!(draft.fields().len(), 2);
        assert!(draft.text_mut(CUSTOM_PRONOUNS).is_none());

        draft.pronouns = OTHER_PRONOUNS.to_string();
        let names: Vec<_> = draft.fields().iter().map(|f| f.name).collect();
        assert_eq!(names, vec![PREFERRED_NAME, PRONOUNS, CUSTOM_PRONOUNS]);
        assert!(draft.text_mut(CUSTOM_PRONOUNS).is_some());
    }

    #[test]
    fn test_cycle_choice_wraps_both_ways() {
        let mut draft = Preferences::seed(&AccountRecord::default());
        assert_eq!(draft.pronouns, "He/Him");

        assert!(draft.cycle_choice(PRONOUNS, false));
        assert_eq!(draft.pronouns, "Other");
        assert!(draft.cycle_choice(PRONOUNS, true));
        assert_eq!(draft.pronouns, "He/Him");
        assert!(draft.cycle_choice(PRONOUNS, true));
        assert_eq!(draft.pronouns, "She/Her");

        assert!(!draft.cycle_choice(PREFERRED_NAME, true));
    }

    #[test]
    fn test_overlay_keeps_legal_names() {
        let record = AccountRecord::default();
        let mut draft = Preferences::seed(&record);
        draft.preferred_name = "Thom".to_string();
        let updated = Preferences::overlay(&draft, &record);
        assert_eq!(updated.legal_first_name, "Thomas");
        assert_eq!(updated.legal_last_name, "Pretty");
        assert_eq!(updated.preferred_name, "Thom");
    }
}
