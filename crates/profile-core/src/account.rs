//! The account record shown and edited on the profile page

use serde::{Deserialize, Serialize};

/// Pronoun options offered by the preferences selector.
pub const STANDARD_PRONOUNS: [&str; 3] = ["He/Him", "She/Her", "They/Them"];

/// Selector value meaning "use the custom pronouns text instead".
pub const OTHER_PRONOUNS: &str = "Other";

/// Returns `true` if `pronouns` is one of [`STANDARD_PRONOUNS`].
pub fn is_standard_pronoun(pronouns: &str) -> bool {
    STANDARD_PRONOUNS.contains(&pronouns)
}

/// User profile data.
///
/// Immutable by replacement: edits produce a new record that the page
/// controller swaps in wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountRecord {
    pub legal_first_name: String,
    pub legal_last_name: String,
    pub preferred_name: String,
    pub pronouns: String,
}

impl AccountRecord {
    pub fn new(
        legal_first_name: impl Into<String>,
        legal_last_name: impl Into<String>,
        preferred_name: impl Into<String>,
        pronouns: impl Into<String>,
    ) -> Self {
        Self {
            legal_first_name: legal_first_name.into(),
            legal_last_name: legal_last_name.into(),
            preferred_name: preferred_name.into(),
            pronouns: pronouns.into(),
        }
    }

    /// Whether the stored pronouns fall outside the standard set.
    pub fn has_custom_pronouns(&self) -> bool {
        !is_standard_pronoun(&self.pronouns)
    }
}

impl Default for AccountRecord {
    fn default() -> Self {
        Self::new("Thomas", "Pretty", "Tom", "He/Him")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_fully_populated() {
        let record = AccountRecord::default();
        assert_eq!(record.legal_first_name, "Thomas");
        assert_eq!(record.legal_last_name, "Pretty");
        assert_eq!(record.preferred_name, "Tom");
        assert_eq!(record.pronouns, "He/Him");
    }

    #[test]
    fn test_standard_pronouns() {
        assert!(is_standard_pronoun("She/Her"));
        assert!(is_standard_pronoun("They/Them"));
        assert!(!is_standard_pronoun("Xyz/Xyz"));
        // The sentinel itself is not a stored value
        assert!(!is_standard_pronoun(OTHER_PRONOUNS));
    }

    #[test]
    fn test_has_custom_pronouns() {
        let mut record = AccountRecord::default();
        assert!(!record.has_custom_pronouns());
        record.pronouns = "Ze/Zir".into();
        assert!(record.has_custom_pronouns());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(AccountRecord::default()).unwrap();
        assert_eq!(json["legalFirstName"], "Thomas");
        assert_eq!(json["preferredName"], "Tom");
        assert!(json.get("legal_first_name").is_none());
    }

    #[test]
    fn test_partial_record_fills_from_default() {
        let record: AccountRecord =
            serde_json::from_str(r#"{"preferredName":"Tam"}"#).unwrap();
        assert_eq!(record.preferred_name, "Tam");
        assert_eq!(record.legal_first_name, "Thomas");
    }
}
