//! Field-validation schema layer
//!
//! A section describes each editable field as an ordered list of [`Rule`]s.
//! Checking a draft yields [`FieldErrors`]: a neutral `field -> message`
//! mapping with at most one message per field (the first rule violated).
//! How those messages are drawn is left entirely to the presentation layer.

use serde::{Deserialize, Serialize};

/// A single constraint on a string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Must contain at least one character.
    Required,
    /// Must contain at most this many characters (Unicode scalar values).
    MaxLength(usize),
}

impl Rule {
    /// Returns the violation message, or `None` if `value` satisfies the rule.
    pub fn check(&self, value: &str) -> Option<String> {
        match *self {
            Rule::Required if value.is_empty() => {
                Some("String must contain at least 1 character(s)".to_string())
            }
            Rule::MaxLength(max) if value.chars().count() > max => Some(format!(
                "String must contain at most {} character(s)",
                max
            )),
            _ => None,
        }
    }
}

/// Ordered rules for one named field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub field: &'static str,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.rules.push(Rule::Required);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.rules.push(Rule::MaxLength(max));
        self
    }

    /// First violated rule's message, if any.
    pub fn check(&self, value: &str) -> Option<String> {
        self.rules.iter().find_map(|rule| rule.check(value))
    }

    /// Check `value` and record a violation into `errors`.
    pub fn check_into(&self, value: &str, errors: &mut FieldErrors) {
        if let Some(message) = self.check(value) {
            errors.insert_first(self.field, message);
        }
    }
}

/// Neutral mapping of field name to its validation message.
///
/// Keeps insertion order so messages line up with the form's field order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless the field already has one.
    pub fn insert_first(&mut self, field: &'static str, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.entries.push((field, message.into()));
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(name, message)| (*name, message.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Error list shape expected by list-based input widgets:
    /// one message, or nothing.
    pub fn to_display_list(&self, field: &str) -> Vec<String> {
        self.get(field)
            .map(|message| vec![message.to_string()])
            .unwrap_or_default()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .entries
            .iter()
            .map(|(name, message)| format!("{}: {}", name, message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Length bounds applied by the section schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Maximum length of the legal first name
    #[serde(default = "default_max_len")]
    pub first_name_max_len: usize,

    /// Maximum length of the preferred name
    #[serde(default = "default_max_len")]
    pub preferred_name_max_len: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            first_name_max_len: default_max_len(),
            preferred_name_max_len: default_max_len(),
        }
    }
}

fn default_max_len() -> usize {
    10
}
