//! Client-side validation of the signup form

use super::forms::{FieldName, FormState};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const EMPTY_FIELD: &str = "Field cannot be empty";
pub const INVALID_EMAIL: &str = "Email address is invalid";
pub const PASSWORD_MISMATCH: &str = "Passwords must match";

/// Minimum password length when nothing else is configured
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid hardcoded regex"));

/// Field key → message. Client and server errors share this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn for_field(&self, field: FieldName) -> Option<&str> {
        self.get(field.key())
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.insert(key.into(), message.into());
    }

    /// Record `message` unless the field already has an error
    fn insert_if_absent(&mut self, field: FieldName, message: impl Into<String>) {
        self.0
            .entry(field.key().to_string())
            .or_insert_with(|| message.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Messages keyed by something the form does not display
    pub fn unattached(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(k, _)| FieldName::from_key(k).is_none())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Tunables for the structural checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub min_password_length: usize,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

pub fn password_too_short(min: usize) -> String {
    format!("Password must be {min} characters or more")
}

/// Validate a complete form snapshot. An empty map means the form is valid.
///
/// Required checks run first over every string field. Structural checks
/// always run afterwards but never replace a required-field message.
pub fn validate(form: &FormState, policy: &ValidationPolicy) -> ErrorMap {
    let mut errors = ErrorMap::new();

    for field in FieldName::ALL.into_iter().filter(|f| f.kind().is_string()) {
        if form.text(field).unwrap_or_default().trim().is_empty() {
            errors.insert(field.key(), EMPTY_FIELD);
        }
    }

    if !EMAIL_RE.is_match(&form.email) {
        errors.insert_if_absent(FieldName::Email, INVALID_EMAIL);
    }
    if form.password.chars().count() < policy.min_password_length {
        errors.insert_if_absent(
            FieldName::Password,
            password_too_short(policy.min_password_length),
        );
    }
    if form.password != form.re_password {
        errors.insert_if_absent(FieldName::RePassword, PASSWORD_MISMATCH);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldUpdate;
    use pretty_assertions::assert_eq;

    fn valid_form() -> FormState {
        let fields = [
            (FieldName::Username, "ada"),
            (FieldName::FirstName, "Ada"),
            (FieldName::LastName, "Lovelace"),
            (FieldName::Email, "ada@uni.edu"),
            (FieldName::Password, "analytical"),
            (FieldName::RePassword, "analytical"),
            (FieldName::DegreeId, "4"),
            (FieldName::DegreeLevelId, "1"),
            (FieldName::StartYear, "2020"),
            (FieldName::EndYear, "2024"),
        ];
        fields.into_iter().fold(FormState::new(), |form, (field, value)| {
            form.apply(FieldUpdate::Text(field, value.to_string()))
        })
    }

    fn with(form: &FormState, field: FieldName, value: &str) -> FormState {
        form.apply(FieldUpdate::Text(field, value.to_string()))
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form(), &ValidationPolicy::default()).is_empty());
    }

    #[test]
    fn test_empty_form_flags_every_string_field_once() {
        let errors = validate(&FormState::new(), &ValidationPolicy::default());
        let expected: ErrorMap = FieldName::ALL
            .into_iter()
            .filter(|f| f.kind().is_string())
            .map(|f| (f.key(), EMPTY_FIELD))
            .collect();
        assert_eq!(errors, expected);
    }

    #[test]
    fn test_flag_and_interest_set_are_never_required() {
        let form = valid_form().apply(FieldUpdate::International(false));
        let errors = validate(&form, &ValidationPolicy::default());
        assert!(errors.get("international").is_none());
        assert!(errors.get("interestIds").is_none());
        assert!(form.interest_ids.is_empty());
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let form = with(&valid_form(), FieldName::FirstName, "   \t");
        let errors = validate(&form, &ValidationPolicy::default());
        assert_eq!(errors.get("firstName"), Some(EMPTY_FIELD));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_international_and_interests_are_optional() {
        let form = valid_form();
        assert!(!form.international);
        assert!(form.interest_ids.is_empty());
        assert!(validate(&form, &ValidationPolicy::default()).is_empty());
    }

    #[test]
    fn test_invalid_email() {
        let form = with(&valid_form(), FieldName::Email, "not-an-email");
        let errors = validate(&form, &ValidationPolicy::default());
        assert_eq!(errors.for_field(FieldName::Email), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_structural_checks_run_alongside_required_errors() {
        let form = with(&valid_form(), FieldName::Email, "not-an-email");
        let form = with(&form, FieldName::LastName, "");
        let errors = validate(&form, &ValidationPolicy::default());
        assert_eq!(errors.get("lastName"), Some(EMPTY_FIELD));
        assert_eq!(errors.get("email"), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_required_message_wins_over_structural() {
        let form = with(&valid_form(), FieldName::Email, " ");
        let errors = validate(&form, &ValidationPolicy::default());
        assert_eq!(errors.get("email"), Some(EMPTY_FIELD));
    }

    #[test]
    fn test_password_mismatch_flags_confirmation() {
        let form = with(&valid_form(), FieldName::RePassword, "analyticaL");
        let errors = validate(&form, &ValidationPolicy::default());
        assert_eq!(errors.get("rePassword"), Some(PASSWORD_MISMATCH));
        assert_eq!(errors.get("password"), None);
    }

    #[test]
    fn test_short_password_uses_policy() {
        let form = with(&valid_form(), FieldName::Password, "sevenxx");
        let form = with(&form, FieldName::RePassword, "sevenxx");

        let errors = validate(&form, &ValidationPolicy::default());
        assert_eq!(
            errors.get("password"),
            Some("Password must be 8 characters or more")
        );

        let lenient = ValidationPolicy {
            min_password_length: 6,
        };
        assert!(validate(&form, &lenient).is_empty());
    }

    #[test]
    fn test_validate_does_not_touch_input() {
        let form = with(&valid_form(), FieldName::Email, "nope");
        let snapshot = form.clone();
        let _ = validate(&form, &ValidationPolicy::default());
        assert_eq!(form, snapshot);
    }

    #[test]
    fn test_error_map_deserializes_from_object() {
        let map: ErrorMap = serde_json::from_str(r#"{"username":"taken"}"#).unwrap();
        assert_eq!(map.get("username"), Some("taken"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_unattached_errors() {
        let map: ErrorMap = [("username", "taken"), ("general", "try later")]
            .into_iter()
            .collect();
        let unattached: Vec<_> = map.unattached().collect();
        assert_eq!(unattached, vec![("general", "try later")]);
    }
}
