//! Signup form state and immutable field updates

use super::field::{FieldKind, FieldName};
use std::collections::HashSet;

/// A single change to the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Replace the value of a string field
    Text(FieldName, String),
    /// Set the international flag from a checkbox signal
    International(bool),
    /// Add (`included == true`) or remove an interest id
    Interest { id: String, included: bool },
}

/// Snapshot of everything the user has entered so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub re_password: String,
    pub degree_id: String,
    pub degree_level_id: String,
    pub international: bool,
    pub start_year: String,
    pub end_year: String,
    pub interest_ids: HashSet<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a string field, `None` for the flag and the interest set
    pub fn text(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::Username => &self.username,
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::RePassword => &self.re_password,
            FieldName::DegreeId => &self.degree_id,
            FieldName::DegreeLevelId => &self.degree_level_id,
            FieldName::StartYear => &self.start_year,
            FieldName::EndYear => &self.end_year,
            FieldName::International | FieldName::InterestIds => return None,
        };
        Some(value)
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        let value = match field {
            FieldName::Username => &mut self.username,
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::RePassword => &mut self.re_password,
            FieldName::DegreeId => &mut self.degree_id,
            FieldName::DegreeLevelId => &mut self.degree_level_id,
            FieldName::StartYear => &mut self.start_year,
            FieldName::EndYear => &mut self.end_year,
            FieldName::International | FieldName::InterestIds => return None,
        };
        Some(value)
    }

    pub fn has_interest(&self, id: &str) -> bool {
        self.interest_ids.contains(id)
    }

    /// Interest ids in a stable order
    pub fn sorted_interest_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.interest_ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Produce the snapshot that results from applying `update`.
    ///
    /// `self` is left untouched.
    pub fn apply(&self, update: FieldUpdate) -> FormState {
        let mut next = self.clone();
        match update {
            FieldUpdate::Text(field, value) => match next.text_mut(field) {
                Some(slot) => *slot = value,
                None => {
                    tracing::debug!("Ignoring text update for non-text field {}", field.key());
                }
            },
            FieldUpdate::International(checked) => next.international = checked,
            FieldUpdate::Interest { id, included } => {
                if included {
                    next.interest_ids.insert(id);
                } else {
                    next.interest_ids.remove(&id);
                }
            }
        }
        next
    }

    /// Flip membership of an interest id
    pub fn toggle_interest(&self, id: &str) -> FormState {
        self.apply(FieldUpdate::Interest {
            id: id.to_string(),
            included: !self.has_interest(id),
        })
    }

    /// Append a character to a string field
    pub fn push_char(&self, field: FieldName, c: char) -> FormState {
        match self.text(field) {
            Some(current) => {
                let mut value = current.to_string();
                value.push(c);
                self.apply(FieldUpdate::Text(field, value))
            }
            None => self.clone(),
        }
    }

    /// Remove the last character from a string field
    pub fn pop_char(&self, field: FieldName) -> FormState {
        match self.text(field) {
            Some(current) => {
                let mut value = current.to_string();
                value.pop();
                self.apply(FieldUpdate::Text(field, value))
            }
            None => self.clone(),
        }
    }
}

/// Which part of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Field(FieldName),
    SubmitButton,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(FieldName::ALL[0])
    }
}

impl FormFocus {
    fn index(&self) -> usize {
        match self {
            FormFocus::Field(field) => FieldName::ALL
                .iter()
                .position(|f| f == field)
                .unwrap_or_default(),
            FormFocus::SubmitButton => FieldName::ALL.len(),
        }
    }

    fn from_index(index: usize) -> Self {
        FieldName::ALL
            .get(index)
            .copied()
            .map(FormFocus::Field)
            .unwrap_or(FormFocus::SubmitButton)
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % (FieldName::ALL.len() + 1))
    }

    pub fn prev(&self) -> Self {
        let index = self.index();
        if index == 0 {
            FormFocus::SubmitButton
        } else {
            Self::from_index(index - 1)
        }
    }

    pub fn field(&self) -> Option<FieldName> {
        match self {
            FormFocus::Field(field) => Some(*field),
            FormFocus::SubmitButton => None,
        }
    }

    /// Whether typed characters go into the focused field
    pub fn accepts_text(&self) -> bool {
        self.field()
            .is_some_and(|f| matches!(f.kind(), FieldKind::Text | FieldKind::Secret))
    }
}
