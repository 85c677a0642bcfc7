//! Application state definitions

use super::forms::{FieldKind, FieldName, FormFocus, FormState};
use super::reference::{options_for, OptionEntry, ReferenceData, YearOptions};
use super::submission::SubmissionController;
use super::validation::ErrorMap;
use crate::api::RegisteredAccount;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Signup,
    /// Post-registration user information
    Profile,
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,

    // Form
    pub form: FormState,
    pub focus: FormFocus,
    pub errors: ErrorMap,
    /// Highlighted row in the interests list
    pub interest_cursor: usize,

    // Reference data
    pub reference: ReferenceData,
    pub years: YearOptions,

    // Submission
    pub submission: SubmissionController,
    pub registered: Option<RegisteredAccount>,

    // Messages
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(years: YearOptions) -> Self {
        Self {
            form: FormState::new(),
            years,
            ..Default::default()
        }
    }

    /// Options currently offered by a select or multi-select field
    pub fn options(&self, field: FieldName) -> &[OptionEntry] {
        match field.kind() {
            FieldKind::Select(source) | FieldKind::MultiSelect(source) => {
                options_for(source, &self.reference, &self.years)
            }
            _ => &[],
        }
    }

    /// Display name for the value of a select field
    pub fn selected_name(&self, field: FieldName) -> Option<&str> {
        let id = self.form.text(field)?;
        self.options(field)
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.name.as_str())
    }

    /// Interest names in list order
    pub fn selected_interest_names(&self) -> Vec<&str> {
        self.options(FieldName::InterestIds)
            .iter()
            .filter(|e| self.form.has_interest(&e.id))
            .map(|e| e.name.as_str())
            .collect()
    }

    pub fn move_interest_cursor_down(&mut self) {
        let max = self.options(FieldName::InterestIds).len();
        if max > 0 && self.interest_cursor < max - 1 {
            self.interest_cursor += 1;
        }
    }

    pub fn move_interest_cursor_up(&mut self) {
        if self.interest_cursor > 0 {
            self.interest_cursor -= 1;
        }
    }

    /// Id under the interests cursor, if the list has loaded
    pub fn interest_under_cursor(&self) -> Option<&str> {
        self.options(FieldName::InterestIds)
            .get(self.interest_cursor)
            .map(|e| e.id.as_str())
    }

    /// Queue a message for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldUpdate, OptionKind};

    fn state_with_interests() -> AppState {
        let mut state = AppState::new(YearOptions::for_year(2025));
        state.reference.populate(
            OptionKind::Interests,
            vec![
                OptionEntry::new("1", "AI"),
                OptionEntry::new("2", "Music"),
                OptionEntry::new("3", "Sports"),
            ],
        );
        state
    }

    #[test]
    fn test_default_view_is_signup() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::Signup);
    }

    #[test]
    fn test_year_options_feed_selects() {
        let state = AppState::new(YearOptions::for_year(2025));
        assert_eq!(state.options(FieldName::StartYear).len(), 11);
        assert_eq!(state.options(FieldName::EndYear)[0].id, "2025");
        assert!(state.options(FieldName::Email).is_empty());
    }

    #[test]
    fn test_selected_name_resolves_by_id() {
        let mut state = AppState::new(YearOptions::for_year(2025));
        state.reference.populate(
            OptionKind::Degrees,
            vec![OptionEntry::new("4", "Computer Science")],
        );
        state.form = state
            .form
            .apply(FieldUpdate::Text(FieldName::DegreeId, "4".into()));
        assert_eq!(state.selected_name(FieldName::DegreeId), Some("Computer Science"));
        assert_eq!(state.selected_name(FieldName::DegreeLevelId), None);
    }

    #[test]
    fn test_interest_cursor_bounds() {
        let mut state = state_with_interests();
        state.move_interest_cursor_up();
        assert_eq!(state.interest_cursor, 0);
        for _ in 0..5 {
            state.move_interest_cursor_down();
        }
        assert_eq!(state.interest_cursor, 2);
        assert_eq!(state.interest_under_cursor(), Some("3"));
    }

    #[test]
    fn test_interest_cursor_without_list() {
        let mut state = AppState::default();
        state.move_interest_cursor_down();
        assert_eq!(state.interest_cursor, 0);
        assert_eq!(state.interest_under_cursor(), None);
    }

    #[test]
    fn test_selected_interest_names_follow_list_order() {
        let mut state = state_with_interests();
        state.form = state.form.toggle_interest("3").toggle_interest("1");
        assert_eq!(state.selected_interest_names(), vec!["AI", "Sports"]);
    }

    #[test]
    fn test_error_queue() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first".into());
        state.push_error("second".into());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }
}
