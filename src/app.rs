//! Application state and core logic

use crate::api::RegistrationApi;
use crate::config::TuiConfig;
use crate::events::{self, AppEvent, EventReceiver, EventSender};
use crate::loader::spawn_option_loads;
use crate::state::{
    cycle_option, AppState, CycleDirection, FieldKind, FieldName, FieldUpdate, FormFocus,
    Resolution, SubmitDecision, ValidationPolicy, View, YearOptions,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Shown when a submission fails without field-level feedback
pub const SIGNUP_FAILED_MESSAGE: &str =
    "Sign up failed: the registration service could not be reached. Please try again.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Registration service client
    api: Arc<dyn RegistrationApi>,
    /// Structural validation settings
    policy: ValidationPolicy,
    events_tx: EventSender,
    events_rx: EventReceiver,
    /// Whether the app should quit
    quit: bool,
    /// Transient status bar message
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Self {
        let api = Arc::new(config.api_client());
        tracing::info!("Using registration service at {}", api.base_url());
        Self::with_api(api, config.validation_policy(), YearOptions::current())
    }

    /// Create an App around any registration service implementation
    pub fn with_api(
        api: Arc<dyn RegistrationApi>,
        policy: ValidationPolicy,
        years: YearOptions,
    ) -> Self {
        let (events_tx, events_rx) = events::channel();
        Self {
            state: AppState::new(years),
            api,
            policy,
            events_tx,
            events_rx,
            quit: false,
            status_message: None,
        }
    }

    /// Start fetching the reference lists
    pub fn load_options(&self) -> Vec<JoinHandle<()>> {
        spawn_option_loads(Arc::clone(&self.api), self.events_tx.clone())
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply every background result that has arrived so far
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply a single background result
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::OptionsLoaded { kind, result } => match result {
                Ok(entries) => {
                    tracing::debug!("Loaded {} {}", entries.len(), kind.label());
                    self.state.reference.populate(kind, entries);
                }
                Err(_) => self.state.reference.mark_failed(kind),
            },
            AppEvent::SignupFinished(result) => {
                let resolution = self
                    .state
                    .submission
                    .resolve(result, &mut self.state.errors);
                self.apply_resolution(resolution);
            }
        }
    }

    fn apply_resolution(&mut self, resolution: Resolution) {
        tracing::debug!("Submission settled in {:?}", self.state.submission.phase());
        match resolution {
            Resolution::Registered(account) => {
                self.state.registered = Some(account);
                self.state.current_view = View::Profile;
                self.status_message = Some("Registration complete".to_string());
            }
            Resolution::Rejected => {
                self.focus_first_error();
                self.status_message = Some("The service rejected some fields".to_string());
            }
            Resolution::Failed(detail) => {
                tracing::debug!("Showing signup failure dialog for: {detail}");
                self.status_message = None;
                self.state.push_error(SIGNUP_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Apply a field update, replacing the form snapshot
    pub fn update(&mut self, update: FieldUpdate) {
        self.state.form = self.state.form.apply(update);
    }

    /// Validate and, if clean, send the form
    pub fn submit(&mut self) {
        let decision =
            self.state
                .submission
                .begin(&self.state.form, &self.policy, &mut self.state.errors);

        match decision {
            SubmitDecision::Transmit(request) => {
                self.status_message = Some("Submitting...".to_string());
                let api = Arc::clone(&self.api);
                let tx = self.events_tx.clone();
                tokio::spawn(async move {
                    let result = api.sign_up(&request).await;
                    if tx.send(AppEvent::SignupFinished(result)).is_err() {
                        tracing::debug!("Dropping signup result: app has shut down");
                    }
                });
            }
            SubmitDecision::Invalid => {
                self.focus_first_error();
                self.status_message = Some(format!(
                    "Please fix {} field(s)",
                    self.state.errors.len()
                ));
            }
            SubmitDecision::AlreadyInFlight => {
                self.status_message = Some("Still submitting...".to_string());
            }
            SubmitDecision::AlreadyRegistered => {}
        }
    }

    fn focus_first_error(&mut self) {
        if let Some(field) = FieldName::ALL
            .into_iter()
            .find(|f| self.state.errors.for_field(*f).is_some())
        {
            self.state.focus = FormFocus::Field(field);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.current_view {
            View::Signup => self.handle_signup_key(key),
            View::Profile => self.handle_profile_key(key),
        }
    }

    /// Handle keys in the Signup view
    fn handle_signup_key(&mut self, key: KeyEvent) {
        // Submit shortcut works from any field and is consumed here
        if key.code == KeyCode::Char('s')
            && (key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER))
        {
            self.submit();
            return;
        }

        let focus = self.state.focus;
        match key.code {
            KeyCode::Tab => self.state.focus = focus.next(),
            KeyCode::BackTab => self.state.focus = focus.prev(),
            _ => match focus {
                FormFocus::SubmitButton => match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') => self.submit(),
                    KeyCode::Up => self.state.focus = focus.prev(),
                    KeyCode::Down => self.state.focus = focus.next(),
                    _ => {}
                },
                FormFocus::Field(field) => self.handle_field_key(field, key),
            },
        }
    }

    fn handle_field_key(&mut self, field: FieldName, key: KeyEvent) {
        let focus = self.state.focus;
        match field.kind() {
            FieldKind::Text | FieldKind::Secret => match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.state.form = self.state.form.push_char(field, c)
                }
                KeyCode::Backspace => self.state.form = self.state.form.pop_char(field),
                KeyCode::Enter | KeyCode::Down => self.state.focus = focus.next(),
                KeyCode::Up => self.state.focus = focus.prev(),
                _ => {}
            },
            FieldKind::Select(_) => match key.code {
                KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                    self.cycle_select(field, CycleDirection::Forward)
                }
                KeyCode::Left => self.cycle_select(field, CycleDirection::Backward),
                KeyCode::Backspace => self.update(FieldUpdate::Text(field, String::new())),
                KeyCode::Down => self.state.focus = focus.next(),
                KeyCode::Up => self.state.focus = focus.prev(),
                _ => {}
            },
            FieldKind::Toggle => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                    let checked = !self.state.form.international;
                    self.update(FieldUpdate::International(checked));
                }
                KeyCode::Down => self.state.focus = focus.next(),
                KeyCode::Up => self.state.focus = focus.prev(),
                _ => {}
            },
            FieldKind::MultiSelect(_) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    if let Some(id) = self.state.interest_under_cursor().map(str::to_string) {
                        self.state.form = self.state.form.toggle_interest(&id);
                    }
                }
                KeyCode::Down => self.state.move_interest_cursor_down(),
                KeyCode::Up => self.state.move_interest_cursor_up(),
                _ => {}
            },
        }
    }

    fn cycle_select(&mut self, field: FieldName, direction: CycleDirection) {
        let current = self.state.form.text(field).unwrap_or_default();
        if let Some(id) = cycle_option(self.state.options(field), current, direction) {
            self.update(FieldUpdate::Text(field, id));
        }
    }

    /// Handle keys in the Profile view
    fn handle_profile_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter) {
            self.quit = true;
        }
    }
}
