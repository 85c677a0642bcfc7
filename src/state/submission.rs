//! Submission state machine
//!
//! `Idle → Validating → Idle` (invalid) or `→ Submitting`, then
//! `Submitting → Navigated` on success or back to `Idle` on any failure.

use super::forms::FormState;
use super::validation::{validate, ErrorMap, ValidationPolicy};
use crate::api::{ApiError, ApiResult, RegisteredAccount, SignupRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Navigated,
}

/// What to do after a submit trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A previous submission is still waiting for its response
    AlreadyInFlight,
    /// The account was already created; nothing left to submit
    AlreadyRegistered,
    /// Client validation failed; errors are now displayed
    Invalid,
    /// Send this request
    Transmit(SignupRequest),
}

/// How a finished request was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Registered(RegisteredAccount),
    /// Server-side field errors replaced the displayed ones
    Rejected,
    /// No field information; message is for the operator
    Failed(String),
}

/// Drives one form's submissions and guards against double sends
#[derive(Debug, Clone, Default)]
pub struct SubmissionController {
    phase: SubmissionPhase,
}

impl SubmissionController {
    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    fn transition(&mut self, to: SubmissionPhase) {
        tracing::debug!("Submission {:?} -> {:?}", self.phase, to);
        self.phase = to;
    }

    /// Handle a submit trigger. `errors` is replaced by the validation result.
    pub fn begin(
        &mut self,
        form: &FormState,
        policy: &ValidationPolicy,
        errors: &mut ErrorMap,
    ) -> SubmitDecision {
        match self.phase {
            SubmissionPhase::Submitting => {
                tracing::debug!("Submit ignored: request already in flight");
                return SubmitDecision::AlreadyInFlight;
            }
            SubmissionPhase::Navigated => return SubmitDecision::AlreadyRegistered,
            SubmissionPhase::Idle | SubmissionPhase::Validating => {}
        }

        self.transition(SubmissionPhase::Validating);
        *errors = validate(form, policy);

        if !errors.is_empty() {
            tracing::debug!("Validation failed on {} field(s)", errors.len());
            self.transition(SubmissionPhase::Idle);
            return SubmitDecision::Invalid;
        }

        self.transition(SubmissionPhase::Submitting);
        SubmitDecision::Transmit(SignupRequest::from(form))
    }

    /// Apply the response of the in-flight request
    pub fn resolve(
        &mut self,
        result: ApiResult<RegisteredAccount>,
        errors: &mut ErrorMap,
    ) -> Resolution {
        if !self.is_in_flight() {
            tracing::warn!("Signup response arrived with no submission in flight");
        }

        match result {
            Ok(account) => {
                tracing::info!(
                    "Registration accepted (user id: {})",
                    account.user_id.as_deref().unwrap_or("none")
                );
                self.transition(SubmissionPhase::Navigated);
                Resolution::Registered(account)
            }
            Err(ApiError::Rejected(server_errors)) => {
                tracing::info!("Registration rejected on {} field(s)", server_errors.len());
                *errors = server_errors;
                self.transition(SubmissionPhase::Idle);
                Resolution::Rejected
            }
            Err(err) => {
                tracing::error!("There was an error signing up: {err}");
                self.transition(SubmissionPhase::Idle);
                Resolution::Failed(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldName, FieldUpdate, EMPTY_FIELD};
    use pretty_assertions::assert_eq;

    fn valid_form() -> FormState {
        [
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
        ]
        .into_iter()
        .fold(FormState::new(), |form, (field, value)| {
            form.apply(FieldUpdate::Text(field, value.to_string()))
        })
    }

    fn taken() -> ErrorMap {
        [("username", "taken")].into_iter().collect()
    }

    #[test]
    fn test_invalid_form_returns_to_idle() {
        let mut controller = SubmissionController::default();
        let mut errors = ErrorMap::new();
        let decision = controller.begin(&FormState::new(), &ValidationPolicy::default(), &mut errors);
        assert_eq!(decision, SubmitDecision::Invalid);
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
        assert_eq!(errors.get("firstName"), Some(EMPTY_FIELD));
    }

    #[test]
    fn test_valid_form_transmits_and_clears_errors() {
        let mut controller = SubmissionController::default();
        let mut errors = taken();
        let form = valid_form();
        let decision = controller.begin(&form, &ValidationPolicy::default(), &mut errors);
        assert_eq!(decision, SubmitDecision::Transmit(SignupRequest::from(&form)));
        assert!(errors.is_empty());
        assert!(controller.is_in_flight());
    }

    #[test]
    fn test_second_submit_while_in_flight() {
        let mut controller = SubmissionController::default();
        let mut errors = ErrorMap::new();
        let form = valid_form();
        controller.begin(&form, &ValidationPolicy::default(), &mut errors);
        let again = controller.begin(&form, &ValidationPolicy::default(), &mut errors);
        assert_eq!(again, SubmitDecision::AlreadyInFlight);
    }

    #[test]
    fn test_success_navigates() {
        let mut controller = SubmissionController::default();
        let mut errors = ErrorMap::new();
        controller.begin(&valid_form(), &ValidationPolicy::default(), &mut errors);
        let account = RegisteredAccount {
            user_id: Some("7".into()),
        };
        let resolution = controller.resolve(Ok(account.clone()), &mut errors);
        assert_eq!(resolution, Resolution::Registered(account));
        assert_eq!(controller.phase(), SubmissionPhase::Navigated);
        assert_eq!(
            controller.begin(&valid_form(), &ValidationPolicy::default(), &mut errors),
            SubmitDecision::AlreadyRegistered
        );
    }

    #[test]
    fn test_server_rejection_replaces_errors() {
        let mut controller = SubmissionController::default();
        let mut errors = ErrorMap::new();
        controller.begin(&valid_form(), &ValidationPolicy::default(), &mut errors);
        errors.insert("email", "stale client message");

        let resolution = controller.resolve(Err(ApiError::Rejected(taken())), &mut errors);
        assert_eq!(resolution, Resolution::Rejected);
        assert_eq!(errors, taken());
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_transport_failure_keeps_errors() {
        let mut controller = SubmissionController::default();
        let mut errors = ErrorMap::new();
        controller.begin(&valid_form(), &ValidationPolicy::default(), &mut errors);
        errors.insert("general", "kept");

        let resolution = controller.resolve(
            Err(ApiError::Network("connection refused".into())),
            &mut errors,
        );
        assert!(matches!(resolution, Resolution::Failed(_)));
        assert_eq!(errors.get("general"), Some("kept"));
        assert_eq!(controller.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn test_can_resubmit_after_failure() {
        let mut controller = SubmissionController::default();
        let mut errors = ErrorMap::new();
        controller.begin(&valid_form(), &ValidationPolicy::default(), &mut errors);
        controller.resolve(
            Err(ApiError::Status {
                status: 503,
                body: String::new(),
            }),
            &mut errors,
        );
        let decision = controller.begin(&valid_form(), &ValidationPolicy::default(), &mut errors);
        assert!(matches!(decision, SubmitDecision::Transmit(_)));
    }
}
