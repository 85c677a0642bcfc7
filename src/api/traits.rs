//! Trait abstraction for the registration service to enable mocking in tests

use super::error::ApiResult;
use super::wire::{RegisteredAccount, SignupRequest};
use crate::state::{OptionEntry, OptionKind};
use async_trait::async_trait;

/// Operations the signup form needs from the remote service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Fetch one of the reference lists
    async fn fetch_options(&self, kind: OptionKind) -> ApiResult<Vec<OptionEntry>>;

    /// Submit a registration
    async fn sign_up(&self, request: &SignupRequest) -> ApiResult<RegisteredAccount>;
}
