//! HTTP client for the registration service
//!
//! Talks JSON over reqwest to the `/api/*` endpoints.

use super::error::{ApiError, ApiResult};
use super::traits::RegistrationApi;
use super::wire::{interpret_signup_response, parse_options, RegisteredAccount, SignupRequest};
use crate::state::{OptionEntry, OptionKind};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Default service address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Path of each reference list endpoint
fn options_path(kind: OptionKind) -> &'static str {
    match kind {
        OptionKind::Degrees => "/api/degrees",
        OptionKind::DegreeLevels => "/api/degreelevels",
        OptionKind::Interests => "/api/interests",
    }
}

const SIGNUP_PATH: &str = "/api/signup";

/// Client for the registration service
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            timeout,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl RegistrationApi for ApiClient {
    async fn fetch_options(&self, kind: OptionKind) -> ApiResult<Vec<OptionEntry>> {
        let url = self.url(options_path(kind));
        tracing::debug!("Fetching {} from {url}", kind.label());

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_options(kind, &body)
    }

    async fn sign_up(&self, request: &SignupRequest) -> ApiResult<RegisteredAccount> {
        let url = self.url(SIGNUP_PATH);
        tracing::debug!("Submitting registration for {} to {url}", request.username);

        let response = self
            .client
            .post(&url)
            .json(request)
            .timeout(self.timeout)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        interpret_signup_response(status, &body)
    }
}
