//! Registration service client module for HTTP/JSON communication

mod client;
mod error;
mod traits;
mod wire;

pub use client::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, ApiResult};
pub use traits::RegistrationApi;
pub use wire::{RegisteredAccount, SignupRequest};

#[cfg(test)]
pub use traits::MockRegistrationApi;
