//! Mock login API.
//!
//! Client-side (csr): a real HTTP GET via `gloo-net` to one of two canned
//! endpoints. Host builds have no transport and answer `ApiError::Unavailable`.
//!
//! DESIGN
//! ======
//! The success/error branch is picked by an injected `OutcomeChooser`, so
//! tests force either path. Credentials are never sent; the coin flip stands
//! in for real credential checking.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status, and decode failures surface as `ApiError`. The form
//! turns every error into a failed `ApiResult` for display.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ApiResult, User};
use crate::config::LoginConfig;

/// Which canned endpoint a login attempt hits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

/// Strategy picking the outcome of the next login attempt.
pub trait OutcomeChooser {
    fn choose(&self) -> Outcome;
}

/// Uniform coin flip between `Success` and `Error`.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomChooser;

impl OutcomeChooser for RandomChooser {
    fn choose(&self) -> Outcome {
        if coin_flip() { Outcome::Success } else { Outcome::Error }
    }
}

#[cfg(target_arch = "wasm32")]
fn coin_flip() -> bool {
    js_sys::Math::random() >= 0.5
}

#[cfg(not(target_arch = "wasm32"))]
fn coin_flip() -> bool {
    rand::random::<bool>()
}

/// Always picks the same outcome.
#[derive(Clone, Copy, Debug)]
pub struct FixedChooser(pub Outcome);

impl OutcomeChooser for FixedChooser {
    fn choose(&self) -> Outcome {
        self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("login request failed: {status}")]
    Status { status: u16, body: Option<ApiResult<User>> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("login API not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Convert into the failed result shown by the form.
    ///
    /// A status error whose body decoded as an envelope is shown as that
    /// body; anything else becomes a synthetic failure carrying the error
    /// text.
    pub fn into_result(self) -> ApiResult<User> {
        let message = self.to_string();
        match self {
            Self::Status { body: Some(mut body), .. } => {
                body.success = false;
                if body.errors.is_none() {
                    body.errors = Some(message);
                }
                body
            }
            _ => ApiResult::failure(message),
        }
    }
}

/// A remote login call.
#[allow(async_fn_in_trait)]
pub trait LoginApi {
    /// Perform one login attempt.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails, the server answers with a
    /// non-OK status, or the body does not decode.
    async fn attempt_login(&self) -> Result<ApiResult<User>, ApiError>;
}

/// Login API backed by two canned endpoints.
#[derive(Clone, Debug)]
pub struct MockApi<C = RandomChooser> {
    success_url: String,
    error_url: String,
    chooser: C,
}

impl MockApi<RandomChooser> {
    pub fn new(config: &LoginConfig) -> Self {
        Self::with_chooser(config, RandomChooser)
    }
}

impl<C> MockApi<C> {
    pub fn with_chooser(config: &LoginConfig, chooser: C) -> Self {
        Self {
            success_url: config.success_url.clone(),
            error_url: config.error_url.clone(),
            chooser,
        }
    }

    /// URL of the canned endpoint for `outcome`.
    pub fn endpoint(&self, outcome: Outcome) -> &str {
        match outcome {
            Outcome::Success => &self.success_url,
            Outcome::Error => &self.error_url,
        }
    }
}

impl<C: OutcomeChooser> MockApi<C> {
    /// Pick the endpoint for the next attempt.
    pub fn choose_endpoint(&self) -> (Outcome, &str) {
        let outcome = self.chooser.choose();
        (outcome, self.endpoint(outcome))
    }
}

impl<C: OutcomeChooser> LoginApi for MockApi<C> {
    async fn attempt_login(&self) -> Result<ApiResult<User>, ApiError> {
        let (outcome, url) = self.choose_endpoint();
        log::debug!("login attempt: outcome={outcome:?} url={url}");
        fetch_api_result(url).await
    }
}

#[cfg(feature = "csr")]
async fn fetch_api_result(url: &str) -> Result<ApiResult<User>, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        let body = resp.json::<ApiResult<User>>().await.ok();
        return Err(ApiError::Status {
            status: resp.status(),
            body,
        });
    }
    resp.json::<ApiResult<User>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
async fn fetch_api_result(url: &str) -> Result<ApiResult<User>, ApiError> {
    let _ = url;
    Err(ApiError::Unavailable)
}
