//! HTTP client for the remote account API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each bounded by an
//! abort timeout. Server-side (SSR) and native builds: the calls fail with a
//! config error since the API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Status handling lives in the pure `classify_*` functions so the session
//! and registration flows can be driven by mocks in tests. A 202 from
//! `createAccount` is a business outcome, not an error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{NewAccount, User, UserEnvelope};
use crate::config::AppConfig;

pub const CREATE_ACCOUNT_PATH: &str = "/user/createAccount";
pub const GET_USER_PATH: &str = "/user/getUser";

/// Request timeout applied to every call, in milliseconds.
#[cfg(feature = "hydrate")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Result of a registration request the server answered meaningfully.
#[derive(Clone, Debug, PartialEq)]
pub enum CreateAccountOutcome {
    Created(User),
    UsernameTaken,
}

/// The two account endpoints the front end depends on.
#[allow(async_fn_in_trait)]
pub trait AccountApi {
    /// `POST /user/createAccount` with a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or any status other than 200/202.
    async fn create_account(&self, account: &NewAccount) -> Result<CreateAccountOutcome, ApiError>;

    /// `GET /user/getUser` with the token as a bearer credential.
    /// Returns `Ok(None)` when the server rejects the token.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or an unreadable 200 body.
    async fn fetch_user(&self, token: &str) -> Result<Option<User>, ApiError>;
}

/// Maps a `createAccount` response onto its outcome.
///
/// # Errors
///
/// Returns `ApiError::Http` for unexpected statuses and `ApiError::Parse` for
/// a 200 body that is not a user envelope.
pub fn classify_create_account(status: u16, body: &str) -> Result<CreateAccountOutcome, ApiError> {
    match status {
        202 => Ok(CreateAccountOutcome::UsernameTaken),
        200 => parse_envelope(body).map(CreateAccountOutcome::Created),
        _ => Err(ApiError::http(status, body)),
    }
}

/// Maps a `getUser` response onto the user, or `None` for a rejected token.
///
/// # Errors
///
/// Returns `ApiError::Parse` for a 200 body that is not a user envelope.
pub fn classify_get_user(status: u16, body: &str) -> Result<Option<User>, ApiError> {
    if status == 200 {
        parse_envelope(body).map(Some)
    } else {
        Ok(None)
    }
}

fn parse_envelope(body: &str) -> Result<User, ApiError> {
    serde_json::from_str::<UserEnvelope>(body)
        .map(|envelope| envelope.user)
        .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// `AccountApi` backed by browser `fetch`.
#[derive(Clone, Debug)]
pub struct HttpAccountApi {
    config: AppConfig,
}

impl HttpAccountApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl Default for HttpAccountApi {
    fn default() -> Self {
        Self::new(AppConfig::load())
    }
}

impl AccountApi for HttpAccountApi {
    async fn create_account(&self, account: &NewAccount) -> Result<CreateAccountOutcome, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(CREATE_ACCOUNT_PATH);
            let body = account.to_form_body();
            let (status, text) = send_with_timeout(move |signal| {
                gloo_net::http::Request::post(&url)
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .abort_signal(Some(signal))
                    .body(body)
                    .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
            })
            .await?;
            classify_create_account(status, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, account);
            Err(ApiError::Config("not available on server".to_owned()))
        }
    }

    async fn fetch_user(&self, token: &str) -> Result<Option<User>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.endpoint(GET_USER_PATH);
            let authorization = bearer_header(token);
            let (status, text) = send_with_timeout(move |signal| {
                gloo_net::http::Request::get(&url)
                    .header("Authorization", &authorization)
                    .abort_signal(Some(signal))
                    .build()
                    .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))
            })
            .await?;
            classify_get_user(status, &text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.config, token);
            Err(ApiError::Config("not available on server".to_owned()))
        }
    }
}

/// Maps network errors into `ApiError` variants with timeout detection.
#[cfg(any(test, feature = "hydrate"))]
fn map_request_error(message: &str) -> ApiError {
    let lowered = message.to_lowercase();
    if lowered.contains("timeout") || lowered.contains("abort") {
        ApiError::Timeout("Request timed out. Please try again.".to_owned())
    } else {
        ApiError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout and returns its status and body text.
#[cfg(feature = "hydrate")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<gloo_net::http::Request, ApiError>,
) -> Result<(u16, String), ApiError> {
    use gloo_timers::callback::Timeout;
    use web_sys::AbortController;

    let controller = AbortController::new()
        .map_err(|_| ApiError::Config("Failed to initialize request timeout.".to_owned()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(REQUEST_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    let response = request
        .send()
        .await
        .map_err(|err| map_request_error(&err.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|err| ApiError::Parse(format!("Failed to read response: {err}")))?;
    Ok((status, text))
}
