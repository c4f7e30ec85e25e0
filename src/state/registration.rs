//! Registration form validation and submission.
//!
//! DESIGN
//! ======
//! `RegistrationForm::validate` is the only gate in front of the network: a
//! form that fails it never produces a `NewAccount`. `RegistrationFlow` holds
//! the page's overlay flag and form-level error, and drives one submission
//! through the account API into the session.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use leptos::prelude::*;

use crate::net::api::{AccountApi, CreateAccountOutcome};
use crate::net::error::ApiError;
use crate::net::types::NewAccount;
use crate::state::session::Session;
use crate::util::cookie::TokenStore;
use crate::util::navigation::Navigator;

pub const USERNAME_MIN: usize = 4;
pub const USERNAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 120;

pub const USERNAME_TOO_SHORT: &str = "Username must be at least 4 letters long!";
pub const USERNAME_TOO_LONG: &str = "Username must be under 50 letters!";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 letters long!";
pub const PASSWORD_TOO_LONG: &str = "Password must be under 120 letters!";
pub const CONFIRM_TOO_LONG: &str = "Confirm password must be under 120 letters!";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

pub const USERNAME_TAKEN: &str = "Username is already taken";
pub const SUBMIT_FAILED: &str = "Error submitting the registration form";

/// Form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Username,
    Password,
    ConfirmPassword,
}

/// Raw registration input as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Inline validation messages, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        match field {
            Field::Username => self.username,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

impl RegistrationForm {
    /// Checks length bounds and password equality. Lengths count Unicode
    /// scalar values.
    ///
    /// # Errors
    ///
    /// Returns every field that failed, with its message.
    pub fn validate(&self) -> Result<NewAccount, FieldErrors> {
        let mut errors = FieldErrors {
            username: check_length(
                &self.username,
                USERNAME_MIN,
                USERNAME_MAX,
                USERNAME_TOO_SHORT,
                USERNAME_TOO_LONG,
            ),
            password: check_length(
                &self.password,
                PASSWORD_MIN,
                PASSWORD_MAX,
                PASSWORD_TOO_SHORT,
                PASSWORD_TOO_LONG,
            ),
            confirm_password: check_length(
                &self.confirm_password,
                PASSWORD_MIN,
                PASSWORD_MAX,
                PASSWORD_TOO_SHORT,
                CONFIRM_TOO_LONG,
            ),
        };

        if errors.confirm_password.is_none() && self.password != self.confirm_password {
            errors.confirm_password = Some(PASSWORDS_DO_NOT_MATCH);
        }

        if errors.is_empty() {
            Ok(NewAccount {
                username: self.username.clone(),
                password: self.password.clone(),
            })
        } else {
            Err(errors)
        }
    }
}

fn check_length(
    value: &str,
    min: usize,
    max: usize,
    too_short: &'static str,
    too_long: &'static str,
) -> Option<&'static str> {
    let len = value.chars().count();
    if len < min {
        Some(too_short)
    } else if len > max {
        Some(too_long)
    } else {
        None
    }
}

/// Per-page submission state: the overlay flag and the form-level error.
#[derive(Clone, Copy, Debug)]
pub struct RegistrationFlow {
    pub loading: RwSignal<bool>,
    pub form_error: RwSignal<Option<String>>,
}

impl Default for RegistrationFlow {
    fn default() -> Self {
        Self {
            loading: RwSignal::new(false),
            form_error: RwSignal::new(None),
        }
    }
}

impl RegistrationFlow {
    /// Posts a validated account and applies the response.
    ///
    /// The overlay is lowered before the response is inspected. A submit while
    /// another is in flight is ignored.
    pub async fn submit<A, T, N>(&self, api: &A, session: &Session<T, N>, account: NewAccount)
    where
        A: AccountApi,
        T: TokenStore,
        N: Navigator,
    {
        if self.loading.get_untracked() {
            return;
        }
        self.form_error.set(None);
        self.loading.set(true);

        let response = api.create_account(&account).await;

        self.loading.set(false);

        match response {
            Ok(CreateAccountOutcome::UsernameTaken) => {
                self.form_error.set(Some(USERNAME_TAKEN.to_owned()));
            }
            Ok(CreateAccountOutcome::Created(user)) => {
                let Some(token) = user.token().map(str::to_owned) else {
                    self.fail(&ApiError::Parse("response user has no token".to_owned()));
                    return;
                };
                session.store_token(&token);
                log::info!("account created");
                session.register(user);
            }
            Err(err) => self.fail(&err),
        }
    }

    fn fail(&self, err: &ApiError) {
        log::error!("registration failed: {err}");
        self.form_error.set(Some(SUBMIT_FAILED.to_owned()));
    }
}
