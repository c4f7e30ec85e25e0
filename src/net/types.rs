//! Wire types for the account API.
//!
//! DESIGN
//! ======
//! The server owns the user record's shape, so `User` keeps the raw JSON
//! object and only exposes the few fields the UI reads.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user record as returned by the account API.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(Map<String, Value>);

impl User {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The session token issued with this record, if the server included one.
    pub fn token(&self) -> Option<&str> {
        self.string_field("token")
    }

    /// Name shown in the dashboard avatar menu.
    pub fn display_name(&self) -> Option<&str> {
        self.string_field("username").or_else(|| self.string_field("name"))
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    fn string_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

/// Body of `POST /user/createAccount` and `GET /user/getUser` on success.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

/// Credentials posted to `/user/createAccount`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
}

impl NewAccount {
    /// Encodes the account as an `application/x-www-form-urlencoded` body.
    pub fn to_form_body(&self) -> String {
        format!(
            "username={}&password={}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password)
        )
    }
}
