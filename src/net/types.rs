//! Wire DTOs for the mock login endpoint.
//!
//! DESIGN
//! ======
//! `ApiResult` mirrors the canned JSON envelope (`success`, `result`,
//! `errors`). `User` keeps every field optional so any canned success payload
//! decodes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response envelope returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl<T> ApiResult<T> {
    /// Successful envelope carrying `result`.
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            result: Some(result),
            errors: None,
        }
    }

    /// Failed envelope carrying an error message.
    pub fn failure(errors: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            errors: Some(errors.into()),
        }
    }
}

/// User payload attached to a successful login.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Best available label for greeting the user.
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.login.as_deref())
            .or(self.email.as_deref())
    }
}

/// Values typed into the login form.
///
/// The mock endpoint never receives these; they only gate submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginCredentials {
    pub login: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            password: password.into(),
        }
    }
}
