//! Login form input. Transient - never persisted, never serialized.

use crate::{CoreError, Result};

use std::fmt;

/// Email/password pair captured from the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

impl LoginCredentials {
    pub fn new<S: Into<String>>(email: S, password: S) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Reject blank input before any network call is made.
    /// Blank means empty after trimming, matching the login form's check.
    pub fn validate(&self) -> Result<()> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(CoreError::validation("Email and password cannot be empty"));
        }

        Ok(())
    }
}

// Manual Debug so the password never reaches log output.
impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
