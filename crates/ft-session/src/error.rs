use ft_auth::AuthError;
use ft_core::{CoreError, ErrorLocation};
use ft_db::DbError;

use std::panic::Location;

use thiserror::Error;

/// Failures surfaced to the UI layer.
///
/// Two kinds only: validation (blank credentials) and operation failures
/// from the network or the store. Both are terminal for the attempt and
/// their message is displayed verbatim.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Login request failed: {source} {location}")]
    Auth {
        source: AuthError,
        location: ErrorLocation,
    },

    #[error("User store failed: {source} {location}")]
    Store {
        source: DbError,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Whether the failure came from input validation rather than an
    /// operation against a collaborator.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<CoreError> for SessionError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        let CoreError::Validation { message, .. } = source;
        Self::Validation {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for SessionError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for SessionError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
