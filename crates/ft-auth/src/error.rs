use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during auth API calls
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Login failed: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        AuthError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api(status: u16, message: String) -> Self {
        AuthError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AuthError::from_reqwest(err)
    }
}

pub type AuthResult<T> = std::result::Result<T, AuthError>;
