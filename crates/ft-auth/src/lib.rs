//! HTTP client for the auth REST endpoint.
//!
//! One operation: POST /auth/login. No retries, no backoff - a failed
//! attempt is terminal and surfaces the server's message.

mod auth_client;
mod dto;
mod error;

#[cfg(test)]
mod tests;

pub use auth_client::AuthClient;
pub use dto::{LoginRequest, LoginResponse, UserDto};
pub use error::{AuthError, AuthResult};
