//! Wire types for the login endpoint.
//!
//! The response contract is the flat `{token, user}` shape. Unknown fields
//! are ignored and the optional user fields may be absent, so older server
//! revisions still decode.

use ft_core::User;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserDto,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl LoginResponse {
    /// Map the wire shape to the domain user, attaching the issued token.
    /// Timestamps the server omitted default to the login time.
    pub fn into_user(self) -> User {
        let now = Utc::now();

        User {
            id: self.user.id,
            username: self.user.username,
            email: self.user.email,
            access_token: Some(self.token),
            created_at: to_datetime(self.user.created_at, now),
            updated_at: to_datetime(self.user.updated_at, now),
        }
    }
}

fn to_datetime(timestamp: Option<i64>, fallback: DateTime<Utc>) -> DateTime<Utc> {
    timestamp
        .and_then(|ts| DateTime::from_timestamp(ts, 0))
        .unwrap_or(fallback)
}
