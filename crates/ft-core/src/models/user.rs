//! User entity - the single "current user" session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user, held as one immutable value.
/// Login and logout replace it wholesale; nothing mutates it in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    pub email: String,
    /// Token issued by the login endpoint. Absent on records persisted
    /// before a token was attached.
    pub access_token: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with default values
    pub fn new(id: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: None,
            email,
            access_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the access token returned by the login endpoint.
    pub fn with_access_token(mut self, token: String) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Name used in greetings: username when set, email otherwise.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.email)
    }

    /// Check if the user has a usable access token
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }
}
