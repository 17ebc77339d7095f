mod test_db;

pub use test_db::create_test_pool;

use chrono::{DateTime, Utc};
use ft_core::User;

/// Builds a user with a token, the shape a successful login produces.
/// Timestamps are truncated to whole seconds to match column precision.
pub fn test_user(id: &str, email: &str) -> User {
    let now = DateTime::from_timestamp(Utc::now().timestamp(), 0).unwrap();

    User {
        id: id.to_string(),
        username: None,
        email: email.to_string(),
        access_token: Some("t1".to_string()),
        created_at: now,
        updated_at: now,
    }
}
