use crate::{Result, UserRepository};

use ft_core::{LoginCredentials, User};

use std::sync::Arc;

/// Login operation behind the login form.
///
/// Rejects blank credentials before the repository is touched; otherwise a
/// single delegation, no retries.
pub struct LoginUseCase {
    repository: Arc<UserRepository>,
}

impl LoginUseCase {
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, email: &str, password: &str) -> Result<User> {
        LoginCredentials::new(email, password).validate()?;

        self.repository.login_user(email, password).await
    }
}
