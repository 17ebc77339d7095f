use crate::{Result, UserRepository};

use ft_core::User;

use std::sync::Arc;

/// Pass-through read of the current session user.
pub struct GetCurrentUserUseCase {
    repository: Arc<UserRepository>,
}

impl GetCurrentUserUseCase {
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Option<User>> {
        self.repository.get_current_user().await
    }
}
