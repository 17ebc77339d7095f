use crate::{Result, UserRepository};

use std::sync::Arc;

/// Ends the session by emptying the user slot.
pub struct LogoutUseCase {
    repository: Arc<UserRepository>,
}

impl LogoutUseCase {
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<()> {
        self.repository.logout().await
    }
}
