use crate::{Result, UserStore};

use ft_core::User;

use async_trait::async_trait;
use tokio::sync::watch;

/// Transient user slot backed only by a watch channel.
///
/// Used when the app runs without on-device persistence; the session is
/// gone when the process exits.
pub struct MemoryUserStore {
    current: watch::Sender<Option<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn save(&self, user: &User) -> Result<()> {
        // send_replace succeeds with zero subscribers
        self.current.send_replace(Some(user.clone()));
        Ok(())
    }

    async fn get(&self) -> Result<Option<User>> {
        Ok(self.current.borrow().clone())
    }

    async fn clear(&self) -> Result<()> {
        self.current.send_replace(None);
        Ok(())
    }

    fn observe(&self) -> watch::Receiver<Option<User>> {
        self.current.subscribe()
    }
}
