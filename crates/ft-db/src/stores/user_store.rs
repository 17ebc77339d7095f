use crate::Result;

use ft_core::User;

use async_trait::async_trait;
use tokio::sync::watch;

/// Single-slot store for the current user.
///
/// Each save replaces the prior value entirely; there is never more than
/// one stored user. `observe` hands out a receiver over the slot so screens
/// can react to login/logout without polling.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Replace the stored user with `user`.
    async fn save(&self, user: &User) -> Result<()>;

    /// Current stored user, if any.
    async fn get(&self) -> Result<Option<User>>;

    /// Empty the slot.
    async fn clear(&self) -> Result<()>;

    /// Watch the slot. The receiver holds the current value and is updated
    /// on every save/clear.
    fn observe(&self) -> watch::Receiver<Option<User>>;
}
