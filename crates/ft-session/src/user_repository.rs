use crate::Result;

use ft_auth::AuthClient;
use ft_core::User;
use ft_db::UserStore;

use std::sync::Arc;

use log::{debug, info};
use tokio::sync::watch;

/// Unifies the remote auth endpoint and the local single-slot store.
///
/// Login goes through the network and, on success, lands in the store;
/// reads and the observable delegate straight to the store. A network
/// failure never touches the stored user.
pub struct UserRepository {
    auth_client: AuthClient,
    store: Arc<dyn UserStore>,
}

impl UserRepository {
    pub fn new(auth_client: AuthClient, store: Arc<dyn UserStore>) -> Self {
        Self { auth_client, store }
    }

    /// Exchange credentials for a user and persist it as the current one.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<User> {
        let response = self.auth_client.login(email, password).await?;
        let user = response.into_user();

        self.store.save(&user).await?;
        info!("Logged in as {} (id {})", user.email, user.id);

        Ok(user)
    }

    /// Replace the stored user directly, without a network round trip.
    pub async fn save_user(&self, user: &User) -> Result<()> {
        self.store.save(user).await?;
        Ok(())
    }

    pub async fn get_current_user(&self) -> Result<Option<User>> {
        Ok(self.store.get().await?)
    }

    pub fn observe_current_user(&self) -> watch::Receiver<Option<User>> {
        self.store.observe()
    }

    /// Drop the current session.
    pub async fn logout(&self) -> Result<()> {
        self.store.clear().await?;
        debug!("Session cleared");
        Ok(())
    }
}
