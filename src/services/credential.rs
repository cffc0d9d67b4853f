//! Credential service: hash-and-store on registration, lookup by username.

use std::sync::Arc;
use tracing::{info, instrument};

use crate::auth::PasswordEncoder;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};
use crate::repositories::CredentialStore;

#[derive(Clone)]
pub struct CredentialService {
    store: Arc<dyn CredentialStore>,
    encoder: Arc<dyn PasswordEncoder>,
}

impl CredentialService {
    pub fn new(store: Arc<dyn CredentialStore>, encoder: Arc<dyn PasswordEncoder>) -> Self {
        Self { store, encoder }
    }

    pub fn encoder(&self) -> &Arc<dyn PasswordEncoder> {
        &self.encoder
    }

    /// Hash `password` and persist a new user. No validation: any strings are
    /// accepted and an existing username is not checked for.
    #[instrument(skip(self, password))]
    pub async fn register_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> AppResult<User> {
        let encoder = self.encoder.clone();
        let plain = password.to_owned();
        let password_hash = tokio::task::spawn_blocking(move || encoder.hash(&plain))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash task: {}", e)))??;

        let user = self
            .store
            .save(NewUser {
                username: username.to_owned(),
                password_hash,
                role: role.to_owned(),
            })
            .await?;
        info!(user_id = user.id, username = %user.username, role = %user.role, "user registered");
        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.store.find_by_username(username).await
    }
}
