//! Username/password verification against stored credentials.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::error::AppResult;
use crate::models::User;
use crate::services::CredentialService;

/// Outcome of a verification that did not fail.
#[derive(Debug, Clone)]
pub struct Authentication {
    pub principal: User,
    pub authenticated: bool,
}

#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong password or unknown username; the two are not distinguished.
    #[error("Bad credentials")]
    BadCredentials,

    /// The verification itself could not be carried out.
    #[error("{0}")]
    Other(String),
}

#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Authentication, AuthError>;
}

/// Looks the user up and compares the submitted password with the stored hash.
///
/// Unknown usernames are still checked against a placeholder hash so both
/// rejection paths pay the same hashing cost.
#[derive(Clone)]
pub struct CredentialAuthenticator {
    credentials: CredentialService,
    placeholder_hash: Option<Arc<str>>,
}

impl CredentialAuthenticator {
    pub fn new(credentials: CredentialService) -> Self {
        let placeholder_hash = match credentials.encoder().hash(PLACEHOLDER_PASSWORD) {
            Ok(hash) => Some(Arc::from(hash)),
            Err(e) => {
                warn!(error = %e, "could not build placeholder hash for unknown users");
                None
            }
        };
        Self {
            credentials,
            placeholder_hash,
        }
    }

    async fn verify(
        &self,
        password: &str,
        stored: Arc<str>,
    ) -> Result<AppResult<bool>, AuthError> {
        let encoder = self.credentials.encoder().clone();
        let plain = password.to_owned();
        tokio::task::spawn_blocking(move || encoder.verify(&plain, &stored))
            .await
            .map_err(|e| AuthError::Other(format!("verify task: {}", e)))
    }
}

const PLACEHOLDER_PASSWORD: &str = "placeholder-password-for-unknown-users";

#[async_trait]
impl Authenticator for CredentialAuthenticator {
    #[instrument(skip(self, password))]
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Authentication, AuthError> {
        let found = self
            .credentials
            .find_by_username(username)
            .await
            .map_err(|e| AuthError::Other(e.to_string()))?;

        let Some(user) = found else {
            if let Some(placeholder) = &self.placeholder_hash {
                let _ = self.verify(password, placeholder.clone()).await?;
            }
            debug!("unknown username");
            return Err(AuthError::BadCredentials);
        };

        match self.verify(password, Arc::from(user.password_hash.as_str())).await? {
            Ok(true) => Ok(Authentication {
                principal: user,
                authenticated: true,
            }),
            Ok(false) => {
                debug!(user_id = user.id, "password mismatch");
                Err(AuthError::BadCredentials)
            }
            Err(e) => {
                warn!(
                    user_id = user.id,
                    error = %e,
                    "stored password hash is not a valid encoded hash"
                );
                Err(AuthError::BadCredentials)
            }
        }
    }
}
