//! User record and its HTTP representation.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role written for every self-registered account.
pub const DEFAULT_ROLE: &str = "USER";

/// Stored user. `password_hash` is the encoder's output, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

/// A user that has not been persisted yet; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl NewUser {
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
            role: self.role,
        }
    }
}

/// User object as returned by the register and lookup endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    pub role: String,
}

impl UserResponse {
    /// Build the response, keeping the hash only when `expose_hash` is set.
    pub fn from_user(user: User, expose_hash: bool) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password_hash: expose_hash.then_some(user.password_hash),
            role: user.role,
        }
    }
}
