//! Credential store: the persistence seam for user records.

mod memory;
mod postgres;

pub use memory::MemoryCredentialStore;
pub use postgres::PgCredentialStore;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::{NewUser, User};

/// Maps a username to its stored user record.
///
/// `save` never checks for an existing username. `find_by_username` returns
/// `Ok(None)` for an unknown name and [`AppError::NonUniqueResult`] when the
/// name was registered more than once.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Persist `user` and return it with its assigned id.
    async fn save(&self, user: NewUser) -> AppResult<User>;

    /// Look up the single user stored under `username`.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Collapse a lookup result set to at most one user.
pub(crate) fn single_result(mut rows: Vec<User>) -> AppResult<Option<User>> {
    match rows.len() {
        0 => Ok(None),
        1 => Ok(rows.pop()),
        count => Err(AppError::NonUniqueResult { count }),
    }
}
