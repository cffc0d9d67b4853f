//! PostgreSQL-backed credential store over the `users` table.

use async_trait::async_trait;
use tracing::debug;

use super::{single_result, CredentialStore};
use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{NewUser, User};

#[derive(Clone)]
pub struct PgCredentialStore {
    pool: DbPool,
}

impl PgCredentialStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn save(&self, user: NewUser) -> AppResult<User> {
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, role
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.role)
        .fetch_one(&self.pool)
        .await?;
        debug!(user_id = row.id, "user row inserted");
        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let rows = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, role FROM users WHERE username = $1 ORDER BY id",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;
        single_result(rows)
    }
}
