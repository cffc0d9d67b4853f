//! Process-local credential store.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{single_result, CredentialStore};
use crate::error::AppResult;
use crate::models::{NewUser, User};

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: Vec<User>,
}

/// In-memory `users` table. Ids start at 1; clones share the same table.
#[derive(Clone, Default)]
pub struct MemoryCredentialStore {
    table: Arc<RwLock<Table>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn save(&self, user: NewUser) -> AppResult<User> {
        let mut table = self.table.write().await;
        table.next_id += 1;
        let user = user.with_id(table.next_id);
        table.rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let table = self.table.read().await;
        let rows = table
            .rows
            .iter()
            .filter(|u| u.username == username)
            .cloned()
            .collect();
        single_result(rows)
    }
}
