//! In-memory [`UserRepository`].

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserAccount, UserId};

use super::lock;

struct StoredUser {
    user: User,
    password_hash: String,
}

#[derive(Default)]
struct UserTable {
    last_id: i32,
    rows: BTreeMap<UserId, StoredUser>,
}

/// Volatile user store.
pub struct InMemoryUserRepository {
    clock: Arc<dyn Clock + Send + Sync>,
    table: Mutex<UserTable>,
}

impl InMemoryUserRepository {
    /// Empty store stamping rows with `clock`.
    pub fn new(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            clock,
            table: Mutex::new(UserTable::default()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(lock(&self.table)
            .rows
            .get(&id)
            .map(|stored| stored.user.clone()))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        Ok(lock(&self.table)
            .rows
            .values()
            .find(|stored| stored.user.email == email)
            .map(|stored| UserAccount {
                user: stored.user.clone(),
                password_hash: stored.password_hash.clone(),
            }))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut table = lock(&self.table);
        if table.rows.values().any(|row| row.user.email == user.email) {
            return Err(UserPersistenceError::duplicate_email(user.email.as_str()));
        }
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| UserPersistenceError::query("user id sequence exhausted"))?;
        let now = self.clock.utc();
        let stored = User {
            id: UserId::new(table.last_id),
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(
            stored.id,
            StoredUser {
                user: stored.clone(),
                password_hash: user.password_hash.clone(),
            },
        );
        Ok(stored)
    }
}
