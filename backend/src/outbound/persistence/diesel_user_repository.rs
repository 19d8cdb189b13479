//! PostgreSQL-backed [`UserRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserAccount, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewUserRow, UserAccountRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel implementation of the user store.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> UserPersistenceError {
    map_pool_error(error, UserPersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

/// Inserts report a unique violation as a taken email; the `users` table
/// carries no other unique column besides the key.
fn insert_error(error: diesel::result::Error, email: &str) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            UserPersistenceError::duplicate_email(email)
        }
        other => diesel_error(other),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(User::from))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = users::table
            .filter(users::email.eq(email))
            .select(UserAccountRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(UserAccount::from))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::insert_into(users::table)
            .values(NewUserRow {
                username: &user.username,
                email: &user.email,
                password: &user.password_hash,
            })
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|error| insert_error(error, &user.email))?;
        Ok(User::from(row))
    }
}
