//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserAccount, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the email address.
        DuplicateEmail { email: String } => "email already registered: {email}",
    }
}

/// User store consumed by principal resolution, owner lookups and the
/// account flows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier; `None` when no row matches.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch a user and its password hash by email; `None` when no row
    /// matches.
    async fn find_by_email(&self, email: &str)
    -> Result<Option<UserAccount>, UserPersistenceError>;

    /// Insert a user whose password secret is already hashed.
    ///
    /// Fails with [`UserPersistenceError::DuplicateEmail`] when the email is
    /// taken.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;
}
