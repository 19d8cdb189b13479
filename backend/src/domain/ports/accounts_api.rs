//! Driving port for registration and login.

use async_trait::async_trait;

use crate::domain::{Error, IssuedCredential, LoginCredentials, Registration, User};

/// Account use-cases exposed to the HTTP adapter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountsCommand: Send + Sync {
    /// Hash the password and store a new user.
    async fn register(&self, registration: Registration) -> Result<User, Error>;

    /// Check an email and password pair and sign a bearer credential.
    async fn login(&self, credentials: LoginCredentials) -> Result<IssuedCredential, Error>;
}
