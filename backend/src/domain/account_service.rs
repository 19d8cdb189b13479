//! Registration and login use-cases implementing [`AccountsCommand`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};
use zeroize::Zeroizing;

use crate::domain::ports::{AccountsCommand, PasswordHasher, UserPersistenceError, UserRepository};
use crate::domain::{
    CredentialCodec, Error, IssuedCredential, LoginCredentials, NewUser, Registration, User,
};

const EMAIL_TAKEN: &str = "Email already registered";
const LOGIN_REJECTED: &str = "Invalid email or password";

/// Account service over the user store, a password hasher and the codec that
/// signs bearer credentials.
#[derive(Clone)]
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    codec: Arc<CredentialCodec>,
}

impl AccountService {
    /// Create a service over the given collaborators.
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        codec: Arc<CredentialCodec>,
    ) -> Self {
        Self {
            users,
            hasher,
            codec,
        }
    }

    fn map_user_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::DuplicateEmail { email } => {
                debug!(%email, "registration for a taken email");
                Error::validation(vec![EMAIL_TAKEN.to_owned()])
            }
            other => {
                error!(error = %other, "user repository failed");
                Error::internal(format!("user repository error: {other}"))
            }
        }
    }

    /// Run hashing work on the blocking pool.
    async fn blocking<T, F>(work: F) -> Result<T, Error>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::spawn_blocking(work).await.map_err(|error| {
            error!(%error, "password hashing task failed");
            Error::internal(format!("password hashing task failed: {error}"))
        })
    }
}

#[async_trait]
impl AccountsCommand for AccountService {
    async fn register(&self, registration: Registration) -> Result<User, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(registration.password().to_owned());
        let password_hash = Self::blocking(move || hasher.hash(&password))
            .await?
            .map_err(|error| {
                error!(%error, "password hashing failed");
                Error::internal(error.to_string())
            })?;

        let user = self
            .users
            .insert(&NewUser {
                username: registration.username().to_owned(),
                email: registration.email().to_owned(),
                password_hash,
            })
            .await
            .map_err(Self::map_user_error)?;
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<IssuedCredential, Error> {
        let Some(account) = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(Self::map_user_error)?
        else {
            debug!("login for an unknown email");
            return Err(Error::unauthorized(LOGIN_REJECTED));
        };

        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(credentials.password().to_owned());
        let stored_hash = account.password_hash;
        let matches = Self::blocking(move || hasher.verify(&password, &stored_hash)).await?;
        if !matches {
            debug!(user_id = %account.user.id, "login with a wrong password");
            return Err(Error::unauthorized(LOGIN_REJECTED));
        }

        let token = self
            .codec
            .encode(account.user.id, &account.user.email)
            .map_err(|error| {
                error!(%error, "credential signing failed");
                Error::internal(error.to_string())
            })?;
        info!(user_id = %account.user.id, "user logged in");
        Ok(IssuedCredential { token })
    }
}
