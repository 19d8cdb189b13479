//! Request identity: principals, bearer parsing and authentication failures.
//!
//! The HTTP gate reads the `Authorization` header and hands the raw value to
//! [`bearer_token`]; the token goes through the credential codec; the subject
//! id is then resolved by [`PrincipalResolver`]. Each stage fails with an
//! [`AuthFailure`] variant, and only the conversion into [`Error`] decides
//! what a client gets to see.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ports::{UserPersistenceError, UserRepository};
use super::{Error, UserId};

const BEARER_SCHEME: &str = "Bearer";

/// Authenticated caller attached to a request once the gate succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub email: String,
}

/// Why a resolved subject produced no principal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionFailure {
    /// The user store holds no user with the subject id.
    #[error("principal {id} not found")]
    PrincipalNotFound { id: UserId },
    /// The user store could not answer.
    #[error("user store unavailable: {message}")]
    StoreUnavailable { message: String },
}

/// Tagged authentication failure raised by the gate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    /// No `Authorization` header, or an empty one.
    #[error("no credential presented")]
    NoCredential,
    /// The header was not a bearer credential, or it failed to verify.
    #[error("malformed credential")]
    MalformedCredential,
    /// The credential verified but named no usable user.
    #[error("unknown principal: {0}")]
    UnknownPrincipal(#[source] ResolutionFailure),
}

impl From<AuthFailure> for Error {
    fn from(failure: AuthFailure) -> Self {
        debug!(reason = %failure, "authentication rejected");
        match failure {
            AuthFailure::MalformedCredential => Error::invalid_token("Invalid token"),
            AuthFailure::NoCredential | AuthFailure::UnknownPrincipal(_) => {
                Error::unauthorized("Unauthorized")
            }
        }
    }
}

/// Extract the token from a raw `Authorization` header value.
///
/// # Errors
/// [`AuthFailure::NoCredential`] when the header is absent or empty, and
/// [`AuthFailure::MalformedCredential`] when it is not `Bearer <token>` with
/// a non-empty token.
///
/// # Examples
/// ```
/// use photos_backend::domain::auth::bearer_token;
/// use photos_backend::domain::AuthFailure;
///
/// assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
/// assert_eq!(bearer_token(None), Err(AuthFailure::NoCredential));
/// assert_eq!(bearer_token(Some("Bearer ")), Err(AuthFailure::MalformedCredential));
/// ```
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthFailure> {
    let raw = match header {
        None => return Err(AuthFailure::NoCredential),
        Some(raw) if raw.is_empty() => return Err(AuthFailure::NoCredential),
        Some(raw) => raw,
    };
    let (scheme, token) = raw
        .split_once(' ')
        .ok_or(AuthFailure::MalformedCredential)?;
    let token = token.trim();
    if scheme != BEARER_SCHEME || token.is_empty() {
        return Err(AuthFailure::MalformedCredential);
    }
    Ok(token)
}

/// Maps verified subject ids onto stored users.
#[derive(Clone)]
pub struct PrincipalResolver {
    users: Arc<dyn UserRepository>,
}

impl PrincipalResolver {
    /// Resolve principals against `users`.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Look up the user named by a credential.
    ///
    /// # Errors
    /// [`AuthFailure::UnknownPrincipal`] when the user is missing or the store
    /// fails; the wrapped [`ResolutionFailure`] says which.
    pub async fn resolve(&self, subject_id: UserId) -> Result<Principal, AuthFailure> {
        match self.users.find_by_id(subject_id).await {
            Ok(Some(user)) => Ok(Principal {
                id: user.id,
                email: user.email,
            }),
            Ok(None) => {
                debug!(%subject_id, "credential subject has no user");
                Err(AuthFailure::UnknownPrincipal(
                    ResolutionFailure::PrincipalNotFound { id: subject_id },
                ))
            }
            Err(error) => {
                warn!(%subject_id, %error, "principal lookup failed");
                let message = match error {
                    UserPersistenceError::Connection { message }
                    | UserPersistenceError::Query { message } => message,
                    other @ UserPersistenceError::DuplicateEmail { .. } => other.to_string(),
                };
                Err(AuthFailure::UnknownPrincipal(
                    ResolutionFailure::StoreUnavailable { message },
                ))
            }
        }
    }
}
