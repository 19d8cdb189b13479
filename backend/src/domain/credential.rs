//! Signed, expiring bearer credentials.
//!
//! Tokens are HS256 JWTs carrying `{ id, email, iat, exp }`. The codec is the
//! only component that sees why a token failed to verify; callers get a
//! single [`CredentialError::Malformed`] so the reason never reaches a client.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

use super::UserId;

/// Process-wide HMAC secret, wiped from memory on drop.
#[derive(Clone)]
pub struct SigningSecret(Zeroizing<Vec<u8>>);

impl SigningSecret {
    /// Take ownership of raw secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(Zeroizing::new(bytes.into()))
    }

    /// Borrow the secret material.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Length of the secret in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the secret is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SigningSecret").field(&"<redacted>").finish()
    }
}

/// Decoded credential payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject user id.
    pub id: UserId,
    /// Subject email at the time of issue.
    pub email: String,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    /// The user the credential was issued to.
    pub fn subject_id(&self) -> UserId {
        self.id
    }

    /// The email recorded for the subject.
    pub fn subject_email(&self) -> &str {
        &self.email
    }
}

/// Failures raised by [`CredentialCodec`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    /// Signing a new credential failed.
    #[error("failed to sign credential: {message}")]
    Encode { message: String },
    /// The token did not parse, verify, or was expired.
    #[error("malformed credential")]
    Malformed,
}

/// Encodes and verifies bearer credentials with an injected secret.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use mockable::DefaultClock;
/// use photos_backend::domain::{CredentialCodec, SigningSecret, UserId};
///
/// let codec = CredentialCodec::new(
///     &SigningSecret::new(b"0123456789abcdef0123456789abcdef".to_vec()),
///     Duration::from_secs(3600),
///     Arc::new(DefaultClock),
/// );
/// let token = codec.encode(UserId::new(1), "acong@mail.com").expect("sign");
/// let claims = codec.decode(&token).expect("verify");
/// assert_eq!(claims.subject_id(), UserId::new(1));
/// ```
pub struct CredentialCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl CredentialCodec {
    /// Build a codec for `secret`; issued credentials live for `ttl`.
    pub fn new(secret: &SigningSecret, ttl: Duration, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl_secs: i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX),
            clock,
        }
    }

    /// Sign a credential for the given subject.
    ///
    /// # Errors
    /// Returns [`CredentialError::Encode`] if serialisation or signing fails.
    pub fn encode(&self, subject_id: UserId, email: &str) -> Result<String, CredentialError> {
        let issued_at = self.clock.utc().timestamp();
        let claims = Claims {
            id: subject_id,
            email: email.to_owned(),
            iat: issued_at,
            exp: issued_at.saturating_add(self.ttl_secs),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(
            |error| CredentialError::Encode {
                message: error.to_string(),
            },
        )
    }

    /// Verify `token` and return its claims.
    ///
    /// Expiry is checked against wall-clock time with zero leeway.
    ///
    /// # Errors
    /// Returns [`CredentialError::Malformed`] for every kind of rejection.
    pub fn decode(&self, token: &str) -> Result<Claims, CredentialError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|error| {
                debug!(reason = ?error.kind(), "credential rejected");
                CredentialError::Malformed
            })
    }
}
