//! Signing secret fingerprinting for operational visibility.
//!
//! A truncated SHA-256 digest lets operators confirm which secret a process
//! loaded without exposing the secret itself. Logged once at startup.

use sha2::{Digest, Sha256};

use crate::domain::SigningSecret;

/// Length of the fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// First 8 bytes of the SHA-256 of the secret, as 16 lowercase hex digits.
///
/// # Examples
///
/// ```rust
/// use photos_backend::domain::SigningSecret;
/// use photos_backend::inbound::http::credential_config::fingerprint::secret_fingerprint;
///
/// let fp = secret_fingerprint(&SigningSecret::new(vec![b'a'; 32]));
///
/// assert_eq!(fp.len(), 16);
/// assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
#[must_use]
pub fn secret_fingerprint(secret: &SigningSecret) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    hex::encode(digest.get(..FINGERPRINT_BYTES).unwrap_or_default())
}
