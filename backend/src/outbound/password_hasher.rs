//! Argon2id implementation of the [`PasswordHasher`] port.
//!
//! Hashes are PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`), so a
//! hash produced under one cost setting still verifies after the cost
//! changes.

use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHasher as _, PasswordVerifier as _, Version};
use tracing::warn;

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Argon2id hasher with a fresh random salt per password.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Hasher with the library's recommended cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with explicit memory (KiB), iteration and lane costs.
    ///
    /// # Errors
    /// Returns [`PasswordHashError::Hashing`] when the costs are out of range.
    pub fn with_cost(
        memory_kib: u32,
        iterations: u32,
        lanes: u32,
    ) -> Result<Self, PasswordHashError> {
        let params = Params::new(memory_kib, iterations, lanes, None)
            .map_err(|error| PasswordHashError::hashing(error.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|error| PasswordHashError::hashing(error.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(error) => {
                warn!(%error, "stored password hash does not parse");
                false
            }
        }
    }
}
