//! Port for one-way password hashing.

use super::define_port_error;

define_port_error! {
    /// Errors raised while hashing a password.
    pub enum PasswordHashError {
        /// The hashing backend rejected the input or its parameters.
        Hashing { message: String } => "password hashing failed: {message}",
    }
}

/// Salted, slow password hashing used by registration and login.
///
/// Implementations are CPU-bound and synchronous; callers move them off the
/// async executor.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with a fresh salt into a self-describing string.
    fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Whether `password` matches `hash`. A hash that cannot be parsed never
    /// matches.
    fn verify(&self, password: &str, hash: &str) -> bool;
}
