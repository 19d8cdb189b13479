//! Credential configuration parsing and validation.
//!
//! Centralises the environment-driven settings for the bearer credential
//! codec so they are validated consistently and can be tested in isolation.
//!
//! | Variable | Default |
//! |---|---|
//! | `CREDENTIAL_SECRET_FILE` | `/var/run/secrets/credential_secret` |
//! | `CREDENTIAL_TTL_SECS` | `86400` |
//! | `CREDENTIAL_ALLOW_EPHEMERAL` | unset (disabled) |

pub mod fingerprint;

use std::path::PathBuf;
use std::time::Duration;

use mockable::Env;
use rand::RngCore;
use tracing::warn;
use zeroize::Zeroize;

use crate::domain::SigningSecret;

const SECRET_DEFAULT_PATH: &str = "/var/run/secrets/credential_secret";
const SECRET_MIN_LEN: usize = 32;
const EPHEMERAL_SECRET_LEN: usize = 64;
const DEFAULT_TTL_SECS: u64 = 86_400;
const SECRET_FILE_ENV: &str = "CREDENTIAL_SECRET_FILE";
const TTL_ENV: &str = "CREDENTIAL_TTL_SECS";
const ALLOW_EPHEMERAL_ENV: &str = "CREDENTIAL_ALLOW_EPHEMERAL";
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no|y|n";
const TTL_EXPECTED: &str = "a positive number of seconds";

/// Build mode for credential configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate defaults and fall back to ephemeral secrets.
    Debug,
    /// Release builds require a readable, sufficiently long secret.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use photos_backend::inbound::http::credential_config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Credential settings derived from configuration.
#[derive(Debug)]
pub struct CredentialSettings {
    /// HMAC signing secret for issued credentials.
    pub secret: SigningSecret,
    /// Lifetime of newly issued credentials.
    pub ttl: Duration,
    /// Whether the secret was generated for this process only.
    pub ephemeral: bool,
}

/// Errors raised while validating credential configuration.
#[derive(thiserror::Error, Debug)]
pub enum CredentialConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
    /// Reading the secret file failed.
    #[error("failed to read credential secret at {path}: {source}")]
    SecretRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The secret file exists but is too short for release builds.
    #[error("credential secret at {path} too short: need >= {min_len} bytes, got {length}")]
    SecretTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
    /// Release builds must not allow ephemeral secrets.
    #[error("CREDENTIAL_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Build credential settings from environment variables and build mode.
///
/// # Examples
///
/// ```rust
/// use photos_backend::inbound::http::credential_config::{
///     credential_settings_from_env, BuildMode,
/// };
/// use mockable::MockEnv;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let secret_path = std::env::temp_dir().join("credential_secret_example");
/// std::fs::write(&secret_path, vec![b'a'; 32])?;
///
/// let secret_path = secret_path.to_str().expect("valid path").to_owned();
/// let mut env = MockEnv::new();
/// env.expect_string().returning(move |name| match name {
///     "CREDENTIAL_SECRET_FILE" => Some(secret_path.clone()),
///     "CREDENTIAL_TTL_SECS" => Some("3600".to_owned()),
///     _ => None,
/// });
///
/// let settings = credential_settings_from_env(&env, BuildMode::Release)?;
/// assert_eq!(settings.ttl.as_secs(), 3600);
/// assert!(!settings.ephemeral);
/// # Ok(())
/// # }
/// ```
pub fn credential_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<CredentialSettings, CredentialConfigError> {
    let ttl = ttl_from_env(env, mode)?;
    let allow_ephemeral = allow_ephemeral_from_env(env, mode)?;
    let (secret, ephemeral) = secret_from_env(env, mode, allow_ephemeral)?;

    Ok(CredentialSettings {
        secret,
        ttl,
        ephemeral,
    })
}

fn ttl_from_env<E: Env>(env: &E, mode: BuildMode) -> Result<Duration, CredentialConfigError> {
    let Some(value) = env.string(TTL_ENV) else {
        return Ok(Duration::from_secs(DEFAULT_TTL_SECS));
    };
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ if mode.is_debug() => {
            warn!(value = %value, "invalid CREDENTIAL_TTL_SECS; using default");
            Ok(Duration::from_secs(DEFAULT_TTL_SECS))
        }
        _ => Err(CredentialConfigError::InvalidEnv {
            name: TTL_ENV,
            value,
            expected: TTL_EXPECTED,
        }),
    }
}

fn allow_ephemeral_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<bool, CredentialConfigError> {
    let Some(value) = env.string(ALLOW_EPHEMERAL_ENV) else {
        return Ok(false);
    };
    match parse_bool(&value) {
        Some(true) if mode.is_debug() => Ok(true),
        Some(true) => Err(CredentialConfigError::EphemeralNotAllowed),
        Some(false) => Ok(false),
        None if mode.is_debug() => {
            warn!(
                value = %value,
                "invalid CREDENTIAL_ALLOW_EPHEMERAL; defaulting to disabled"
            );
            Ok(false)
        }
        None => Err(CredentialConfigError::InvalidEnv {
            name: ALLOW_EPHEMERAL_ENV,
            value,
            expected: BOOL_EXPECTED,
        }),
    }
}

fn secret_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<(SigningSecret, bool), CredentialConfigError> {
    let secret_path = env
        .string(SECRET_FILE_ENV)
        .unwrap_or_else(|| SECRET_DEFAULT_PATH.to_owned());
    let path = PathBuf::from(secret_path);

    match std::fs::read(&path) {
        Ok(mut bytes) => {
            let length = bytes.len();
            if mode == BuildMode::Release && length < SECRET_MIN_LEN {
                bytes.zeroize();
                return Err(CredentialConfigError::SecretTooShort {
                    path,
                    length,
                    min_len: SECRET_MIN_LEN,
                });
            }
            Ok((SigningSecret::new(bytes), false))
        }
        Err(error) => {
            if mode.is_debug() || allow_ephemeral {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "using temporary credential secret (dev only)"
                );
                Ok((ephemeral_secret(), true))
            } else {
                Err(CredentialConfigError::SecretRead {
                    path,
                    source: error,
                })
            }
        }
    }
}

fn ephemeral_secret() -> SigningSecret {
    let mut bytes = vec![0_u8; EPHEMERAL_SECRET_LEN];
    rand::thread_rng().fill_bytes(&mut bytes);
    SigningSecret::new(bytes)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
