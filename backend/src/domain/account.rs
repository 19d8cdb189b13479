//! Registration and login inputs.
//!
//! Handlers hand raw, possibly missing strings to the constructors here. Every
//! rule is checked and all violations are reported together, in field order,
//! the same way photo drafts are validated.

use std::fmt;

use serde::Serialize;
use zeroize::Zeroizing;

use super::Error;

const USERNAME_EMPTY: &str = "Username cannot be empty";
const EMAIL_EMPTY: &str = "Email cannot be empty";
const EMAIL_INVALID: &str = "Email must be a valid email address";
const PASSWORD_EMPTY: &str = "Password cannot be empty";

/// Every rule an account payload violated, in field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("account payload rejected: {}", messages.join("; "))]
pub struct AccountValidationError {
    messages: Vec<String>,
}

impl AccountValidationError {
    /// The violated-rule messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl From<AccountValidationError> for Error {
    fn from(error: AccountValidationError) -> Self {
        Error::validation(error.messages)
    }
}

#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn require<'a>(&mut self, value: Option<&'a str>, message: &str) -> Option<&'a str> {
        let present = value.filter(|text| !text.trim().is_empty());
        if present.is_none() {
            self.0.push(message.to_owned());
        }
        present
    }

    fn finish<T>(self, value: impl FnOnce() -> T) -> Result<T, AccountValidationError> {
        if self.0.is_empty() {
            Ok(value())
        } else {
            Err(AccountValidationError { messages: self.0 })
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Validated sign-up request.
///
/// ## Invariants
/// - `username` and `email` are trimmed and non-empty.
/// - `email` has a local part, an `@` and a dotted domain.
/// - `password` is non-empty and kept exactly as sent.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    username: String,
    email: String,
    password: Zeroizing<String>,
}

impl Registration {
    /// Check raw sign-up fields.
    ///
    /// # Errors
    /// Returns [`AccountValidationError`] listing every violated rule.
    ///
    /// # Examples
    /// ```
    /// use photos_backend::domain::Registration;
    ///
    /// let registration =
    ///     Registration::try_from_parts(Some(" acong "), Some("acong@mail.com"), Some("secret"))
    ///         .unwrap();
    /// assert_eq!(registration.username(), "acong");
    /// ```
    pub fn try_from_parts(
        username: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, AccountValidationError> {
        let mut violations = Violations::default();
        let username = violations.require(username, USERNAME_EMPTY);
        let email = violations.require(email, EMAIL_EMPTY).map(str::trim);
        if email.is_some_and(|candidate| !looks_like_email(candidate)) {
            violations.0.push(EMAIL_INVALID.to_owned());
        }
        let password = violations.require(password, PASSWORD_EMPTY);

        violations.finish(|| Self {
            username: username.unwrap_or_default().trim().to_owned(),
            email: email.unwrap_or_default().to_owned(),
            password: Zeroizing::new(password.unwrap_or_default().to_owned()),
        })
    }

    /// Display name to store.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Login identifier; unique across users.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Plain-text password, to be hashed before storage.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Validated login request.
///
/// The email is trimmed; the password keeps caller whitespace so that it is
/// checked against the stored hash exactly as typed.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Check raw login fields.
    ///
    /// # Errors
    /// Returns [`AccountValidationError`] listing every missing field.
    pub fn try_from_parts(
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<Self, AccountValidationError> {
        let mut violations = Violations::default();
        let email = violations.require(email, EMAIL_EMPTY);
        let password = violations.require(password, PASSWORD_EMPTY);

        violations.finish(|| Self {
            email: email.unwrap_or_default().trim().to_owned(),
            password: Zeroizing::new(password.unwrap_or_default().to_owned()),
        })
    }

    /// Email to look the account up by.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Password as typed by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Bearer credential handed out by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedCredential {
    pub token: String,
}
