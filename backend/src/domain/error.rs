//! Domain-level error types.
//!
//! [`Error`] is the single, transport-agnostic envelope every failure ends up
//! in. Components raise their own tagged failures ([`super::AuthFailure`],
//! [`super::PhotoValidationError`], [`NotFoundFailure`]) and convert them with
//! `From`, so the decision about what a client sees lives in one place. The
//! HTTP adapter then maps [`ErrorCode`] onto a status code.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// No usable identity was presented, or it did not resolve to a user.
    Unauthorized,
    /// A credential was presented but could not be verified.
    InvalidToken,
    /// The requested resource or route does not exist.
    NotFound,
    /// An unexpected error occurred inside the service.
    InternalError,
}

/// Client-facing message: a sentence, or one sentence per violated rule.
///
/// Serialised untagged so clients see either `"message": "..."` or
/// `"message": ["...", "..."]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// A single human-readable sentence.
    Text(String),
    /// Ordered validation messages.
    List(Vec<String>),
}

impl ErrorMessage {
    /// Borrow the sentence when this is a single message.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    /// Borrow the messages when this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::List(items) => f.write_str(&items.join("; ")),
        }
    }
}

/// Domain error payload.
///
/// Constructors capture the current [`TraceId`] when one is in scope.
///
/// # Examples
/// ```
/// use photos_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("Data not found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.message().as_text(), Some("Data not found"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: ErrorMessage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
}

impl Error {
    /// Create an error with a single-sentence message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_message(code, ErrorMessage::Text(message.into()))
    }

    fn with_message(code: ErrorCode, message: ErrorMessage) -> Self {
        Self {
            code,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message returned to clients.
    pub fn message(&self) -> &ErrorMessage {
        &self.message
    }

    /// Correlation identifier captured at construction, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Replace the trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = Some(trace_id.into());
        self
    }

    /// Validation failure carrying every violated rule, in order.
    ///
    /// # Examples
    /// ```
    /// use photos_backend::domain::Error;
    ///
    /// let err = Error::validation(vec!["Image URL cannot be empty".to_owned()]);
    /// assert_eq!(err.message().as_list().map(<[String]>::len), Some(1));
    /// ```
    pub fn validation(messages: Vec<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, ErrorMessage::List(messages))
    }

    /// Convenience constructor for [`ErrorCode::Unauthorized`].
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidToken`].
    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidToken, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Error for requests that matched no route or method.
    pub fn page_not_found() -> Self {
        Self::not_found("Page not found")
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.message.fmt(f)
    }
}

impl std::error::Error for Error {}

/// Kinds of stored resource a lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A photo record.
    Photo,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Photo => f.write_str("photo"),
        }
    }
}

/// A single-key lookup found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} {key} not found")]
pub struct NotFoundFailure {
    /// What was being looked up.
    pub kind: ResourceKind,
    /// The key that missed.
    pub key: String,
}

impl NotFoundFailure {
    /// Record a miss for `kind` under `key`.
    pub fn new(kind: ResourceKind, key: impl fmt::Display) -> Self {
        Self {
            kind,
            key: key.to_string(),
        }
    }
}

impl From<NotFoundFailure> for Error {
    fn from(failure: NotFoundFailure) -> Self {
        tracing::debug!(kind = %failure.kind, key = %failure.key, "lookup missed");
        Error::not_found("Data not found")
    }
}
