//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their JSON shape so the HTTP adapter can document
//! them; they are never constructed.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No usable identity was presented, or it did not resolve to a user.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// A credential was presented but could not be verified.
    #[schema(rename = "invalid_token")]
    InvalidToken,
    /// The requested resource or route does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::ErrorMessage`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorMessage)]
#[serde(untagged)]
pub enum ErrorMessageSchema {
    /// A single sentence.
    #[schema(example = "Invalid token")]
    Text(String),
    /// One message per violated validation rule.
    List(Vec<String>),
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_token")]
    code: ErrorCodeSchema,
    /// Sentence, or list of validation messages.
    message: ErrorMessageSchema,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "acong")]
    username: String,
    #[schema(example = "acong@mail.com")]
    email: String,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::Photo`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Photo)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PhotoSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Title Testing")]
    title: String,
    /// Always the upper-cased title, a space, then the image URL.
    #[schema(example = "TITLE TESTING http://percobaan.com")]
    caption: String,
    #[schema(example = "http://percobaan.com")]
    image_url: String,
    #[schema(example = 1)]
    owner_id: i32,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::PhotoWithOwner`].
#[derive(ToSchema)]
#[schema(as = crate::domain::PhotoWithOwner)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct PhotoWithOwnerSchema {
    #[serde(flatten)]
    photo: PhotoSchema,
    owner: Option<UserSchema>,
}

/// OpenAPI schema for [`crate::domain::IssuedCredential`].
#[derive(ToSchema)]
#[schema(as = crate::domain::IssuedCredential)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct IssuedCredentialSchema {
    /// HS256 bearer credential for the `Authorization` header.
    #[schema(example = "eyJhbGciOiJIUzI1NiJ9.eyJpZCI6MX0.signature")]
    token: String,
}
