//! Domain primitives, services and ports.
//!
//! Purpose: define the strongly typed entities and rules behind the photo
//! API. Nothing in here knows about Actix or Diesel; inbound adapters map the
//! tagged failures declared here onto HTTP, outbound adapters implement the
//! ports.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic error payload.
//! - `CredentialCodec` / `Claims`: signed bearer credential handling.
//! - `PrincipalResolver` / `Principal` / `AuthFailure`: request identity.
//! - `Photo` / `PhotoDraft` / `NewPhoto`: photo records and the create rules.
//! - `PhotoService`: the photo use-cases behind the HTTP handlers.
//! - `Registration` / `LoginCredentials` / `AccountService`: sign-up and
//!   login.

pub mod account;
pub mod account_service;
pub mod auth;
pub mod credential;
pub mod error;
pub mod photo;
pub mod photo_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::account::{
    AccountValidationError, IssuedCredential, LoginCredentials, Registration,
};
pub use self::account_service::AccountService;
pub use self::auth::{AuthFailure, Principal, PrincipalResolver, ResolutionFailure};
pub use self::credential::{Claims, CredentialCodec, CredentialError, SigningSecret};
pub use self::error::{Error, ErrorCode, ErrorMessage, NotFoundFailure, ResourceKind};
pub use self::photo::{NewPhoto, Photo, PhotoDraft, PhotoId, PhotoValidationError, PhotoWithOwner};
pub use self::photo_service::PhotoService;
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserAccount, UserId};

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
