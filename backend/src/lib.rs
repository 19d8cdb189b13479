//! Photos backend library modules.
//!
//! The crate is laid out as a small hexagon: `domain` holds the credential,
//! principal and photo rules plus the ports they depend on, `inbound` adapts
//! them to Actix, and `outbound` provides the Diesel and in-memory stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
