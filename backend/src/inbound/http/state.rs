//! Shared HTTP adapter state.
//!
//! Handlers and the authorization gate receive this through
//! `actix_web::web::Data`, so they depend only on domain ports and services
//! and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AccountsCommand, PhotosCommand, PhotosQuery};
use crate::domain::{CredentialCodec, PrincipalResolver};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub credentials: Arc<CredentialCodec>,
    pub principals: PrincipalResolver,
    pub photos_query: Arc<dyn PhotosQuery>,
    pub photos: Arc<dyn PhotosCommand>,
    pub accounts: Arc<dyn AccountsCommand>,
}

impl HttpState {
    /// Bundle the credential codec, resolver, photo ports and account port.
    pub fn new(
        credentials: Arc<CredentialCodec>,
        principals: PrincipalResolver,
        photos_query: Arc<dyn PhotosQuery>,
        photos: Arc<dyn PhotosCommand>,
        accounts: Arc<dyn AccountsCommand>,
    ) -> Self {
        Self {
            credentials,
            principals,
            photos_query,
            photos,
            accounts,
        }
    }
}
