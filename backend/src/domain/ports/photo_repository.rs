//! Port abstraction for photo persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewPhoto, Photo, PhotoId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by photo repository adapters.
    pub enum PhotoPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "photo repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "photo repository query failed: {message}",
    }
}

/// Photo store. Timestamps and identifiers are assigned by the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// Fetch a photo by identifier; `None` when no row matches.
    async fn find_by_id(&self, id: PhotoId) -> Result<Option<Photo>, PhotoPersistenceError>;

    /// Every stored photo, ordered by identifier ascending.
    async fn list_all(&self) -> Result<Vec<Photo>, PhotoPersistenceError>;

    /// Persist a validated photo and return the stored record.
    async fn insert(&self, photo: &NewPhoto) -> Result<Photo, PhotoPersistenceError>;
}
