//! Driving ports for the photo use-cases.
//!
//! HTTP handlers depend on these traits rather than on the concrete service,
//! so tests can swap in a mock and adapters stay free of repository wiring.

use async_trait::async_trait;

use crate::domain::{Error, Photo, PhotoDraft, PhotoId, PhotoWithOwner, Principal};

/// Read-side photo operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotosQuery: Send + Sync {
    /// Every photo, ordered by id ascending.
    async fn list_photos(&self) -> Result<Vec<Photo>, Error>;

    /// One photo together with its owner.
    async fn find_photo(&self, id: PhotoId) -> Result<PhotoWithOwner, Error>;
}

/// Write-side photo operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PhotosCommand: Send + Sync {
    /// Validate, normalise and store a photo on behalf of `principal`.
    async fn create_photo(&self, principal: &Principal, draft: PhotoDraft)
    -> Result<Photo, Error>;
}
