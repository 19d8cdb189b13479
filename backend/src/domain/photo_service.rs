//! Photo use-cases implementing the driving ports.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    PhotoPersistenceError, PhotoRepository, PhotosCommand, PhotosQuery, UserPersistenceError,
    UserRepository,
};
use crate::domain::{
    Error, NotFoundFailure, Photo, PhotoDraft, PhotoId, PhotoWithOwner, Principal, ResourceKind,
};

/// Photo service backed by the photo and user stores.
#[derive(Clone)]
pub struct PhotoService {
    photos: Arc<dyn PhotoRepository>,
    users: Arc<dyn UserRepository>,
}

impl PhotoService {
    /// Create a service over the given repositories.
    pub fn new(photos: Arc<dyn PhotoRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { photos, users }
    }

    fn map_photo_error(error: PhotoPersistenceError) -> Error {
        error!(%error, "photo repository failed");
        Error::internal(format!("photo repository error: {error}"))
    }

    fn map_user_error(error: UserPersistenceError) -> Error {
        error!(%error, "user repository failed");
        Error::internal(format!("user repository error: {error}"))
    }
}

#[async_trait]
impl PhotosQuery for PhotoService {
    async fn list_photos(&self) -> Result<Vec<Photo>, Error> {
        self.photos.list_all().await.map_err(Self::map_photo_error)
    }

    async fn find_photo(&self, id: PhotoId) -> Result<PhotoWithOwner, Error> {
        let photo = self
            .photos
            .find_by_id(id)
            .await
            .map_err(Self::map_photo_error)?
            .ok_or_else(|| NotFoundFailure::new(ResourceKind::Photo, id))?;
        let owner = self
            .users
            .find_by_id(photo.owner_id)
            .await
            .map_err(Self::map_user_error)?;
        Ok(PhotoWithOwner { photo, owner })
    }
}

#[async_trait]
impl PhotosCommand for PhotoService {
    async fn create_photo(
        &self,
        principal: &Principal,
        draft: PhotoDraft,
    ) -> Result<Photo, Error> {
        let new_photo = draft.validate(principal.id)?;
        let photo = self
            .photos
            .insert(&new_photo)
            .await
            .map_err(Self::map_photo_error)?;
        info!(photo_id = %photo.id, owner_id = %photo.owner_id, "photo created");
        Ok(photo)
    }
}
