//! In-memory [`PhotoRepository`].

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};

use crate::domain::ports::{PhotoPersistenceError, PhotoRepository};
use crate::domain::{NewPhoto, Photo, PhotoId};

use super::lock;

#[derive(Default)]
struct PhotoTable {
    last_id: i32,
    rows: BTreeMap<PhotoId, Photo>,
}

/// Volatile photo store; iteration order is id order.
pub struct InMemoryPhotoRepository {
    clock: Arc<dyn Clock + Send + Sync>,
    table: Mutex<PhotoTable>,
}

impl InMemoryPhotoRepository {
    /// Empty store stamping rows with `clock`.
    pub fn new(clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self {
            clock,
            table: Mutex::new(PhotoTable::default()),
        }
    }
}

impl Default for InMemoryPhotoRepository {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

#[async_trait]
impl PhotoRepository for InMemoryPhotoRepository {
    async fn find_by_id(&self, id: PhotoId) -> Result<Option<Photo>, PhotoPersistenceError> {
        Ok(lock(&self.table).rows.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Photo>, PhotoPersistenceError> {
        Ok(lock(&self.table).rows.values().cloned().collect())
    }

    async fn insert(&self, photo: &NewPhoto) -> Result<Photo, PhotoPersistenceError> {
        let mut table = lock(&self.table);
        table.last_id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| PhotoPersistenceError::query("photo id sequence exhausted"))?;
        let now = self.clock.utc();
        let stored = Photo {
            id: PhotoId::new(table.last_id),
            title: photo.title.clone(),
            caption: photo.caption.clone(),
            image_url: photo.image_url.clone(),
            owner_id: photo.owner_id,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use rstest::rstest;

    fn new_photo(title: &str) -> NewPhoto {
        NewPhoto {
            title: title.to_owned(),
            caption: format!("{} http://image.com/a.png", title.to_uppercase()),
            image_url: "http://image.com/a.png".to_owned(),
            owner_id: UserId::new(1),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn list_all_returns_photos_in_id_order() {
        let repo = InMemoryPhotoRepository::default();
        for title in ["first", "second", "third"] {
            repo.insert(&new_photo(title)).await.expect("insert photo");
        }

        let titles: Vec<_> = repo
            .list_all()
            .await
            .expect("list")
            .into_iter()
            .map(|photo| photo.title)
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[rstest]
    #[tokio::test]
    async fn find_by_id_misses_unknown_ids() {
        let repo = InMemoryPhotoRepository::default();
        repo.insert(&new_photo("only")).await.expect("insert photo");
        assert!(repo.find_by_id(PhotoId::new(123)).await.expect("lookup").is_none());
        assert!(repo.find_by_id(PhotoId::new(1)).await.expect("lookup").is_some());
    }
}
