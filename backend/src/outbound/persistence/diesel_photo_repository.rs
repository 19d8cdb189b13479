//! PostgreSQL-backed [`PhotoRepository`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{PhotoPersistenceError, PhotoRepository};
use crate::domain::{NewPhoto, Photo, PhotoId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewPhotoRow, PhotoRow};
use super::pool::{DbPool, PoolError};
use super::schema::photos;

/// Diesel implementation of the photo store.
#[derive(Clone)]
pub struct DieselPhotoRepository {
    pool: DbPool,
}

impl DieselPhotoRepository {
    /// Repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> PhotoPersistenceError {
    map_pool_error(error, PhotoPersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> PhotoPersistenceError {
    map_diesel_error(
        error,
        PhotoPersistenceError::query,
        PhotoPersistenceError::connection,
    )
}

#[async_trait]
impl PhotoRepository for DieselPhotoRepository {
    async fn find_by_id(&self, id: PhotoId) -> Result<Option<Photo>, PhotoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = photos::table
            .find(id.get())
            .select(PhotoRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        Ok(row.map(Photo::from))
    }

    async fn list_all(&self) -> Result<Vec<Photo>, PhotoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = photos::table
            .order(photos::id.asc())
            .select(PhotoRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(rows.into_iter().map(Photo::from).collect())
    }

    async fn insert(&self, photo: &NewPhoto) -> Result<Photo, PhotoPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::insert_into(photos::table)
            .values(NewPhotoRow {
                title: &photo.title,
                caption: &photo.caption,
                image_url: &photo.image_url,
                owner_id: photo.owner_id.get(),
            })
            .returning(PhotoRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(Photo::from(row))
    }
}
