//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories translate between Diesel rows and domain types and map every
//! driver failure onto their port's error enum. Row structs and the table
//! definitions are private to this module.
//!
//! ```ignore
//! use photos_backend::outbound::persistence::{DbPool, DieselPhotoRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/photos")).await?;
//! let photos = DieselPhotoRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_photo_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_photo_repository::DieselPhotoRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
