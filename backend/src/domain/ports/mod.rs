//! Domain ports: the traits outbound adapters implement and the driving
//! traits inbound adapters call.

mod accounts_api;
mod macros;
mod password_hasher;
mod photo_repository;
mod photos_api;
mod user_repository;

pub(crate) use macros::define_port_error;

pub use self::accounts_api::AccountsCommand;
#[cfg(test)]
pub use self::accounts_api::MockAccountsCommand;
#[cfg(test)]
pub use self::password_hasher::MockPasswordHasher;
pub use self::password_hasher::{PasswordHashError, PasswordHasher};

#[cfg(test)]
pub use self::photo_repository::MockPhotoRepository;
pub use self::photo_repository::{PhotoPersistenceError, PhotoRepository};
#[cfg(test)]
pub use self::photos_api::{MockPhotosCommand, MockPhotosQuery};
pub use self::photos_api::{PhotosCommand, PhotosQuery};
#[cfg(test)]
pub use self::user_repository::MockUserRepository;
pub use self::user_repository::{UserPersistenceError, UserRepository};
