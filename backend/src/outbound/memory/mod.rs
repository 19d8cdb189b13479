//! In-process repositories backed by `Mutex`-guarded maps.
//!
//! Used when no database URL is configured and by the HTTP tests. Identifiers
//! are assigned sequentially from 1 and timestamps come from the injected
//! clock, mirroring what the PostgreSQL adapters return.

mod photo_repository;
mod user_repository;

pub use photo_repository::InMemoryPhotoRepository;
pub use user_repository::InMemoryUserRepository;

use std::sync::{Mutex, MutexGuard};

/// Lock `mutex`, recovering the data if a previous holder panicked.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
