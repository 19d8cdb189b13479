//! Builders wiring repositories and services into [`HttpState`].

use std::sync::Arc;

use mockable::{Clock, DefaultClock};
use tracing::{info, warn};

use photos_backend::domain::ports::{PhotoRepository, UserRepository};
use photos_backend::domain::{AccountService, CredentialCodec, PhotoService, PrincipalResolver};
use photos_backend::inbound::http::state::HttpState;
use photos_backend::outbound::memory::{InMemoryPhotoRepository, InMemoryUserRepository};
use photos_backend::outbound::password_hasher::Argon2PasswordHasher;
use photos_backend::outbound::persistence::{
    DbPool, DieselPhotoRepository, DieselUserRepository, PoolConfig,
};

use super::ServerConfig;

type Stores = (Arc<dyn UserRepository>, Arc<dyn PhotoRepository>);

/// Open the configured database, or fall back to process memory.
///
/// # Errors
/// Returns [`std::io::Error`] when a database is configured but the pool
/// cannot be built.
async fn build_stores(
    pool_config: Option<PoolConfig>,
    clock: Arc<dyn Clock + Send + Sync>,
) -> std::io::Result<Stores> {
    match pool_config {
        Some(config) => {
            let pool = DbPool::new(config)
                .await
                .map_err(|err| std::io::Error::other(err.to_string()))?;
            info!("using PostgreSQL stores");
            Ok((
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselPhotoRepository::new(pool)),
            ))
        }
        None => {
            warn!("no database configured; using in-memory stores");
            Ok((
                Arc::new(InMemoryUserRepository::new(Arc::clone(&clock))),
                Arc::new(InMemoryPhotoRepository::new(clock)),
            ))
        }
    }
}

/// Assemble the shared HTTP state from `config`.
///
/// # Errors
/// Propagates store construction failures.
pub async fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(DefaultClock);
    let (users, photos) = build_stores(config.pool_config.clone(), Arc::clone(&clock)).await?;

    let codec = Arc::new(CredentialCodec::new(
        &config.credentials.secret,
        config.credentials.ttl,
        clock,
    ));
    let accounts = Arc::new(AccountService::new(
        Arc::clone(&users),
        Arc::new(Argon2PasswordHasher::new()),
        Arc::clone(&codec),
    ));
    let service = Arc::new(PhotoService::new(photos, Arc::clone(&users)));
    Ok(HttpState::new(
        codec,
        PrincipalResolver::new(users),
        service.clone(),
        service,
        accounts,
    ))
}
