//! Test helpers for inbound HTTP components.

use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use mockable::DefaultClock;

use crate::domain::ports::{PhotoRepository, UserRepository};
use crate::domain::{
    AccountService, CredentialCodec, NewPhoto, NewUser, Photo, PhotoService, PrincipalResolver,
    SigningSecret, UserId,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::{InMemoryPhotoRepository, InMemoryUserRepository};
use crate::outbound::password_hasher::Argon2PasswordHasher;

const TEST_SECRET: &[u8] = b"inbound-http-test-secret-0123456789";

/// In-memory stores plus the state handlers see.
pub struct TestHarness {
    state: web::Data<HttpState>,
    codec: Arc<CredentialCodec>,
    photos: Arc<InMemoryPhotoRepository>,
    user_id: UserId,
}

impl TestHarness {
    /// Shared state for `App::app_data`.
    pub fn state(&self) -> web::Data<HttpState> {
        self.state.clone()
    }

    /// Id of the seeded user.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Sign a credential with the harness secret.
    pub fn token_for(&self, id: UserId, email: &str) -> String {
        self.codec.encode(id, email).expect("sign test credential")
    }

    /// Store another photo directly, bypassing validation.
    pub async fn store_photo(&self, title: &str) -> Photo {
        self.photos
            .insert(&NewPhoto {
                title: title.to_owned(),
                caption: format!("{title} caption"),
                image_url: "http://image.com/defaultphoto.png".to_owned(),
                owner_id: self.user_id,
            })
            .await
            .expect("store photo")
    }
}

/// Harness seeded with user `acong` (id 1) and no photos.
///
/// The seeded hash is not a valid Argon2 hash, so `acong` cannot log in;
/// account tests register their own users.
pub async fn seeded_harness() -> TestHarness {
    let users = Arc::new(InMemoryUserRepository::default());
    let photos = Arc::new(InMemoryPhotoRepository::default());
    let user = users
        .insert(&NewUser {
            username: "acong".to_owned(),
            email: "acong@mail.com".to_owned(),
            password_hash: "$2b$10$test".to_owned(),
        })
        .await
        .expect("seed user");

    let codec = Arc::new(CredentialCodec::new(
        &SigningSecret::new(TEST_SECRET.to_vec()),
        Duration::from_secs(3600),
        Arc::new(DefaultClock),
    ));
    let hasher = Arc::new(Argon2PasswordHasher::with_cost(8, 1, 1).expect("test hash cost"));
    let accounts = Arc::new(AccountService::new(users.clone(), hasher, codec.clone()));
    let service = Arc::new(PhotoService::new(photos.clone(), users.clone()));
    let state = HttpState::new(
        codec.clone(),
        PrincipalResolver::new(users),
        service.clone(),
        service,
        accounts,
    );

    TestHarness {
        state: web::Data::new(state),
        codec,
        photos,
        user_id: user.id,
    }
}
