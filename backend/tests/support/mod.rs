//! Shared fixtures for the HTTP integration suites.

use std::sync::Arc;
use std::time::Duration;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use mockable::DefaultClock;
use serde_json::Value;

use photos_backend::domain::ports::{PhotoRepository, UserRepository};
use photos_backend::domain::{
    AccountService, CredentialCodec, NewPhoto, NewUser, Photo, PhotoService, PrincipalResolver,
    SigningSecret, TRACE_ID_HEADER, UserId,
};
use photos_backend::inbound::http::app::AppDependencies;
use photos_backend::inbound::http::health::HealthState;
use photos_backend::inbound::http::state::HttpState;
use photos_backend::outbound::memory::{InMemoryPhotoRepository, InMemoryUserRepository};
use photos_backend::outbound::password_hasher::Argon2PasswordHasher;

const SECRET: &[u8] = b"integration-suite-signing-secret-0123456789";

/// Application dependencies over in-memory stores seeded with user `acong`
/// (id 1) and one photo (id 1).
pub struct World {
    pub deps: AppDependencies,
    pub codec: Arc<CredentialCodec>,
    pub seeded_photo: Photo,
}

impl World {
    /// A valid `Authorization` value for `id`.
    pub fn bearer_for(&self, id: i32, email: &str) -> String {
        let token = self
            .codec
            .encode(UserId::new(id), email)
            .expect("sign credential");
        format!("Bearer {token}")
    }
}

pub async fn world() -> World {
    let users = Arc::new(InMemoryUserRepository::default());
    let photos = Arc::new(InMemoryPhotoRepository::default());
    let owner = users
        .insert(&NewUser {
            username: "acong".to_owned(),
            email: "acong@mail.com".to_owned(),
            password_hash: "$2b$10$seed".to_owned(),
        })
        .await
        .expect("seed user");
    let seeded_photo = photos
        .insert(&NewPhoto {
            title: "Default Photo".to_owned(),
            caption: "Default Photo caption".to_owned(),
            image_url: "http://image.com/defaultphoto.png".to_owned(),
            owner_id: owner.id,
        })
        .await
        .expect("seed photo");

    let codec = Arc::new(CredentialCodec::new(
        &SigningSecret::new(SECRET.to_vec()),
        Duration::from_secs(3600),
        Arc::new(DefaultClock),
    ));
    let hasher = Arc::new(Argon2PasswordHasher::with_cost(8, 1, 1).expect("cheap hash cost"));
    let accounts = Arc::new(AccountService::new(users.clone(), hasher, codec.clone()));
    let service = Arc::new(PhotoService::new(photos, users.clone()));
    let http_state = HttpState::new(
        codec.clone(),
        PrincipalResolver::new(users),
        service.clone(),
        service,
        accounts,
    );

    let health_state = HealthState::new();
    health_state.mark_ready();
    World {
        deps: AppDependencies {
            health_state: web::Data::new(health_state),
            http_state: web::Data::new(http_state),
        },
        codec,
        seeded_photo,
    }
}

/// Status, trace header and JSON body of a response.
pub struct Reply {
    pub status: StatusCode,
    pub trace_id: Option<String>,
    pub body: Value,
}

impl Reply {
    pub fn code(&self) -> Option<&str> {
        self.body.get("code").and_then(Value::as_str)
    }

    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }
}

pub async fn send<S, R, B>(app: &S, request: R) -> Reply
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let response = actix_test::call_service(app, request).await;
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = actix_test::read_body(response).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    Reply {
        status,
        trace_id,
        body,
    }
}
