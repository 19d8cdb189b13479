//! Account API handlers.
//!
//! ```text
//! POST /users/register {"username":"acong","email":"acong@mail.com","password":"secret"}
//! POST /users/login    {"email":"acong@mail.com","password":"secret"}
//! ```
//!
//! Neither route needs a credential; login is how a client obtains one.

use actix_web::{HttpResponse, post, web};
use serde::Deserialize;

use crate::domain::{IssuedCredential, LoginCredentials, Registration};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, IssuedCredentialSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /users/register`.
///
/// Fields are optional at the wire level so that missing values surface as
/// validation messages rather than JSON errors.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "acong")]
    pub username: Option<String>,
    #[schema(example = "acong@mail.com")]
    pub email: Option<String>,
    #[schema(example = "secret")]
    pub password: Option<String>,
}

/// Request body for `POST /users/login`.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "acong@mail.com")]
    pub email: Option<String>,
    #[schema(example = "secret")]
    pub password: Option<String>,
}

/// Create an account.
#[utoipa::path(
    post,
    path = "/users/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registered user", body = UserSchema),
        (status = 400, description = "Validation failed or email taken", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "register",
    security([])
)]
#[post("/users/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let RegisterRequest {
        username,
        email,
        password,
    } = payload.into_inner();
    let registration =
        Registration::try_from_parts(username.as_deref(), email.as_deref(), password.as_deref())?;
    let user = state.accounts.register(registration).await?;
    Ok(HttpResponse::Created().json(user))
}

/// Exchange an email and password for a bearer credential.
#[utoipa::path(
    post,
    path = "/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed credential", body = IssuedCredentialSchema),
        (status = 400, description = "Validation failed", body = ErrorSchema),
        (status = 401, description = "Unknown email or wrong password", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/users/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<IssuedCredential>> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(email.as_deref(), password.as_deref())?;
    let issued = state.accounts.login(credentials).await?;
    Ok(web::Json(issued))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        MockAccountsCommand, MockPhotosCommand, MockPhotosQuery, MockUserRepository,
    };
    use crate::domain::{CredentialCodec, Error, PrincipalResolver};
    use crate::inbound::http::fallback::json_config;
    use crate::inbound::http::test_utils::seeded_harness;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::sync::Arc;

    async fn state_with(accounts: MockAccountsCommand) -> web::Data<HttpState> {
        let seeded = seeded_harness().await.state();
        web::Data::new(HttpState::new(
            Arc::<CredentialCodec>::clone(&seeded.credentials),
            PrincipalResolver::new(Arc::new(MockUserRepository::new())),
            Arc::new(MockPhotosQuery::new()),
            Arc::new(MockPhotosCommand::new()),
            Arc::new(accounts),
        ))
    }

    #[rstest]
    #[case::register("/users/register", json!({ "username": "acong", "password": "" }))]
    #[case::login("/users/login", json!({ "password": "secret" }))]
    #[actix_web::test]
    async fn invalid_payloads_never_reach_the_account_port(
        #[case] uri: &str,
        #[case] payload: Value,
    ) {
        let mut accounts = MockAccountsCommand::new();
        accounts.expect_register().never();
        accounts.expect_login().never();
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(accounts).await)
                .app_data(json_config())
                .service(register)
                .service(login),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri(uri)
            .set_json(payload)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("code").and_then(Value::as_str), Some("invalid_request"));
        assert!(body.get("message").is_some_and(Value::is_array));
    }

    #[rstest]
    #[actix_web::test]
    async fn login_returns_the_issued_token() {
        let mut accounts = MockAccountsCommand::new();
        accounts
            .expect_login()
            .withf(|credentials| credentials.email() == "acong@mail.com")
            .return_once(|_| {
                Ok(IssuedCredential {
                    token: "signed.token.value".to_owned(),
                })
            });
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(accounts).await)
                .service(login),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/users/login")
            .set_json(json!({ "email": " acong@mail.com ", "password": "secret" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!({ "token": "signed.token.value" }));
    }

    #[rstest]
    #[actix_web::test]
    async fn rejected_logins_are_unauthorized() {
        let mut accounts = MockAccountsCommand::new();
        accounts
            .expect_login()
            .return_once(|_| Err(Error::unauthorized("Invalid email or password")));
        let app = actix_test::init_service(
            App::new()
                .app_data(state_with(accounts).await)
                .service(login),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/users/login")
            .set_json(json!({ "email": "acong@mail.com", "password": "wrong" }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            body.get("message").and_then(Value::as_str),
            Some("Invalid email or password")
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn registration_returns_201_without_the_password() {
        let harness = seeded_harness().await;
        let app = actix_test::init_service(
            App::new()
                .app_data(harness.state())
                .app_data(json_config())
                .service(register),
        )
        .await;

        let request = actix_test::TestRequest::post()
            .uri("/users/register")
            .set_json(json!({
                "username": "budi",
                "email": "budi@mail.com",
                "password": "secret"
            }))
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.get("id").and_then(Value::as_i64), Some(2));
        assert_eq!(body.get("email").and_then(Value::as_str), Some("budi@mail.com"));
        assert!(body.get("password").is_none());
        assert!(body.get("password_hash").is_none());
    }
}
