//! Registration and login through the full application, ending with the
//! issued credential being accepted by the photo routes.

mod support;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test as actix_test;
use photos_backend::inbound::http::app::build_app;
use rstest::rstest;
use serde_json::{Value, json};

use support::{send, world};

fn register_request(email: &str, password: &str) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/users/register")
        .set_json(json!({
            "username": "budi",
            "email": email,
            "password": password
        }))
}

fn login_request(email: &str, password: &str) -> actix_test::TestRequest {
    actix_test::TestRequest::post()
        .uri("/users/login")
        .set_json(json!({ "email": email, "password": password }))
}

#[rstest]
#[actix_web::test]
async fn registered_users_can_log_in_and_list_photos() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;

    let registered = send(&app, register_request("budi@mail.com", "secret").to_request()).await;
    assert_eq!(registered.status, StatusCode::CREATED);
    assert_eq!(registered.body.get("id").and_then(Value::as_i64), Some(2));
    assert_eq!(
        registered.body.get("username").and_then(Value::as_str),
        Some("budi")
    );
    assert!(registered.body.get("password").is_none());

    let logged_in = send(&app, login_request("budi@mail.com", "secret").to_request()).await;
    assert_eq!(logged_in.status, StatusCode::OK);
    let token = logged_in
        .body
        .get("token")
        .and_then(Value::as_str)
        .expect("token issued");
    let claims = world.codec.decode(token).expect("issued token verifies");
    assert_eq!(claims.subject_email(), "budi@mail.com");

    let listing = actix_test::TestRequest::get()
        .uri("/photos")
        .insert_header((AUTHORIZATION, format!("Bearer {token}")))
        .to_request();
    let reply = send(&app, listing).await;
    assert_eq!(reply.status, StatusCode::OK);
    let seeded = serde_json::to_value(&world.seeded_photo).expect("serialise seeded photo");
    assert_eq!(reply.body, json!([seeded]));
}

#[rstest]
#[case::wrong_password("budi@mail.com", "wrong")]
#[case::unknown_email("nobody@mail.com", "secret")]
#[actix_web::test]
async fn bad_logins_are_unauthorized(#[case] email: &str, #[case] password: &str) {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let registered = send(&app, register_request("budi@mail.com", "secret").to_request()).await;
    assert_eq!(registered.status, StatusCode::CREATED);

    let reply = send(&app, login_request(email, password).to_request()).await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    assert_eq!(reply.code(), Some("unauthorized"));
    assert_eq!(reply.message(), Some("Invalid email or password"));
    assert!(reply.body.get("token").is_none());
}

#[rstest]
#[actix_web::test]
async fn a_taken_email_cannot_register_twice() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;

    let reply = send(&app, register_request("acong@mail.com", "secret").to_request()).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.code(), Some("invalid_request"));
    assert_eq!(
        reply.body.get("message"),
        Some(&json!(["Email already registered"]))
    );
}

#[rstest]
#[actix_web::test]
async fn empty_registration_fields_are_listed() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let request = actix_test::TestRequest::post()
        .uri("/users/register")
        .set_json(json!({ "username": "", "email": "", "password": "" }))
        .to_request();

    let reply = send(&app, request).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        reply.body.get("message"),
        Some(&json!([
            "Username cannot be empty",
            "Email cannot be empty",
            "Password cannot be empty"
        ]))
    );
}

#[rstest]
#[actix_web::test]
async fn account_routes_need_no_credential_but_reject_get() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;

    let reply = send(
        &app,
        actix_test::TestRequest::get().uri("/users/login").to_request(),
    )
    .await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.message(), Some("Page not found"));
}
