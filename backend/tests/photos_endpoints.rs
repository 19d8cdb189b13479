//! End-to-end behaviour of the photo API over in-memory stores.
//!
//! Requests go through the full application: trace middleware, the bearer
//! gate, extractors, handlers and the error translator.

mod support;

use actix_web::http::StatusCode;
use actix_web::http::header::AUTHORIZATION;
use actix_web::test as actix_test;
use photos_backend::inbound::http::app::build_app;
use rstest::rstest;
use serde_json::{Value, json};

use support::{Reply, send, world};

#[rstest]
#[case::no_header(None, StatusCode::UNAUTHORIZED, "unauthorized", "Unauthorized")]
#[case::empty_token(Some("Bearer "), StatusCode::UNAUTHORIZED, "invalid_token", "Invalid token")]
#[case::garbage_token(
    Some("Bearer wrong.token.input"),
    StatusCode::UNAUTHORIZED,
    "invalid_token",
    "Invalid token"
)]
#[case::wrong_scheme(Some("Basic YWNvbmc6c2VjcmV0"), StatusCode::UNAUTHORIZED, "invalid_token", "Invalid token")]
#[actix_web::test]
async fn listing_requires_a_valid_bearer_credential(
    #[case] authorization: Option<&str>,
    #[case] status: StatusCode,
    #[case] code: &str,
    #[case] message: &str,
) {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let mut request = actix_test::TestRequest::get().uri("/photos");
    if let Some(value) = authorization {
        request = request.insert_header((AUTHORIZATION, value));
    }

    let reply = send(&app, request.to_request()).await;
    assert_eq!(reply.status, status);
    assert_eq!(reply.code(), Some(code));
    assert_eq!(reply.message(), Some(message));
}

#[rstest]
#[actix_web::test]
async fn credentials_for_deleted_users_are_unauthorized() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let request = actix_test::TestRequest::get()
        .uri("/photos")
        .insert_header((AUTHORIZATION, world.bearer_for(99, "ghost@mail.com")))
        .to_request();

    let reply = send(&app, request).await;
    assert_eq!(reply.status, StatusCode::UNAUTHORIZED);
    assert_eq!(reply.code(), Some("unauthorized"));
}

#[rstest]
#[actix_web::test]
async fn listing_returns_every_stored_photo() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let request = actix_test::TestRequest::get()
        .uri("/photos")
        .insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")))
        .to_request();

    let reply = send(&app, request).await;
    assert_eq!(reply.status, StatusCode::OK);
    let expected = serde_json::to_value(&world.seeded_photo).expect("serialise seeded photo");
    assert_eq!(reply.body, json!([expected]));

    let listed = &reply.body[0];
    assert_eq!(listed.get("id").and_then(Value::as_i64), Some(1));
    assert_eq!(listed.get("title").and_then(Value::as_str), Some("Default Photo"));
    assert_eq!(
        listed.get("caption").and_then(Value::as_str),
        Some("Default Photo caption")
    );
    assert_eq!(
        listed.get("image_url").and_then(Value::as_str),
        Some("http://image.com/defaultphoto.png")
    );
    assert_eq!(listed.get("owner_id").and_then(Value::as_i64), Some(1));
    assert!(listed.get("created_at").is_some_and(Value::is_string));
    assert!(listed.get("updated_at").is_some_and(Value::is_string));
}

#[rstest]
#[actix_web::test]
async fn fetching_a_photo_embeds_its_owner() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let request = actix_test::TestRequest::get()
        .uri("/photos/1")
        .insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")))
        .to_request();

    let reply = send(&app, request).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.body.get("id").and_then(Value::as_i64), Some(1));
    let owner = reply.body.get("owner").expect("owner embedded");
    assert_eq!(owner.get("username").and_then(Value::as_str), Some("acong"));
    assert!(owner.get("password").is_none());
}

#[rstest]
#[case::missing_row("/photos/123")]
#[case::non_numeric("/photos/abc")]
#[actix_web::test]
async fn unknown_photos_are_not_found(#[case] uri: &str) {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let request = actix_test::TestRequest::get()
        .uri(uri)
        .insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")))
        .to_request();

    let reply = send(&app, request).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.code(), Some("not_found"));
    assert_eq!(reply.message(), Some("Data not found"));
}

#[rstest]
#[actix_web::test]
async fn creating_a_photo_derives_its_caption() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let request = actix_test::TestRequest::post()
        .uri("/photos")
        .insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")))
        .set_json(json!({
            "title": "Title Testing",
            "caption": "Caption testing",
            "image_url": "http://percobaan.com"
        }))
        .to_request();

    let reply = send(&app, request).await;
    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(
        reply.body.get("caption").and_then(Value::as_str),
        Some("TITLE TESTING http://percobaan.com")
    );
    assert_eq!(reply.body.get("id").and_then(Value::as_i64), Some(2));
    assert_eq!(reply.body.get("owner_id").and_then(Value::as_i64), Some(1));

    let listing = actix_test::TestRequest::get()
        .uri("/photos")
        .insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")))
        .to_request();
    let reply = send(&app, listing).await;
    assert_eq!(reply.body.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[case::missing(json!({ "title": "Title Testing", "caption": "Caption testing" }))]
#[case::empty(json!({ "title": "Title Testing", "image_url": "" }))]
#[actix_web::test]
async fn photos_without_an_image_url_are_rejected(#[case] payload: Value) {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let request = actix_test::TestRequest::post()
        .uri("/photos")
        .insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")))
        .set_json(payload)
        .to_request();

    let reply = send(&app, request).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.code(), Some("invalid_request"));
    let messages = reply
        .body
        .get("message")
        .and_then(Value::as_array)
        .expect("list of messages");
    assert_eq!(messages.len(), 1);
    let first = messages[0].as_str().expect("text message");
    assert!(first.contains("cannot") || first.contains("URL"), "unexpected message: {first}");

    let listing = actix_test::TestRequest::get()
        .uri("/photos")
        .insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")))
        .to_request();
    let reply = send(&app, listing).await;
    assert_eq!(reply.body.as_array().map(Vec::len), Some(1));
}

#[rstest]
#[actix_web::test]
async fn photos_without_a_title_are_stored() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let request = actix_test::TestRequest::post()
        .uri("/photos")
        .insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")))
        .set_json(json!({ "image_url": "images/cat.png" }))
        .to_request();

    let reply = send(&app, request).await;
    assert_eq!(reply.status, StatusCode::CREATED);
    assert_eq!(reply.body.get("title").and_then(Value::as_str), Some(""));
    assert_eq!(
        reply.body.get("caption").and_then(Value::as_str),
        Some(" images/cat.png")
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let request = actix_test::TestRequest::post()
        .uri("/photos")
        .insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")))
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();

    let reply = send(&app, request).await;
    assert_eq!(reply.status, StatusCode::BAD_REQUEST);
    assert_eq!(reply.code(), Some("invalid_request"));
    assert_eq!(
        reply.body.get("message"),
        Some(&json!(["Request body must be valid JSON"]))
    );
}

#[rstest]
#[case::unknown_route("GET", "/albums", false)]
#[case::unsupported_method("PUT", "/photos", true)]
#[case::unsupported_item_method("DELETE", "/photos/1", true)]
#[actix_web::test]
async fn unmatched_requests_are_page_not_found(
    #[case] method: &str,
    #[case] uri: &str,
    #[case] authenticated: bool,
) {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;
    let method = actix_web::http::Method::from_bytes(method.as_bytes()).expect("method");
    let mut request = actix_test::TestRequest::default().method(method).uri(uri);
    if authenticated {
        request = request.insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")));
    }

    let reply = send(&app, request.to_request()).await;
    assert_eq!(reply.status, StatusCode::NOT_FOUND);
    assert_eq!(reply.message(), Some("Page not found"));
}

#[rstest]
#[actix_web::test]
async fn every_response_carries_a_trace_id() {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;

    let rejected: Reply = send(&app, actix_test::TestRequest::get().uri("/photos").to_request()).await;
    let trace_id = rejected.trace_id.expect("trace header on errors");
    assert_eq!(
        rejected.body.get("traceId").and_then(Value::as_str),
        Some(trace_id.as_str())
    );

    let accepted = send(
        &app,
        actix_test::TestRequest::get()
            .uri("/photos")
            .insert_header((AUTHORIZATION, world.bearer_for(1, "acong@mail.com")))
            .to_request(),
    )
    .await;
    assert!(accepted.trace_id.is_some());
}

#[rstest]
#[case("/health/ready")]
#[case("/health/live")]
#[actix_web::test]
async fn health_probes_skip_authentication(#[case] uri: &str) {
    let world = world().await;
    let app = actix_test::init_service(build_app(world.deps.clone())).await;

    let reply = send(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(reply.status, StatusCode::OK);
}
