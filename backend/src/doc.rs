//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the photo, account and health endpoints, the schema wrappers
//! from the inbound layer and the bearer security scheme. The document is
//! served by Swagger UI in debug builds and printed by the `openapi-dump`
//! binary.

use crate::inbound::http::photos::CreatePhotoRequest;
use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorMessageSchema, ErrorSchema, IssuedCredentialSchema, PhotoSchema,
    PhotoWithOwnerSchema, UserSchema,
};
use crate::inbound::http::users::{LoginRequest, RegisterRequest};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the `bearer` HTTP authentication scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("HS256-signed credential sent as `Bearer <token>`."))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Photos API",
        description = "Bearer-authenticated photo resources, account sign-up and login, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::photos::list_photos,
        crate::inbound::http::photos::get_photo,
        crate::inbound::http::photos::create_photo,
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        PhotoSchema,
        PhotoWithOwnerSchema,
        UserSchema,
        CreatePhotoRequest,
        RegisterRequest,
        LoginRequest,
        IssuedCredentialSchema,
        ErrorSchema,
        ErrorCodeSchema,
        ErrorMessageSchema
    )),
    tags(
        (name = "photos", description = "Photo resources; every route requires a bearer credential"),
        (name = "users", description = "Registration and login; no credential required"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
