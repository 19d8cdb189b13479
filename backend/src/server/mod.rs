//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{ServerConfig, ServerSettings};

use state_builders::build_http_state;

use actix_web::dev::Server;
use actix_web::{HttpServer, web};

use photos_backend::inbound::http::app::{AppDependencies, build_app};
use photos_backend::inbound::http::health::HealthState;
#[cfg(debug_assertions)]
use photos_backend::ApiDoc;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Construct an Actix HTTP server for the photo API.
///
/// Readiness is flagged once the listener is bound.
///
/// # Errors
/// Propagates [`std::io::Error`] when the stores cannot be opened or the
/// socket cannot be bound.
pub async fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config).await?);
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    .bind(config.bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
