//! Application factory shared by the server binary and the HTTP tests.

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::inbound::http::auth_gate::AuthorizationGate;
use crate::inbound::http::fallback::{json_config, page_not_found, path_config};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::photos::{create_photo, get_photo, list_photos};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{login, register};

/// Shared state handed to every worker's app instance.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
}

/// Build the photo API.
///
/// `/photos` and everything beneath it is gated; the account routes and
/// health probes are not.
/// Unmatched routes and methods fall through to `404 Page not found`.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let photos = web::scope("/photos")
        .wrap(AuthorizationGate)
        .service(list_photos)
        .service(create_photo)
        .service(get_photo);

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .app_data(path_config())
        .wrap(Trace)
        .service(photos)
        .service(register)
        .service(login)
        .service(ready)
        .service(live)
        .default_service(web::to(page_not_found))
}
