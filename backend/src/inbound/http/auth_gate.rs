//! Bearer authorization middleware.
//!
//! Wraps every protected scope. The gate reads `Authorization`, verifies the
//! bearer credential, resolves the subject to a stored user and attaches the
//! resulting [`Principal`] to the request extensions. The first failing step
//! short-circuits with the translated error response; the wrapped service is
//! never called.
//!
//! Handlers read the principal back through the [`Authenticated`] extractor.

use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::body::EitherBody;
use actix_web::dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{AUTHORIZATION, HeaderValue};
use actix_web::{FromRequest, HttpMessage, HttpRequest, web};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::error;

use crate::domain::auth::bearer_token;
use crate::domain::{AuthFailure, Error, Principal};
use crate::inbound::http::state::HttpState;

/// Verify the credential carried by `header` and resolve its principal.
///
/// # Errors
/// Returns the [`AuthFailure`] for the first step that fails.
pub async fn authenticate(
    state: &HttpState,
    header: Option<&HeaderValue>,
) -> Result<Principal, AuthFailure> {
    let raw = header
        .map(|value| {
            value
                .to_str()
                .map_err(|_| AuthFailure::MalformedCredential)
        })
        .transpose()?;
    let token = bearer_token(raw)?;
    let claims = state
        .credentials
        .decode(token)
        .map_err(|_| AuthFailure::MalformedCredential)?;
    state.principals.resolve(claims.subject_id()).await
}

/// Middleware factory guarding a scope behind bearer authentication.
///
/// Requires `web::Data<HttpState>` in app data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use photos_backend::inbound::http::auth_gate::AuthorizationGate;
///
/// let app = App::new().service(web::scope("/photos").wrap(AuthorizationGate));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthorizationGate;

impl<S, B> Transform<S, ServiceRequest> for AuthorizationGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthorizationGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthorizationGateMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Service wrapper produced by [`AuthorizationGate`].
pub struct AuthorizationGateMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthorizationGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let Some(state) = req.app_data::<web::Data<HttpState>>().cloned() else {
                error!("authorization gate mounted without HttpState");
                let response = req.error_response(Error::internal("missing HTTP state"));
                return Ok(response.map_into_right_body());
            };

            let outcome = authenticate(&state, req.headers().get(AUTHORIZATION)).await;
            match outcome {
                Ok(principal) => {
                    req.extensions_mut().insert(principal);
                    let response = service.call(req).await?;
                    Ok(response.map_into_left_body())
                }
                Err(failure) => {
                    let response = req.error_response(Error::from(failure));
                    Ok(response.map_into_right_body())
                }
            }
        })
    }
}

/// Extractor yielding the principal attached by [`AuthorizationGate`].
///
/// Fails with `401 Unauthorized` when used on a route the gate does not
/// cover.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

impl Authenticated {
    /// Unwrap the principal.
    pub fn into_inner(self) -> Principal {
        self.0
    }
}

impl FromRequest for Authenticated {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let principal = req.extensions().get::<Principal>().cloned();
        ready(principal.map(Self).ok_or_else(|| {
            error!(path = req.path(), "principal missing; route is not gated");
            Error::unauthorized("Unauthorized")
        }))
    }
}
