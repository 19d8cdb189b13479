//! Catch-all error routing for the HTTP surface.
//!
//! Requests that match no route, JSON bodies that fail to parse and path
//! segments that fail to extract all end up in the same [`Error`] shape as
//! handler failures.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Default service: any unmatched path or method is `404 Page not found`.
pub async fn page_not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    debug!(method = %req.method(), path = req.path(), "no route matched");
    Err(Error::page_not_found())
}

/// JSON extractor configuration turning payload errors into `400` lists.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

/// Path extractor configuration: a segment that does not parse names no
/// record, so it is reported as `404 Data not found`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(path_error)
}

pub(crate) const BODY_NOT_JSON: &str = "Request body must be valid JSON";
pub(crate) const BODY_TOO_LARGE: &str = "Request body is too large";
pub(crate) const BODY_WRONG_CONTENT_TYPE: &str = "Content type must be application/json";

/// Parser and serde diagnostics stay in the log. Clients get a fixed message
/// per failure class.
fn json_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected JSON payload");
    let message = match err {
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            BODY_TOO_LARGE
        }
        JsonPayloadError::ContentType => BODY_WRONG_CONTENT_TYPE,
        _ => BODY_NOT_JSON,
    };
    Error::validation(vec![message.to_owned()]).into()
}

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(path = req.path(), error = %err, "rejected path parameters");
    Error::not_found("Data not found").into()
}
