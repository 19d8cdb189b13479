//! Turns [`Error`] into Actix responses.
//!
//! Handlers, the authorization gate and the extractor hooks in
//! [`fallback`](super::fallback) all fail with [`Error`]. This module is the
//! only place where a failure becomes a status line and a JSON body.

use std::borrow::Cow;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED: &str = "Internal server error";

const fn http_status(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Unauthorized | ErrorCode::InvalidToken => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The body a client is allowed to see.
///
/// Internal failures keep their trace id but lose their message; everything
/// else is already client-safe and is borrowed as is.
fn client_view(error: &Error) -> Cow<'_, Error> {
    if error.code() != ErrorCode::InternalError {
        return Cow::Borrowed(error);
    }
    let generic = Error::internal(REDACTED);
    Cow::Owned(match error.trace_id() {
        Some(id) => generic.with_trace_id(id.to_owned()),
        None => generic,
    })
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        http_status(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, trace_id = ?self.trace_id(), "request failed");
        } else {
            debug!(%status, code = ?self.code(), "request rejected");
        }

        let mut response = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_view(self).as_ref())
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        error!(error = %err, "unhandled actix error");
        Error::internal(REDACTED)
    }
}
