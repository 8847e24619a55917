//! Actix rendering of [`crate::domain::Error`].
//!
//! Plan and workout handlers return the domain error unchanged; this module
//! picks the status line, echoes the request trace id as a header and writes
//! the JSON body. A refused lifecycle transition or stale `expectedVersion`
//! is a 409 whose `details` say which rule fired. Store failures are 503
//! or 500, and a 500 body never carries the adapter's message.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for plan and workout handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Body sent to the client: internal errors lose message and details.
fn client_body(error: &Error) -> Error {
    if error.code() != ErrorCode::InternalError {
        return error.clone();
    }
    let body = Error::internal(REDACTED_MESSAGE);
    match error.trace_id() {
        Some(id) => body.with_trace_id(id.to_owned()),
        None => body,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.code() {
            ErrorCode::InternalError => {
                error!(message = %self.message(), trace_id = ?self.trace_id(), "workout request failed");
            }
            ErrorCode::ServiceUnavailable => {
                warn!(message = %self.message(), trace_id = ?self.trace_id(), "workout store unavailable");
            }
            _ => {}
        }

        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_body(self))
    }
}
