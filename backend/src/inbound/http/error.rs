//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into consistent JSON responses and
//! status codes. The match over [`ErrorCode`] is exhaustive, so a new error
//! kind will not compile until it is mapped here.

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, ValidationErrors};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Serialize the per-field violation list as `[{<field>: <message>}, ...]`.
fn validation_body(errors: &ValidationErrors) -> Value {
    let entries: Vec<Value> = errors
        .into_iter()
        .map(|violation| json!({ violation.field: violation.message }))
        .collect();
    json!({ "errors": entries })
}

fn body_for(err: &Error) -> Value {
    if let Some(validation) = err.validation_errors() {
        return validation_body(validation);
    }
    match err.code() {
        // The wrapped cause is logged, never serialized to the caller.
        ErrorCode::Internal => json!({ "error": "internal server error" }),
        ErrorCode::BadRequest | ErrorCode::Conflict | ErrorCode::NotFound => {
            json!({ "error": err.message() })
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(self.code(), ErrorCode::Internal) {
            let cause = std::error::Error::source(self).map(ToString::to_string);
            error!(error = self.message(), cause, "request failed");
        }
        HttpResponse::build(self.status_code()).json(body_for(self))
    }
}

/// JSON extractor error handler routing malformed bodies through the
/// domain taxonomy, so they get the same `{"error": ...}` envelope as
/// every other bad request.
///
/// Register via `web::JsonConfig::default().error_handler(...)`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    // Do not leak deserializer details to clients; log them instead.
    warn!(error = %err, "invalid request body");
    Error::bad_request("invalid request body").into()
}
