//! HTTP adapter mapping for domain errors.
//!
//! Domain errors stay transport-agnostic; this module turns them into
//! envelope responses with a matching status code, and hooks the actix
//! extractors so malformed JSON or path segments use the same shape.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{error, warn};

use super::envelope::{Envelope, ErrorData};
use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn envelope_for(error: &Error) -> Envelope<ErrorData> {
    let internal = matches!(error.code(), ErrorCode::InternalError);
    if internal {
        error!(message = error.message(), "internal error redacted from response");
    }
    Envelope {
        success: false,
        message: if internal {
            REDACTED_MESSAGE.to_owned()
        } else {
            error.message().to_owned()
        },
        data: ErrorData {
            code: error.code(),
            trace_id: error.trace_id().map(str::to_owned),
            details: if internal {
                None
            } else {
                error.details().cloned()
            },
        },
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(envelope_for(self))
    }
}

/// `JsonConfig` error handler reporting undecodable bodies as invalid
/// requests.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    warn!(error = %err, "rejected request body");
    Error::invalid_request("Invalid request")
        .with_details(json!({ "code": "malformed_body", "reason": err.to_string() }))
        .into()
}

/// `PathConfig` error handler reporting non-numeric identifiers as invalid
/// requests.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("Invalid request")
        .with_details(json!({ "code": "malformed_path", "reason": err.to_string() }))
        .into()
}

#[cfg(test)]
mod tests;
