//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while giving Actix a
//! single place that chooses status codes and renders `{"error": ...}`
//! bodies. Every failure is logged here, with the request's trace id, before
//! it is translated.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};
use crate::middleware::TraceId;

pub use crate::domain::ApiResult;

/// Message returned in place of any internal failure detail.
pub const REDACTED_MESSAGE: &str = "internal server error";

/// Message returned in place of any backing-store outage detail.
pub const UNAVAILABLE_MESSAGE: &str = "service temporarily unavailable";

/// JSON body of every error response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "token missing or invalid")]
    pub error: String,
}

/// Status code for each failure category.
///
/// Ownership violations answer 401 rather than 403; clients treat every
/// authorisation failure on a mutation the same way.
fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::MalformedId | ErrorCode::DuplicateUsername => {
            StatusCode::BAD_REQUEST
        }
        ErrorCode::InvalidToken
        | ErrorCode::Unauthorized
        | ErrorCode::Forbidden
        | ErrorCode::InvalidCredentials => StatusCode::UNAUTHORIZED,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Client-facing text; server-side detail stays in the log line.
fn public_message(error: &Error, status: StatusCode) -> String {
    match status {
        StatusCode::INTERNAL_SERVER_ERROR => REDACTED_MESSAGE.to_owned(),
        StatusCode::SERVICE_UNAVAILABLE => UNAVAILABLE_MESSAGE.to_owned(),
        _ => error.message().to_owned(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let trace_id = TraceId::current().map(|id| id.to_string());
        if status.is_server_error() {
            error!(code = %self.code(), trace_id = ?trace_id, message = self.message(), "request failed");
        } else {
            warn!(code = %self.code(), trace_id = ?trace_id, message = self.message(), "request rejected");
        }

        HttpResponse::build(status).json(ErrorBody {
            error: public_message(self, status),
        })
    }
}

/// Route JSON extractor failures through the translator as validation errors.
///
/// Covers malformed bodies and values of the wrong type, such as a negative
/// `likes`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request(err.to_string()).into()
}

#[cfg(test)]
mod tests;
