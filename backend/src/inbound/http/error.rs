//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to turn domain failures into the shared JSON envelope and status
//! codes. This is the only place where an [`ErrorCode`] meets a status.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::envelope::ApiResponse;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

impl From<&Error> for ApiResponse {
    fn from(error: &Error) -> Self {
        let message = error.message();
        match error.code() {
            ErrorCode::MalformedInput | ErrorCode::InvalidId => Self::bad_request(message),
            ErrorCode::ValidationFailed => Self::validation_error(message),
            ErrorCode::NotFound => Self::not_found(message),
            ErrorCode::Unexpected => Self::internal_error(message),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        ApiResponse::from(self).status_code()
    }

    fn error_response(&self) -> HttpResponse {
        ApiResponse::from(self).into_http_response()
    }
}

/// Extractor failures: client faults (oversized or truncated bodies) take the
/// malformed input path, anything else is unexpected. Actix details are logged,
/// never returned.
impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        let status = err.as_response_error().status_code();
        if status.is_client_error() {
            warn!(error = %err, status = status.as_u16(), "request body rejected by extractor");
            Error::malformed_input("Invalid JSON format")
        } else {
            error!(error = %err, "actix error promoted to domain error");
            Error::unexpected("Internal server error")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(Error::malformed_input("Invalid JSON format"), StatusCode::BAD_REQUEST)]
    #[case(Error::invalid_id("Invalid user ID format"), StatusCode::BAD_REQUEST)]
    #[case(Error::validation_failed("bad"), StatusCode::UNPROCESSABLE_ENTITY)]
    #[case(Error::not_found("User not found"), StatusCode::NOT_FOUND)]
    #[case(Error::unexpected("Failed to retrieve users"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
        assert_eq!(error.status_code(), status);
    }

    #[actix_web::test]
    async fn validation_failures_render_prefixed_envelope() {
        let response = Error::validation_failed("Invalid user data.").error_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        let body: Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(
            body,
            json!({"success": false, "message": "Validation Error: Invalid user data."})
        );
    }

    #[rstest]
    #[case(
        actix_web::error::ErrorPayloadTooLarge("payload reached size limit"),
        ErrorCode::MalformedInput,
        "Invalid JSON format"
    )]
    #[case(
        actix_web::error::ErrorBadRequest("payload truncated"),
        ErrorCode::MalformedInput,
        "Invalid JSON format"
    )]
    #[case(
        actix_web::error::ErrorBadGateway("upstream detail"),
        ErrorCode::Unexpected,
        "Internal server error"
    )]
    fn actix_errors_split_on_client_fault(
        #[case] actix_error: actix_web::Error,
        #[case] code: ErrorCode,
        #[case] message: &str,
    ) {
        let error = Error::from(actix_error);
        assert_eq!(error.code(), code);
        assert_eq!(error.message(), message);
    }
}
