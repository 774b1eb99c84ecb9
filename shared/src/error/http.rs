//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::DishNotFound
            | Self::CategoryNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::CategoryHasDishes => StatusCode::CONFLICT,

            // 502 Bad Gateway (upstream payment provider)
            Self::PaymentGatewayError => StatusCode::BAD_GATEWAY,

            // 408 Request Timeout
            Self::TimeoutError => StatusCode::REQUEST_TIMEOUT,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (validation, signature mismatches)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
