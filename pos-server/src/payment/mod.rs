//! Payment gateway integration
//!
//! - [`amount`] - major / minor unit conversion (rust_decimal)
//! - [`signature`] - HMAC-SHA256 signing and constant-time verification
//! - [`gateway`] - remote order creation behind [`PaymentGateway`]
//! - [`webhook`] - gateway event payloads

pub mod amount;
pub mod gateway;
pub mod signature;
pub mod webhook;

pub use gateway::{OrderRequest, PaymentGateway, RazorpayGateway};

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Payment errors
#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(String),

    #[error("Signature mismatch")]
    SignatureMismatch,

    #[error("Gateway request failed: {0}")]
    Gateway(String),

    #[error("Gateway returned {status}: {body}")]
    GatewayStatus { status: u16, body: String },

    #[error("Gateway request timed out")]
    Timeout,
}

impl From<reqwest::Error> for PaymentError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PaymentError::Timeout
        } else {
            PaymentError::Gateway(err.to_string())
        }
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::InvalidAmount(msg) => {
                AppError::with_message(ErrorCode::PaymentInvalidAmount, msg)
            }
            PaymentError::SignatureMismatch => AppError::new(ErrorCode::PaymentVerificationFailed),
            PaymentError::Gateway(_) | PaymentError::GatewayStatus { .. } | PaymentError::Timeout => {
                // Upstream details stay in the log
                tracing::error!(error = %err, "Payment gateway call failed");
                AppError::new(ErrorCode::PaymentGatewayError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_payment_error_mapping() {
        let err: AppError = PaymentError::SignatureMismatch.into();
        assert_eq!(err.code, ErrorCode::PaymentVerificationFailed);
        assert_eq!(err.message, "Payment verification failed!");

        let err: AppError = PaymentError::GatewayStatus {
            status: 401,
            body: "Authentication failed".into(),
        }
        .into();
        assert_eq!(err.http_status(), StatusCode::BAD_GATEWAY);
        assert!(!err.message.contains("Authentication failed"));

        let err: AppError = PaymentError::InvalidAmount("amount must be positive".into()).into();
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }
}
