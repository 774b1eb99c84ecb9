//! Unified error codes
//!
//! Error codes are organized by range:
//! - 0xxx: General errors
//! - 5xxx: Payment errors
//! - 6xxx: Menu errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as `u16` on the wire so the frontend can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 5xxx: Payment ====================
    /// Client-submitted payment confirmation did not verify
    PaymentVerificationFailed = 5001,
    /// Webhook signature missing or invalid
    InvalidSignature = 5002,
    /// Amount is not a positive finite number
    PaymentInvalidAmount = 5003,
    /// Payment gateway call failed
    PaymentGatewayError = 5004,

    // ==================== 6xxx: Menu ====================
    /// Dish not found
    DishNotFound = 6001,
    /// Dish price is invalid
    DishInvalidPrice = 6002,
    /// Category not found
    CategoryNotFound = 6101,
    /// Category still has dishes
    CategoryHasDishes = 6102,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Request exceeded the server timeout
    TimeoutError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// System-range codes (9xxx) never expose their detail message to clients
    #[inline]
    pub const fn is_system(&self) -> bool {
        self.code() >= 9000
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Payment
            ErrorCode::PaymentVerificationFailed => "Payment verification failed!",
            ErrorCode::InvalidSignature => "Invalid Signature!",
            ErrorCode::PaymentInvalidAmount => "Invalid payment amount",
            ErrorCode::PaymentGatewayError => "Payment gateway request failed",

            // Menu
            ErrorCode::DishNotFound => "Dish not found",
            ErrorCode::DishInvalidPrice => "Dish price must be a non-negative number",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryHasDishes => "Category still has dishes",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Request timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Payment
            5001 => Ok(ErrorCode::PaymentVerificationFailed),
            5002 => Ok(ErrorCode::InvalidSignature),
            5003 => Ok(ErrorCode::PaymentInvalidAmount),
            5004 => Ok(ErrorCode::PaymentGatewayError),

            // Menu
            6001 => Ok(ErrorCode::DishNotFound),
            6002 => Ok(ErrorCode::DishInvalidPrice),
            6101 => Ok(ErrorCode::CategoryNotFound),
            6102 => Ok(ErrorCode::CategoryHasDishes),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
