//! Unified error system for the POS server
//!
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`AppError`]: Error type carrying a code and a message
//! - [`ApiResponse`]: The `{success, data?, message?}` response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 5xxx: Payment errors
//! - 6xxx: Menu errors (categories, dishes)
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::DishNotFound);
//! let err = AppError::validation("name must not be empty");
//! let response = ApiResponse::<()>::error(&err);
//! assert!(!response.success);
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
