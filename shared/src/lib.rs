//! Shared types for the POS server
//!
//! Wire-level types used by the server and its HTTP clients:
//! error codes, the response envelope and the menu / payment models.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
