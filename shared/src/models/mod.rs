//! Data models
//!
//! Wire types shared between the server and its HTTP clients.
//! Field names are camelCase and record ids are `"table:key"` strings
//! exposed under `_id`.

pub mod category;
pub mod dish;
pub mod payment;

// Re-exports
pub use category::*;
pub use dish::*;
pub use payment::*;
