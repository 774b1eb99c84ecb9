//! Database Models
//!
//! Row types mirror what is stored; `*Content` / `*Patch` types are what
//! gets written.

pub mod serde_helpers;

pub mod category;
pub mod dish;
pub mod payment;

pub use category::{CategoryContent, CategoryPatch, CategoryRow};
pub use dish::{DishContent, DishPatch, DishRow};
pub use payment::{PaymentContent, PaymentRow};
