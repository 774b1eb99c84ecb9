//! Payment Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Stored payment record (write-once)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRow {
    pub id: RecordId,
    pub payment_id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    /// Major units
    pub amount: f64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    /// Unix millis
    pub created_at: i64,
}

/// Content written on insert
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentContent {
    pub payment_id: String,
    pub order_id: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub method: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub created_at: i64,
}
