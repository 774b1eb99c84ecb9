//! Dish Model

use super::category::CategoryRow;
use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Dish record as read back with `FETCH category`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishRow {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// Joined category (`None` if the reference no longer resolves)
    #[serde(default)]
    pub category: Option<CategoryRow>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub is_available: bool,
    #[serde(default, deserialize_with = "serde_helpers::i64_zero")]
    pub created_at: i64,
}

fn default_true() -> bool {
    true
}

/// Content written on create
#[derive(Debug, Clone, Serialize)]
pub struct DishContent {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// Record link to `category`
    pub category: RecordId,
    pub image: Option<String>,
    pub is_available: bool,
    pub created_at: i64,
}

/// Partial update merged into an existing record
#[derive(Debug, Clone, Default, Serialize)]
pub struct DishPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RecordId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_available: Option<bool>,
}
