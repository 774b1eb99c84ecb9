//! Category Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Stored category record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Unix millis, used for list ordering
    #[serde(default, deserialize_with = "serde_helpers::i64_zero")]
    pub created_at: i64,
}

/// Content written on create
#[derive(Debug, Clone, Serialize)]
pub struct CategoryContent {
    pub name: String,
    pub description: Option<String>,
    pub created_at: i64,
}

/// Partial update merged into an existing record
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
