//! Category Repository

use super::{BaseRepository, RepoError, RepoResult, now_millis, parse_key};
use crate::db::models::{CategoryContent, CategoryPatch, CategoryRow};
use shared::models::{CategoryCreate, CategoryUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "category";

#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
}

impl CategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all categories in creation order
    pub async fn find_all(&self) -> RepoResult<Vec<CategoryRow>> {
        let categories: Vec<CategoryRow> = self
            .base
            .db()
            .query("SELECT * FROM category ORDER BY created_at ASC")
            .await?
            .take(0)?;
        Ok(categories)
    }

    /// Find category by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CategoryRow>> {
        let key = parse_key(TABLE, id)?;
        let category: Option<CategoryRow> = self.base.db().select((TABLE, key)).await?;
        Ok(category)
    }

    /// Create a new category
    pub async fn create(&self, data: CategoryCreate) -> RepoResult<CategoryRow> {
        let content = CategoryContent {
            name: data.name,
            description: data.description,
            created_at: now_millis(),
        };
        let created: Option<CategoryRow> = self.base.db().create(TABLE).content(content).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    /// Merge the present fields into an existing category
    ///
    /// Returns `None` when the category does not exist.
    pub async fn update(&self, id: &str, data: CategoryUpdate) -> RepoResult<Option<CategoryRow>> {
        let key = parse_key(TABLE, id)?;
        let patch = CategoryPatch {
            name: data.name,
            description: data.description,
        };
        if self.find_by_id(&key).await?.is_none() {
            return Ok(None);
        }

        if !patch.is_empty() {
            self.base
                .db()
                .query("UPDATE $thing MERGE $data")
                .bind(("thing", RecordId::from_table_key(TABLE, key.clone())))
                .bind(("data", patch))
                .await?
                .check()?;
        }

        self.find_by_id(&key).await
    }

    /// Hard delete a category
    ///
    /// Returns `false` when the category does not exist. A category still
    /// referenced by dishes is rejected with [`RepoError::Conflict`].
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = parse_key(TABLE, id)?;

        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM dish WHERE category = $cat GROUP ALL")
            .bind(("cat", RecordId::from_table_key(TABLE, key.clone())))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;

        if count.unwrap_or(0) > 0 {
            return Err(RepoError::Conflict(format!(
                "Cannot delete category with {} dish(es)",
                count.unwrap_or(0)
            )));
        }

        let deleted: Option<CategoryRow> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
