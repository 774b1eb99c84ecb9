//! Dish Repository

use super::category::TABLE as CATEGORY_TABLE;
use super::{BaseRepository, RepoError, RepoResult, now_millis, parse_key};
use crate::db::models::{CategoryRow, DishContent, DishPatch, DishRow};
use shared::models::{DishCreate, DishUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

pub const TABLE: &str = "dish";

#[derive(Clone)]
pub struct DishRepository {
    base: BaseRepository,
}

impl DishRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all dishes with category fetched
    pub async fn find_all(&self) -> RepoResult<Vec<DishRow>> {
        let dishes: Vec<DishRow> = self
            .base
            .db()
            .query("SELECT * FROM dish ORDER BY created_at ASC FETCH category")
            .await?
            .take(0)?;
        Ok(dishes)
    }

    /// Find dishes by category with category fetched
    pub async fn find_by_category(&self, category_id: &str) -> RepoResult<Vec<DishRow>> {
        let cat = RecordId::from_table_key(CATEGORY_TABLE, parse_key(CATEGORY_TABLE, category_id)?);
        let dishes: Vec<DishRow> = self
            .base
            .db()
            .query("SELECT * FROM dish WHERE category = $cat ORDER BY created_at ASC FETCH category")
            .bind(("cat", cat))
            .await?
            .take(0)?;
        Ok(dishes)
    }

    /// Find dish by id with category fetched
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DishRow>> {
        let thing = RecordId::from_table_key(TABLE, parse_key(TABLE, id)?);
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM $thing FETCH category")
            .bind(("thing", thing))
            .await?;
        let dishes: Vec<DishRow> = result.take(0)?;
        Ok(dishes.into_iter().next())
    }

    /// Resolve a category id to its record link, rejecting unknown categories
    async fn category_link(&self, category_id: &str) -> RepoResult<RecordId> {
        let key = parse_key(CATEGORY_TABLE, category_id)?;
        let category: Option<CategoryRow> = self
            .base
            .db()
            .select((CATEGORY_TABLE, key))
            .await?;
        match category {
            Some(c) => Ok(c.id),
            None => Err(RepoError::Validation(format!(
                "Category {category_id} not found"
            ))),
        }
    }

    /// Create a new dish
    pub async fn create(&self, data: DishCreate) -> RepoResult<DishRow> {
        let category = self.category_link(&data.category).await?;

        let content = DishContent {
            name: data.name,
            description: data.description,
            price: data.price,
            category,
            image: data.image,
            is_available: data.is_available,
            created_at: now_millis(),
        };

        #[derive(serde::Deserialize)]
        struct Created {
            id: RecordId,
        }

        let created: Option<Created> = self.base.db().create(TABLE).content(content).await?;
        let created =
            created.ok_or_else(|| RepoError::Database("Failed to create dish".to_string()))?;

        self.find_by_id(&created.id.to_string())
            .await?
            .ok_or_else(|| RepoError::Database("Failed to read back created dish".to_string()))
    }

    /// Merge the present fields into an existing dish
    ///
    /// Returns `None` when the dish does not exist.
    pub async fn update(&self, id: &str, data: DishUpdate) -> RepoResult<Option<DishRow>> {
        let key = parse_key(TABLE, id)?;
        if self.find_by_id(&key).await?.is_none() {
            return Ok(None);
        }

        let category = match data.category {
            Some(ref category_id) => Some(self.category_link(category_id).await?),
            None => None,
        };

        let patch = DishPatch {
            name: data.name,
            description: data.description,
            price: data.price,
            category,
            image: data.image,
            is_available: data.is_available,
        };

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", RecordId::from_table_key(TABLE, key.clone())))
            .bind(("data", patch))
            .await?
            .check()?;

        self.find_by_id(&key).await
    }

    /// Hard delete a dish
    ///
    /// Returns `false` when the dish does not exist.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = parse_key(TABLE, id)?;

        #[derive(serde::Deserialize)]
        struct Deleted {
            #[allow(dead_code)]
            id: RecordId,
        }

        let deleted: Option<Deleted> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
