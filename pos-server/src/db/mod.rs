//! Database Module
//!
//! Embedded SurrealDB: RocksDB on disk, or the in-memory engine for tests.

pub mod models;
pub mod repository;

use crate::core::config::MEMORY_DB;
use crate::core::{Config, ServerError};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// Schema applied on every start (idempotent)
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS category SCHEMALESS;
DEFINE TABLE IF NOT EXISTS dish SCHEMALESS;
DEFINE TABLE IF NOT EXISTS payment SCHEMALESS;
DEFINE INDEX IF NOT EXISTS dish_category ON TABLE dish FIELDS category;
DEFINE INDEX IF NOT EXISTS payment_id_unique ON TABLE payment FIELDS payment_id UNIQUE;
"#;

/// Database service, owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the database configured by `DATABASE_PATH` and apply the schema
    pub async fn new(config: &Config) -> Result<Self, ServerError> {
        let db = if config.database_path == MEMORY_DB {
            Surreal::new::<Mem>(())
                .await
                .map_err(|e| ServerError::Database(format!("Failed to open in-memory database: {e}")))?
        } else {
            if let Some(parent) = std::path::Path::new(&config.database_path).parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            Surreal::new::<RocksDb>(config.database_path.as_str())
                .await
                .map_err(|e| {
                    ServerError::Database(format!(
                        "Failed to open database at {}: {e}",
                        config.database_path
                    ))
                })?
        };

        db.use_ns(config.db_namespace.as_str())
            .use_db(config.db_name.as_str())
            .await
            .map_err(|e| ServerError::Database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            path = %config.database_path,
            namespace = %config.db_namespace,
            database = %config.db_name,
            "Database connection established"
        );

        Self::apply_schema(&db).await?;

        Ok(Self { db })
    }

    async fn apply_schema(db: &Surreal<Db>) -> Result<(), ServerError> {
        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| ServerError::Database(format!("Failed to apply schema: {e}")))?;
        tracing::info!("Database schema applied");
        Ok(())
    }
}
