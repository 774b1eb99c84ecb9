//! Repository Module
//!
//! Provides CRUD operations for SurrealDB tables.

pub mod category;
pub mod dish;
pub mod payment;

pub use category::CategoryRepository;
pub use dish::DishRepository;
pub use payment::PaymentRepository;

use shared::{AppError, ErrorCode};
use std::sync::atomic::{AtomicI64, Ordering};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(msg) => AppError::validation(msg),
            RepoError::Conflict(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: 全栈统一使用 "table:key" 格式
// =============================================================================
//
//   - 对外: RecordId::to_string() => "dish:abc"
//   - 入参: "dish:abc" 或 "abc" 均可，经 parse_key 取出纯 key
//   - CRUD: db.select((TABLE, key)) / db.delete((TABLE, key))
//   - 引用: RecordId::from_table_key("category", key)

/// Extract the bare key from `"table:key"` or `"key"`
///
/// A prefix naming a different table is rejected.
pub fn parse_key(table: &str, id: &str) -> RepoResult<String> {
    let id = id.trim();
    let key = match id.split_once(':') {
        Some((prefix, key)) if prefix == table => key,
        Some((prefix, _)) => {
            return Err(RepoError::Validation(format!(
                "Invalid {table} id '{id}': unexpected table '{prefix}'"
            )));
        }
        None => id,
    };
    let key = key
        .strip_prefix('⟨')
        .and_then(|k| k.strip_suffix('⟩'))
        .unwrap_or(key);
    if key.is_empty() {
        return Err(RepoError::Validation(format!("Invalid {table} id '{id}'")));
    }
    Ok(key.to_string())
}

static LAST_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Current time in unix millis, strictly increasing within the process
///
/// Used as the list ordering key, so two records never share a value.
pub(crate) fn now_millis() -> i64 {
    let now = chrono::Utc::now().timestamp_millis();
    let mut last = LAST_MILLIS.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_MILLIS.compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(current) => last = current,
        }
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
