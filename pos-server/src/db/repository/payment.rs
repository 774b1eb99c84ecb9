//! Payment Repository
//!
//! Payments are write-once. `payment_id` carries a UNIQUE index, so a
//! redelivered gateway event resolves to the record already stored.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{PaymentContent, PaymentRow};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "payment";

/// Create attempts before a collision is reported as a storage error
const MAX_INSERT_ATTEMPTS: u32 = 5;

/// Outcome of [`PaymentRepository::insert_once`]
#[derive(Debug, Clone)]
pub enum Inserted {
    Created(PaymentRow),
    Existing(PaymentRow),
}

#[derive(Clone)]
pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all payments, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<PaymentRow>> {
        let payments: Vec<PaymentRow> = self
            .base
            .db()
            .query("SELECT * FROM payment ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(payments)
    }

    /// Find payment by gateway payment id
    pub async fn find_by_payment_id(&self, payment_id: &str) -> RepoResult<Option<PaymentRow>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM payment WHERE payment_id = $payment_id LIMIT 1")
            .bind(("payment_id", payment_id.to_string()))
            .await?;
        let payments: Vec<PaymentRow> = result.take(0)?;
        Ok(payments.into_iter().next())
    }

    /// Insert a payment unless one with the same gateway id exists
    ///
    /// Concurrent deliveries of one payment race on the create: the losers
    /// fail with a unique-index or transaction-conflict error, then find the
    /// winner's record on the re-check.
    pub async fn insert_once(&self, content: PaymentContent) -> RepoResult<Inserted> {
        let mut attempt = 1;
        loop {
            if let Some(existing) = self.find_by_payment_id(&content.payment_id).await? {
                return Ok(Inserted::Existing(existing));
            }

            let created: Result<Option<PaymentRow>, surrealdb::Error> =
                self.base.db().create(TABLE).content(content.clone()).await;
            match created {
                Ok(Some(created)) => return Ok(Inserted::Created(created)),
                Ok(None) => {
                    return Err(RepoError::Database("Failed to create payment".to_string()));
                }
                Err(e) if attempt < MAX_INSERT_ATTEMPTS => {
                    tracing::debug!(
                        payment_id = %content.payment_id,
                        attempt,
                        error = %e,
                        "Payment insert collided, re-checking"
                    );
                    attempt += 1;
                    tokio::task::yield_now().await;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}
