//! Payment gateway client
//!
//! Orders are created over the gateway REST API (no SDK dependency). The
//! HTTP layer only sees the [`PaymentGateway`] trait.

use super::PaymentError;
use crate::core::GatewayConfig;
use async_trait::async_trait;
use serde::Serialize;
use shared::models::GatewayOrder;
use std::time::Duration;

/// Order creation request (amount in minor units)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRequest {
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
}

impl OrderRequest {
    /// Build a request with a `receipt_<unix millis>` receipt
    pub fn new(amount: i64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            receipt: format!("receipt_{}", chrono::Utc::now().timestamp_millis()),
        }
    }
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a remote order. Not retried.
    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, PaymentError>;
}

/// Razorpay REST client (`POST /v1/orders`, basic auth)
#[derive(Debug, Clone)]
pub struct RazorpayGateway {
    client: reqwest::Client,
    base_url: String,
    key_id: String,
    key_secret: String,
}

impl RazorpayGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self, PaymentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            key_id: config.key_id.clone(),
            key_secret: config.key_secret.clone(),
        })
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(&self, request: OrderRequest) -> Result<GatewayOrder, PaymentError> {
        let url = format!("{}/v1/orders", self.base_url);
        let resp = self
            .client
            .post(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PaymentError::GatewayStatus {
                status: status.as_u16(),
                body,
            });
        }

        let order: GatewayOrder = resp.json().await?;
        tracing::info!(
            order_id = %order.id,
            amount = order.amount,
            currency = %order.currency,
            "Gateway order created"
        );
        Ok(order)
    }
}
