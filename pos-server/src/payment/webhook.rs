//! Gateway webhook payloads
//!
//! Only the fields this server persists are modelled; everything else in the
//! event is ignored.

use super::amount::from_minor_units;
use crate::db::models::PaymentContent;
use serde::Deserialize;

/// Event name for a captured payment
pub const PAYMENT_CAPTURED: &str = "payment.captured";

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    pub event: String,
    #[serde(default)]
    pub payload: Option<WebhookPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub payment: Option<EntityWrapper>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntityWrapper {
    pub entity: PaymentEntity,
}

/// `payload.payment.entity`
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentEntity {
    pub id: String,
    #[serde(default)]
    pub order_id: Option<String>,
    /// Minor units
    pub amount: i64,
    pub currency: String,
    pub status: String,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    /// Unix seconds
    pub created_at: i64,
}

impl WebhookEvent {
    pub fn is_payment_captured(&self) -> bool {
        self.event == PAYMENT_CAPTURED
    }

    /// The payment entity, if the event carries one
    pub fn into_payment_entity(self) -> Option<PaymentEntity> {
        self.payload
            .and_then(|p| p.payment)
            .map(|wrapper| wrapper.entity)
    }
}

impl PaymentEntity {
    /// Record to persist: major-unit amount, millisecond timestamp
    pub fn into_content(self) -> PaymentContent {
        PaymentContent {
            payment_id: self.id,
            order_id: self.order_id,
            amount: from_minor_units(self.amount),
            currency: self.currency,
            status: self.status,
            method: self.method,
            email: self.email,
            contact: self.contact,
            created_at: self.created_at.saturating_mul(1000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAPTURED: &str = r#"{
        "entity": "event",
        "event": "payment.captured",
        "contains": ["payment"],
        "payload": {
            "payment": {
                "entity": {
                    "id": "pay_29QQoUBi66xm2f",
                    "entity": "payment",
                    "amount": 50000,
                    "currency": "INR",
                    "status": "captured",
                    "order_id": "order_9A33XWu170gUtm",
                    "method": "upi",
                    "email": "gaurav.kumar@example.com",
                    "contact": "+919876543210",
                    "created_at": 1700000000
                }
            }
        },
        "created_at": 1700000001
    }"#;

    #[test]
    fn test_captured_event_into_content() {
        let event: WebhookEvent = serde_json::from_str(CAPTURED).unwrap();
        assert!(event.is_payment_captured());

        let content = event.into_payment_entity().unwrap().into_content();
        assert_eq!(content.payment_id, "pay_29QQoUBi66xm2f");
        assert_eq!(content.order_id.as_deref(), Some("order_9A33XWu170gUtm"));
        assert_eq!(content.amount, 500.0);
        assert_eq!(content.status, "captured");
        assert_eq!(content.created_at, 1_700_000_000_000);
    }

    #[test]
    fn test_other_event_without_payment() {
        let event: WebhookEvent =
            serde_json::from_str(r#"{"event":"order.paid","payload":{}}"#).unwrap();
        assert!(!event.is_payment_captured());
        assert!(event.into_payment_entity().is_none());
    }

    #[test]
    fn test_nullable_contact_fields() {
        let json = r#"{"id":"pay_1","amount":1235,"currency":"INR","status":"captured",
                       "email":null,"contact":null,"created_at":1}"#;
        let entity: PaymentEntity = serde_json::from_str(json).unwrap();
        let content = entity.into_content();
        assert_eq!(content.amount, 12.35);
        assert!(content.email.is_none());
        assert!(content.order_id.is_none());
    }
}
