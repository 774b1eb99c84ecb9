//! Payment Models
//!
//! Persisted payment records plus the request / response bodies of the
//! `/payment/*` endpoints. Gateway-facing field names (`razorpay_*`, the order
//! descriptor) keep the provider's snake_case spelling.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Persisted payment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Gateway payment id (`pay_...`)
    pub payment_id: String,
    /// Gateway order id (`order_...`)
    pub order_id: Option<String>,
    /// Amount in major units
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub method: Option<String>,
    pub email: Option<String>,
    pub contact: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// POST /payment/create-order
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrderRequest {
    /// Major units; accepts a JSON number or a numeric string
    #[serde(default, deserialize_with = "lenient_decimal::deserialize_option")]
    pub amount: Option<Decimal>,
}

/// `Decimal` from a JSON number or a numeric string
///
/// Floats go through their shortest round-trip text, so `12.345` arrives as
/// exactly `12.345` rather than the nearest binary fraction.
mod lenient_decimal {
    use rust_decimal::Decimal;
    use serde::Deserialize;
    use serde::de::{self, Deserializer, Visitor};
    use std::fmt;
    use std::str::FromStr;

    struct LenientDecimal(Decimal);

    impl<'de> Deserialize<'de> for LenientDecimal {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(LenientDecimalVisitor).map(LenientDecimal)
        }
    }

    struct LenientDecimalVisitor;

    impl Visitor<'_> for LenientDecimalVisitor {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or a numeric string")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            if !v.is_finite() {
                return Err(E::invalid_value(de::Unexpected::Float(v), &self));
            }
            Decimal::from_str(&v.to_string())
                .map_err(|_| E::invalid_value(de::Unexpected::Float(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            Decimal::from_str(v.trim()).map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    pub fn deserialize_option<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Decimal>, D::Error> {
        Option::<LenientDecimal>::deserialize(deserializer).map(|v| v.map(|d| d.0))
    }
}

/// Gateway-side order descriptor, returned verbatim to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    #[serde(default)]
    pub entity: String,
    /// Minor units
    pub amount: i64,
    #[serde(default)]
    pub amount_paid: i64,
    #[serde(default)]
    pub amount_due: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub attempts: u32,
    #[serde(default)]
    pub created_at: i64,
}

/// Response of POST /payment/create-order (`order` instead of `data`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order: GatewayOrder,
}

/// POST /payment/verify-payment
///
/// Fields are optional so that a missing field yields the envelope error
/// instead of a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    #[serde(default)]
    pub razorpay_payment_id: Option<String>,
    #[serde(default)]
    pub razorpay_signature: Option<String>,
}

/// Timestamp accepted by POST /payment/save-details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampInput {
    /// Unix epoch milliseconds
    Millis(i64),
    /// RFC 3339 string
    Text(String),
}

/// POST /payment/save-details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePaymentRequest {
    #[serde(default)]
    pub payment_id: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    /// Gateway signature over `orderId|paymentId`
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub created_at: Option<TimestampInput>,
}
