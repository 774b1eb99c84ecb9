//! Gateway signature verification (HMAC-SHA256, hex encoded)
//!
//! Two messages are signed by the gateway:
//! - client confirmations: `"{order_id}|{payment_id}"` with the key secret
//! - webhooks: the raw request body with the webhook secret
//!
//! Comparison goes through `Mac::verify_slice`, which is constant time.

use super::PaymentError;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn mac(secret: &str) -> Result<HmacSha256, PaymentError> {
    HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|_| PaymentError::Gateway("HMAC key error".to_string()))
}

/// Hex-encoded HMAC-SHA256 of `message`
pub fn sign(secret: &str, message: &[u8]) -> Result<String, PaymentError> {
    let mut mac = mac(secret)?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Verify a hex-encoded HMAC-SHA256 signature over `message`
pub fn verify(secret: &str, message: &[u8], signature_hex: &str) -> Result<(), PaymentError> {
    let sig_bytes =
        hex::decode(signature_hex.trim()).map_err(|_| PaymentError::SignatureMismatch)?;
    let mut mac = mac(secret)?;
    mac.update(message);
    mac.verify_slice(&sig_bytes)
        .map_err(|_| PaymentError::SignatureMismatch)
}

/// Message signed for client-side payment confirmations
pub fn payment_message(order_id: &str, payment_id: &str) -> String {
    format!("{order_id}|{payment_id}")
}

/// Verify the signature the gateway hands the client after checkout
pub fn verify_payment_signature(
    key_secret: &str,
    order_id: &str,
    payment_id: &str,
    signature_hex: &str,
) -> Result<(), PaymentError> {
    verify(
        key_secret,
        payment_message(order_id, payment_id).as_bytes(),
        signature_hex,
    )
}

/// Verify a webhook signature over the exact request body bytes
pub fn verify_webhook_signature(
    webhook_secret: &str,
    body: &[u8],
    signature_hex: &str,
) -> Result<(), PaymentError> {
    verify(webhook_secret, body, signature_hex)
}
