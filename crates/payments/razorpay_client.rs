use std::collections::HashMap;

use anyhow::{Context, Result};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use tracing::error;

type HmacSha256 = Hmac<Sha256>;

pub const CURRENCY_INR: &str = "INR";

/// Minimal Razorpay client built on reqwest.
pub struct RazorpayClient {
    http: reqwest::Client,
    key_id: String,
    key_secret: String,
}

#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    amount: i64,
    currency: &'a str,
    receipt: &'a str,
    notes: &'a HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RazorpayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorEnvelope {
    error: RazorpayErrorDetails,
}

#[derive(Debug, Deserialize)]
struct RazorpayErrorDetails {
    code: Option<String>,
    description: Option<String>,
    field: Option<String>,
}

/// Whole rupees to the gateway's minor unit.
pub fn rupees_to_paise(rupees: i64) -> i64 {
    rupees.saturating_mul(100)
}

impl RazorpayClient {
    pub fn new(key_id: String, key_secret: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            key_id,
            key_secret,
        }
    }

    /// Public key handed to the checkout widget.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        let (error_code, error_description, error_field) =
            match serde_json::from_str::<RazorpayErrorEnvelope>(&body) {
                Ok(envelope) => (
                    envelope.error.code,
                    envelope.error.description,
                    envelope.error.field,
                ),
                Err(_) => (None, None, None),
            };

        error!(
            status = %status,
            razorpay_error_code = ?error_code,
            razorpay_error_description = ?error_description,
            razorpay_error_field = ?error_field,
            response_body = %body,
            context = %context,
            "razorpay api request failed"
        );

        anyhow::bail!("Razorpay API request failed: {} (status {})", context, status);
    }

    /// Creates an order for `amount_paise`. https://razorpay.com/docs/api/orders/create/
    pub async fn create_order(
        &self,
        amount_paise: i64,
        receipt: &str,
        notes: &HashMap<String, String>,
    ) -> Result<RazorpayOrder> {
        let body = CreateOrderRequest {
            amount: amount_paise,
            currency: CURRENCY_INR,
            receipt,
            notes,
        };

        let resp = self
            .http
            .post("https://api.razorpay.com/v1/orders")
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&body)
            .send()
            .await
            .context("razorpay create order request failed")?;
        let resp = Self::ensure_success(resp, "create order").await?;

        let order: RazorpayOrder = resp.json().await?;
        Ok(order)
    }

    /// Checks the signature the widget returns on completion:
    /// hex(HMAC-SHA256(key_secret, "{order_id}|{payment_id}")).
    pub fn verify_payment_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<bool> {
        let provided = match hex::decode(signature.trim()) {
            Ok(bytes) => bytes,
            Err(_) => return Ok(false),
        };

        let mut mac = HmacSha256::new_from_slice(self.key_secret.as_bytes())
            .map_err(|_| anyhow::anyhow!("razorpay key secret is not a valid hmac key"))?;
        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());

        Ok(mac.verify_slice(&provided).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(secret: &str, payload: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn accepts_signature_made_with_key_secret() {
        let client = RazorpayClient::new("rzp_test_key".to_string(), "s3cr3t".to_string());
        let signature = sign("s3cr3t", "order_123|pay_456");

        assert!(client
            .verify_payment_signature("order_123", "pay_456", &signature)
            .unwrap());
    }

    #[test]
    fn rejects_signature_for_other_payment() {
        let client = RazorpayClient::new("rzp_test_key".to_string(), "s3cr3t".to_string());
        let signature = sign("s3cr3t", "order_123|pay_999");

        assert!(!client
            .verify_payment_signature("order_123", "pay_456", &signature)
            .unwrap());
    }

    #[test]
    fn rejects_garbage_signature() {
        let client = RazorpayClient::new("rzp_test_key".to_string(), "s3cr3t".to_string());

        assert!(!client
            .verify_payment_signature("order_123", "pay_456", "not-hex")
            .unwrap());
    }

    #[test]
    fn converts_rupees_to_paise() {
        assert_eq!(rupees_to_paise(13000), 1_300_000);
    }
}
