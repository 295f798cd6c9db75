//! REST backend submission client.
//!
//! The backend owns persistence: the client sends the computed invoice
//! payload and receives the assigned invoice number and record id. There is
//! no retry or backoff — a failed request is surfaced verbatim and prior
//! state is untouched.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::core::Invoice;

/// Configuration for the invoice API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL, e.g. "https://api.example.com/v1".
    pub base_url: String,
    /// Bearer token for the Authorization header.
    pub token: String,
    /// Request timeout (default 30 s).
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Receipt for a persisted invoice.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReceipt {
    /// Backend record identifier.
    pub id: String,
    /// Invoice number as stored (the backend may assign its own).
    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,
}

/// Error from the invoice API.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ApiError {
    /// Network or HTTP transport error.
    Network(String),
    /// The backend rejected the invoice (e.g. stock validation failure).
    /// The message is surfaced verbatim for the user.
    Rejected(String),
    /// Failed to parse the response.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "network error: {e}"),
            Self::Rejected(e) => write!(f, "invoice rejected: {e}"),
            Self::Parse(e) => write!(f, "response parse error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Backend error body, `{"message": "..."}` on rejection.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

/// Submit a computed invoice to the backend.
///
/// POSTs the invoice JSON to `{base_url}/invoices` with bearer auth.
/// This function is async and requires network access.
///
/// # Errors
///
/// Returns [`ApiError::Network`] on connection issues, [`ApiError::Rejected`]
/// with the backend's message on a non-success status, and
/// [`ApiError::Parse`] on unexpected response formats.
pub async fn submit_invoice(
    config: &ApiConfig,
    invoice: &Invoice,
) -> Result<SubmitReceipt, ApiError> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let url = format!("{}/invoices", config.base_url.trim_end_matches('/'));

    let resp = client
        .post(&url)
        .bearer_auth(&config.token)
        .json(invoice)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        // Prefer the backend's own message when it sends one.
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("HTTP {status}: {body}"));
        return Err(ApiError::Rejected(message));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn invoice() -> Invoice {
        InvoiceBuilder::new(
            "INV/24-25/0001",
            NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        )
        .seller(
            PartyBuilder::new(
                "Chennai Traders",
                AddressBuilder::new("Chennai", "600001", "Tamil Nadu").build(),
            )
            .gstin("33AAACC4563F1Z1")
            .build(),
        )
        .buyer(
            PartyBuilder::new(
                "Madurai Mills",
                AddressBuilder::new("Madurai", "625001", "Tamil Nadu").build(),
            )
            .build(),
        )
        .add_line(
            LineItemBuilder::new("1", "Cotton Yarn", dec!(2), "KGS", dec!(100))
                .gst_rate(dec!(18))
                .build(),
        )
        .build()
        .unwrap()
    }

    #[test]
    fn invoice_payload_shape() {
        let payload = serde_json::to_value(invoice()).unwrap();
        assert_eq!(payload["number"], "INV/24-25/0001");
        assert_eq!(payload["seller"]["gstin"], "33AAACC4563F1Z1");
        assert_eq!(payload["totals"]["grand_total"], "236.00");
        assert_eq!(payload["lines"][0]["gst_rate"], "18");
    }

    #[test]
    fn receipt_parses() {
        let receipt: SubmitReceipt =
            serde_json::from_str(r#"{"id":"abc123","invoiceNumber":"INV/24-25/0042"}"#).unwrap();
        assert_eq!(receipt.invoice_number, "INV/24-25/0042");
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_network_error() {
        let config = ApiConfig::new("http://127.0.0.1:1", "token");
        let err = submit_invoice(&config, &invoice()).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
