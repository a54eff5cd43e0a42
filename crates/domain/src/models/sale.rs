//! Sale domain model and wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::TerminalPair;

/// Prefix for server-generated sale transaction ids.
pub const TRANSACTION_ID_PREFIX: &str = "TXN_";

/// Lifecycle status of a sale record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    Pending,
    Success,
}

impl SaleStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Success => "SUCCESS",
        }
    }

    /// Parse from database string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(Self::Pending),
            "SUCCESS" => Some(Self::Success),
            _ => None,
        }
    }
}

impl std::fmt::Display for SaleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A registered sale awaiting (or past) consumption by the point of sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub merchant_id: String,
    pub terminal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos_device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_order_id: Option<String>,
    pub amount: f64,
    pub allowed_instruments: Vec<String>,
    pub auto_accept: bool,
    pub auto_accept_window_expiry_seconds: i64,
    #[serde(rename = "pregeneratedDQRTransactionId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregenerated_dqr_transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pregenerated_card_transaction_id: Option<String>,
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
    pub creation_timestamp: i64,
    pub status: SaleStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
}

impl Sale {
    /// Canonical pair key for this sale's terminal.
    pub fn pair(&self) -> TerminalPair {
        TerminalPair::new(&self.merchant_id, &self.terminal_id)
    }
}

/// Sale registration payload from the cloud trigger.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSaleRequest {
    #[validate(length(min = 1, max = 64, message = "merchantId must be 1-64 characters"))]
    pub merchant_id: String,
    #[validate(length(min = 1, max = 64, message = "terminalId must be 1-64 characters"))]
    pub terminal_id: String,
    pub pos_device_id: Option<String>,
    pub short_order_id: Option<String>,
    #[serde(default, deserialize_with = "shared::num::lenient_f64")]
    pub amount: f64,
    #[serde(default)]
    pub allowed_instruments: Vec<String>,
    #[serde(default = "default_auto_accept")]
    pub auto_accept: bool,
    #[serde(default)]
    pub auto_accept_window_expiry_seconds: i64,
    #[serde(rename = "pregeneratedDQRTransactionId")]
    pub pregenerated_dqr_transaction_id: Option<String>,
    pub pregenerated_card_transaction_id: Option<String>,
    pub invoice_number: Option<String>,
}

fn default_auto_accept() -> bool {
    true
}

/// Fully-populated sale ready for persistence: request fields plus the
/// server-generated transaction id and timestamps, status forced to PENDING.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub merchant_id: String,
    pub terminal_id: String,
    pub pos_device_id: Option<String>,
    pub short_order_id: Option<String>,
    pub amount: f64,
    pub allowed_instruments: Vec<String>,
    pub auto_accept: bool,
    pub auto_accept_window_expiry_seconds: i64,
    pub pregenerated_dqr_transaction_id: Option<String>,
    pub pregenerated_card_transaction_id: Option<String>,
    pub transaction_id: String,
    pub created_at: DateTime<Utc>,
    pub creation_timestamp: i64,
    pub invoice_number: Option<String>,
}

impl NewSale {
    /// Stamps a registration request with generated identifiers and the
    /// current time.
    pub fn from_request(request: RegisterSaleRequest) -> Self {
        let creation_timestamp = shared::clock::epoch_millis();
        Self {
            merchant_id: request.merchant_id,
            terminal_id: request.terminal_id,
            pos_device_id: request.pos_device_id,
            short_order_id: request.short_order_id,
            amount: request.amount,
            allowed_instruments: request.allowed_instruments,
            auto_accept: request.auto_accept,
            auto_accept_window_expiry_seconds: request.auto_accept_window_expiry_seconds,
            pregenerated_dqr_transaction_id: request.pregenerated_dqr_transaction_id,
            pregenerated_card_transaction_id: request.pregenerated_card_transaction_id,
            transaction_id: generate_transaction_id(creation_timestamp),
            created_at: shared::clock::from_epoch_millis(creation_timestamp),
            creation_timestamp,
            invoice_number: request.invoice_number,
        }
    }

    /// Canonical pair key for the upsert target.
    pub fn pair(&self) -> TerminalPair {
        TerminalPair::new(&self.merchant_id, &self.terminal_id)
    }
}

/// Generates a transaction id from an epoch-millisecond timestamp.
pub fn generate_transaction_id(epoch_millis: i64) -> String {
    format!("{}{}", TRANSACTION_ID_PREFIX, epoch_millis)
}

/// Normalized response envelope wrapping a persisted sale.
///
/// Echoes the sale fields at the top level and carries the full record under
/// `data`, matching what the point-of-sale client parses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleResponse {
    pub code: String,
    pub message: String,
    pub merchant_id: String,
    pub terminal_id: String,
    pub pos_device_id: Option<String>,
    pub short_order_id: Option<String>,
    pub amount: f64,
    pub allowed_instruments: Vec<String>,
    pub auto_accept: bool,
    pub auto_accept_window_expiry_seconds: i64,
    #[serde(rename = "pregeneratedDQRTransactionId")]
    pub pregenerated_dqr_transaction_id: Option<String>,
    pub pregenerated_card_transaction_id: Option<String>,
    pub transaction_id: String,
    pub creation_timestamp: i64,
    pub created_at: DateTime<Utc>,
    pub data: Sale,
}

impl SaleResponse {
    /// Wraps a persisted sale in the success envelope.
    pub fn success(sale: Sale) -> Self {
        Self {
            code: "SUCCESS".to_string(),
            message: "Sale Processed Successfully".to_string(),
            merchant_id: sale.merchant_id.clone(),
            terminal_id: sale.terminal_id.clone(),
            pos_device_id: sale.pos_device_id.clone(),
            short_order_id: sale.short_order_id.clone(),
            amount: sale.amount,
            allowed_instruments: sale.allowed_instruments.clone(),
            auto_accept: sale.auto_accept,
            auto_accept_window_expiry_seconds: sale.auto_accept_window_expiry_seconds,
            pregenerated_dqr_transaction_id: sale.pregenerated_dqr_transaction_id.clone(),
            pregenerated_card_transaction_id: sale.pregenerated_card_transaction_id.clone(),
            transaction_id: sale.transaction_id.clone(),
            creation_timestamp: sale.creation_timestamp,
            created_at: sale.created_at,
            data: sale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_json(body: &str) -> RegisterSaleRequest {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_sale_status_round_trip() {
        assert_eq!(SaleStatus::Pending.as_str(), "PENDING");
        assert_eq!(SaleStatus::Success.as_str(), "SUCCESS");
        assert_eq!(SaleStatus::parse("PENDING"), Some(SaleStatus::Pending));
        assert_eq!(SaleStatus::parse("SUCCESS"), Some(SaleStatus::Success));
        assert_eq!(SaleStatus::parse("UNKNOWN"), None);
    }

    #[test]
    fn test_generate_transaction_id() {
        assert_eq!(generate_transaction_id(1700000000123), "TXN_1700000000123");
    }

    #[test]
    fn test_register_request_string_amount() {
        let request = request_json(
            r#"{"merchantId": "M1", "terminalId": "T1", "amount": "12.50"}"#,
        );
        assert_eq!(request.amount, 12.5);
        assert!(request.auto_accept);
        assert!(request.allowed_instruments.is_empty());
    }

    #[test]
    fn test_register_request_missing_amount_defaults_zero() {
        let request = request_json(r#"{"merchantId": "M1", "terminalId": "T1"}"#);
        assert_eq!(request.amount, 0.0);
    }

    #[test]
    fn test_register_request_validation_rejects_blank_ids() {
        use validator::Validate;
        let request = request_json(r#"{"merchantId": "", "terminalId": "T1"}"#);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_new_sale_stamps_generated_fields() {
        let request = request_json(
            r#"{"merchantId": "M1", "terminalId": "T1", "amount": 42, "shortOrderId": "SO-9"}"#,
        );
        let sale = NewSale::from_request(request);

        assert!(sale.transaction_id.starts_with(TRANSACTION_ID_PREFIX));
        assert_eq!(
            sale.transaction_id,
            format!("TXN_{}", sale.creation_timestamp)
        );
        assert_eq!(sale.created_at.timestamp_millis(), sale.creation_timestamp);
        assert_eq!(sale.amount, 42.0);
        assert_eq!(sale.short_order_id.as_deref(), Some("SO-9"));
    }

    #[test]
    fn test_new_sale_pair_is_swap_symmetric() {
        let a = NewSale::from_request(request_json(
            r#"{"merchantId": "M1", "terminalId": "T1"}"#,
        ));
        let b = NewSale::from_request(request_json(
            r#"{"merchantId": "T1", "terminalId": "M1"}"#,
        ));
        assert_eq!(a.pair(), b.pair());
    }

    #[test]
    fn test_sale_response_envelope() {
        let sale = Sale {
            merchant_id: "M1".to_string(),
            terminal_id: "T1".to_string(),
            pos_device_id: None,
            short_order_id: Some("SO-1".to_string()),
            amount: 12.5,
            allowed_instruments: vec!["DQR".to_string()],
            auto_accept: true,
            auto_accept_window_expiry_seconds: 30,
            pregenerated_dqr_transaction_id: None,
            pregenerated_card_transaction_id: None,
            transaction_id: "TXN_1".to_string(),
            created_at: Utc::now(),
            creation_timestamp: 1,
            status: SaleStatus::Pending,
            invoice_number: None,
        };

        let response = SaleResponse::success(sale);
        assert_eq!(response.code, "SUCCESS");
        assert_eq!(response.amount, 12.5);
        assert_eq!(response.data.status, SaleStatus::Pending);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["merchantId"], "M1");
        assert_eq!(json["data"]["status"], "PENDING");
        assert!(json["pregeneratedDQRTransactionId"].is_null());
    }
}
