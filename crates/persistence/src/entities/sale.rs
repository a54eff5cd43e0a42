//! Sale entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::SaleStatus;
use sqlx::FromRow;

/// Database row mapping for the sales table.
#[derive(Debug, Clone, FromRow)]
pub struct SaleEntity {
    pub id: i64,
    pub merchant_id: String,
    pub terminal_id: String,
    pub pair_key: String,
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
    pub status: String,
    pub invoice_number: Option<String>,
}

impl From<SaleEntity> for domain::models::Sale {
    fn from(entity: SaleEntity) -> Self {
        Self {
            merchant_id: entity.merchant_id,
            terminal_id: entity.terminal_id,
            pos_device_id: entity.pos_device_id,
            short_order_id: entity.short_order_id,
            amount: entity.amount,
            allowed_instruments: entity.allowed_instruments,
            auto_accept: entity.auto_accept,
            auto_accept_window_expiry_seconds: entity.auto_accept_window_expiry_seconds,
            pregenerated_dqr_transaction_id: entity.pregenerated_dqr_transaction_id,
            pregenerated_card_transaction_id: entity.pregenerated_card_transaction_id,
            transaction_id: entity.transaction_id,
            created_at: entity.created_at,
            creation_timestamp: entity.creation_timestamp,
            // The repository only ever writes PENDING or SUCCESS.
            status: SaleStatus::parse(&entity.status).unwrap_or(SaleStatus::Pending),
            invoice_number: entity.invoice_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity() -> SaleEntity {
        SaleEntity {
            id: 1,
            merchant_id: "M1".to_string(),
            terminal_id: "T1".to_string(),
            pair_key: "M1|T1".to_string(),
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
            status: "PENDING".to_string(),
            invoice_number: None,
        }
    }

    #[test]
    fn test_sale_entity_to_domain() {
        let sale: domain::models::Sale = entity().into();
        assert_eq!(sale.merchant_id, "M1");
        assert_eq!(sale.amount, 12.5);
        assert_eq!(sale.status, SaleStatus::Pending);
    }

    #[test]
    fn test_sale_entity_unknown_status_falls_back_to_pending() {
        let mut row = entity();
        row.status = "GARBLED".to_string();
        let sale: domain::models::Sale = row.into();
        assert_eq!(sale.status, SaleStatus::Pending);
    }
}
