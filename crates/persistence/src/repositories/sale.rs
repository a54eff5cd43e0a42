//! Sale repository for database operations.
//!
//! All lookups and upserts key on the canonical pair (`TerminalPair`), so a
//! request with merchant and terminal identifiers swapped hits the same
//! records as the straight order.

use domain::models::{NewSale, Sale, SaleStatus, TerminalPair};
use sqlx::PgPool;

use crate::entities::SaleEntity;

const SALE_COLUMNS: &str = "id, merchant_id, terminal_id, pair_key, pos_device_id, \
     short_order_id, amount, allowed_instruments, auto_accept, \
     auto_accept_window_expiry_seconds, pregenerated_dqr_transaction_id, \
     pregenerated_card_transaction_id, transaction_id, created_at, \
     creation_timestamp, status, invoice_number";

/// Repository for sale database operations.
#[derive(Clone)]
pub struct SaleRepository {
    pool: PgPool,
}

impl SaleRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a sale: replace the open PENDING sale for the terminal pair
    /// if one exists, otherwise insert a new one.
    ///
    /// The partial unique index on `(pair_key) WHERE status = 'PENDING'`
    /// makes the operation atomic, so two concurrent registrations for the
    /// same pair cannot both insert.
    pub async fn upsert_pending(&self, sale: &NewSale) -> Result<Sale, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO sales
                (merchant_id, terminal_id, pair_key, pos_device_id, short_order_id,
                 amount, allowed_instruments, auto_accept,
                 auto_accept_window_expiry_seconds, pregenerated_dqr_transaction_id,
                 pregenerated_card_transaction_id, transaction_id, created_at,
                 creation_timestamp, status, invoice_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            ON CONFLICT (pair_key) WHERE status = 'PENDING' DO UPDATE SET
                merchant_id = EXCLUDED.merchant_id,
                terminal_id = EXCLUDED.terminal_id,
                pos_device_id = EXCLUDED.pos_device_id,
                short_order_id = EXCLUDED.short_order_id,
                amount = EXCLUDED.amount,
                allowed_instruments = EXCLUDED.allowed_instruments,
                auto_accept = EXCLUDED.auto_accept,
                auto_accept_window_expiry_seconds = EXCLUDED.auto_accept_window_expiry_seconds,
                pregenerated_dqr_transaction_id = EXCLUDED.pregenerated_dqr_transaction_id,
                pregenerated_card_transaction_id = EXCLUDED.pregenerated_card_transaction_id,
                transaction_id = EXCLUDED.transaction_id,
                created_at = EXCLUDED.created_at,
                creation_timestamp = EXCLUDED.creation_timestamp,
                invoice_number = EXCLUDED.invoice_number
            RETURNING {SALE_COLUMNS}
            "#
        );

        let entity = sqlx::query_as::<_, SaleEntity>(&query)
            .bind(&sale.merchant_id)
            .bind(&sale.terminal_id)
            .bind(sale.pair().key())
            .bind(&sale.pos_device_id)
            .bind(&sale.short_order_id)
            .bind(sale.amount)
            .bind(&sale.allowed_instruments)
            .bind(sale.auto_accept)
            .bind(sale.auto_accept_window_expiry_seconds)
            .bind(&sale.pregenerated_dqr_transaction_id)
            .bind(&sale.pregenerated_card_transaction_id)
            .bind(&sale.transaction_id)
            .bind(sale.created_at)
            .bind(sale.creation_timestamp)
            .bind(SaleStatus::Pending.as_str())
            .bind(&sale.invoice_number)
            .fetch_one(&self.pool)
            .await?;

        Ok(entity.into())
    }

    /// Newest sale for the terminal pair, any status.
    pub async fn find_latest_by_pair(
        &self,
        pair: &TerminalPair,
    ) -> Result<Option<Sale>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {SALE_COLUMNS}
            FROM sales
            WHERE pair_key = $1
            ORDER BY creation_timestamp DESC, id DESC
            LIMIT 1
            "#
        );

        let entity = sqlx::query_as::<_, SaleEntity>(&query)
            .bind(pair.key())
            .fetch_optional(&self.pool)
            .await?;

        Ok(entity.map(Into::into))
    }

    /// Number of open PENDING sales for the terminal pair.
    ///
    /// The schema caps this at one; exposed for health checks and tests.
    pub async fn count_pending_by_pair(&self, pair: &TerminalPair) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FROM sales
            WHERE pair_key = $1 AND status = 'PENDING'
            "#,
        )
        .bind(pair.key())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
