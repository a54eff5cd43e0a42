//! Terminal config repository for database operations.

use domain::models::TerminalConfig;
use sqlx::PgPool;

use crate::entities::TerminalConfigEntity;

/// Repository for terminal config database operations.
#[derive(Clone)]
pub struct TerminalConfigRepository {
    pool: PgPool,
}

impl TerminalConfigRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a config, idempotent PUT semantics: insert with the given
    /// values when absent, overwrite the mode fields when present. The
    /// original creation timestamp survives updates.
    pub async fn upsert(
        &self,
        merchant_id: &str,
        terminal_id: &str,
        integration_mode: &str,
        integrated_mode_display_name: &str,
        integration_mapping_type: &str,
    ) -> Result<TerminalConfig, sqlx::Error> {
        let entity = sqlx::query_as::<_, TerminalConfigEntity>(
            r#"
            INSERT INTO terminal_configs
                (merchant_id, terminal_id, integration_mode,
                 integrated_mode_display_name, integration_mapping_type)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (merchant_id, terminal_id) DO UPDATE SET
                integration_mode = EXCLUDED.integration_mode,
                integrated_mode_display_name = EXCLUDED.integrated_mode_display_name,
                integration_mapping_type = EXCLUDED.integration_mapping_type
            RETURNING id, merchant_id, terminal_id, integration_mode,
                      integrated_mode_display_name, integration_mapping_type, created_at
            "#,
        )
        .bind(merchant_id)
        .bind(terminal_id)
        .bind(integration_mode)
        .bind(integrated_mode_display_name)
        .bind(integration_mapping_type)
        .fetch_one(&self.pool)
        .await?;

        Ok(entity.into())
    }

    /// Find a config by the exact (merchant, terminal) pair.
    pub async fn find_by_pair(
        &self,
        merchant_id: &str,
        terminal_id: &str,
    ) -> Result<Option<TerminalConfig>, sqlx::Error> {
        let entity = sqlx::query_as::<_, TerminalConfigEntity>(
            r#"
            SELECT id, merchant_id, terminal_id, integration_mode,
                   integrated_mode_display_name, integration_mapping_type, created_at
            FROM terminal_configs
            WHERE merchant_id = $1 AND terminal_id = $2
            "#,
        )
        .bind(merchant_id)
        .bind(terminal_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entity.map(Into::into))
    }
}
