//! Terminal config entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the terminal_configs table.
#[derive(Debug, Clone, FromRow)]
pub struct TerminalConfigEntity {
    pub id: i64,
    pub merchant_id: String,
    pub terminal_id: String,
    pub integration_mode: String,
    pub integrated_mode_display_name: String,
    pub integration_mapping_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<TerminalConfigEntity> for domain::models::TerminalConfig {
    fn from(entity: TerminalConfigEntity) -> Self {
        Self {
            merchant_id: entity.merchant_id,
            terminal_id: entity.terminal_id,
            integration_mode: entity.integration_mode,
            integrated_mode_display_name: entity.integrated_mode_display_name,
            integration_mapping_type: entity.integration_mapping_type,
            timestamp: entity.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_config_entity_to_domain() {
        let entity = TerminalConfigEntity {
            id: 1,
            merchant_id: "M1".to_string(),
            terminal_id: "T1".to_string(),
            integration_mode: "STANDALONE".to_string(),
            integrated_mode_display_name: "STANDALONE".to_string(),
            integration_mapping_type: "ONE_TO_ONE".to_string(),
            created_at: Utc::now(),
        };

        let config: domain::models::TerminalConfig = entity.clone().into();
        assert_eq!(config.merchant_id, entity.merchant_id);
        assert_eq!(config.terminal_id, entity.terminal_id);
        assert_eq!(config.timestamp, entity.created_at);
    }
}
