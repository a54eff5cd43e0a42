//! Deployment entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the deployments table.
#[derive(Debug, Clone, FromRow)]
pub struct DeploymentEntity {
    pub id: i64,
    pub sim_no: Option<String>,
    pub merchant_id: Option<String>,
    pub terminal_id: String,
    pub pos_device_id: Option<String>,
    pub app_id: Option<String>,
    pub status: String,
    pub workflow_id: String,
    pub application_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<DeploymentEntity> for domain::models::Deployment {
    fn from(entity: DeploymentEntity) -> Self {
        Self {
            sim_no: entity.sim_no,
            merchant_id: entity.merchant_id,
            terminal_id: entity.terminal_id,
            pos_device_id: entity.pos_device_id,
            app_id: entity.app_id,
            status: entity.status,
            workflow_id: entity.workflow_id,
            application_number: entity.application_number,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
