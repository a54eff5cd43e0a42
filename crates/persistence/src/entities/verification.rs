//! Verification entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database row mapping for the verifications table.
#[derive(Debug, Clone, FromRow)]
pub struct VerificationEntity {
    pub id: i64,
    pub workflow_id: String,
    pub app_id: Option<String>,
    pub otp: String,
    pub is_verified: bool,
    pub sim_no: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VerificationEntity> for domain::models::Verification {
    fn from(entity: VerificationEntity) -> Self {
        Self {
            workflow_id: entity.workflow_id,
            app_id: entity.app_id,
            otp: entity.otp,
            is_verified: entity.is_verified,
            sim_no: entity.sim_no,
            latitude: entity.latitude,
            longitude: entity.longitude,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_entity_to_domain() {
        let entity = VerificationEntity {
            id: 1,
            workflow_id: "WF-1".to_string(),
            app_id: None,
            otp: "123456".to_string(),
            is_verified: false,
            sim_no: None,
            latitude: Some("12.97".to_string()),
            longitude: Some("77.59".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let verification: domain::models::Verification = entity.clone().into();
        assert_eq!(verification.workflow_id, entity.workflow_id);
        assert_eq!(verification.otp, entity.otp);
        assert!(!verification.is_verified);
    }
}
