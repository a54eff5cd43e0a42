//! Verification repository for database operations.

use domain::models::Verification;
use sqlx::PgPool;

use crate::entities::VerificationEntity;

const VERIFICATION_COLUMNS: &str = "id, workflow_id, app_id, otp, is_verified, sim_no, \
     latitude, longitude, created_at, updated_at";

/// Repository for OTP verification database operations.
#[derive(Clone)]
pub struct VerificationRepository {
    pool: PgPool,
}

impl VerificationRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Issue a code for a workflow (NONE -> ISSUED).
    ///
    /// Re-issuing replaces the stored code and resets the verified flag, so
    /// a fresh send always invalidates the previous code.
    pub async fn issue(
        &self,
        workflow_id: &str,
        otp: &str,
        app_id: Option<&str>,
        sim_no: Option<&str>,
        latitude: Option<&str>,
        longitude: Option<&str>,
    ) -> Result<Verification, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO verifications
                (workflow_id, app_id, otp, is_verified, sim_no, latitude, longitude)
            VALUES ($1, $2, $3, FALSE, $4, $5, $6)
            ON CONFLICT (workflow_id) DO UPDATE SET
                otp = EXCLUDED.otp,
                is_verified = FALSE,
                app_id = COALESCE(EXCLUDED.app_id, verifications.app_id),
                sim_no = COALESCE(EXCLUDED.sim_no, verifications.sim_no),
                latitude = COALESCE(EXCLUDED.latitude, verifications.latitude),
                longitude = COALESCE(EXCLUDED.longitude, verifications.longitude),
                updated_at = NOW()
            RETURNING {VERIFICATION_COLUMNS}
            "#
        );

        let entity = sqlx::query_as::<_, VerificationEntity>(&query)
            .bind(workflow_id)
            .bind(app_id)
            .bind(otp)
            .bind(sim_no)
            .bind(latitude)
            .bind(longitude)
            .fetch_one(&self.pool)
            .await?;

        Ok(entity.into())
    }

    /// Find the verification record for a workflow.
    pub async fn find_by_workflow(
        &self,
        workflow_id: &str,
    ) -> Result<Option<Verification>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {VERIFICATION_COLUMNS}
            FROM verifications
            WHERE workflow_id = $1
            "#
        );

        let entity = sqlx::query_as::<_, VerificationEntity>(&query)
            .bind(workflow_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entity.map(Into::into))
    }

    /// Mark a workflow verified (ISSUED -> VERIFIED).
    ///
    /// Returns false when no record exists for the workflow.
    pub async fn mark_verified(&self, workflow_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE verifications
            SET is_verified = TRUE, updated_at = NOW()
            WHERE workflow_id = $1
            "#,
        )
        .bind(workflow_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
