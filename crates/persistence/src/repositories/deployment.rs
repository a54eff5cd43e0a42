//! Deployment repository for database operations.

use domain::models::Deployment;
use sqlx::PgPool;

use crate::entities::DeploymentEntity;

const DEPLOYMENT_COLUMNS: &str = "id, sim_no, merchant_id, terminal_id, pos_device_id, \
     app_id, status, workflow_id, application_number, created_at, updated_at";

/// Repository for deployment database operations.
#[derive(Clone)]
pub struct DeploymentRepository {
    pool: PgPool,
}

impl DeploymentRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a deployment, keyed on the terminal alone.
    ///
    /// Request fields overwrite stored values when provided; absent fields
    /// keep what is already there. `workflow_id` and `application_number`
    /// are insert-only defaults: the candidates passed here are written on
    /// first registration and silently discarded on every update.
    #[allow(clippy::too_many_arguments)]
    pub async fn upsert(
        &self,
        terminal_id: &str,
        merchant_id: Option<&str>,
        sim_no: Option<&str>,
        pos_device_id: Option<&str>,
        app_id: Option<&str>,
        status: &str,
        workflow_id: &str,
        application_number: &str,
    ) -> Result<Deployment, sqlx::Error> {
        let query = format!(
            r#"
            INSERT INTO deployments
                (terminal_id, merchant_id, sim_no, pos_device_id, app_id,
                 status, workflow_id, application_number)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (terminal_id) DO UPDATE SET
                merchant_id = COALESCE(EXCLUDED.merchant_id, deployments.merchant_id),
                sim_no = COALESCE(EXCLUDED.sim_no, deployments.sim_no),
                pos_device_id = COALESCE(EXCLUDED.pos_device_id, deployments.pos_device_id),
                app_id = COALESCE(EXCLUDED.app_id, deployments.app_id),
                status = EXCLUDED.status,
                updated_at = NOW()
            RETURNING {DEPLOYMENT_COLUMNS}
            "#
        );

        let entity = sqlx::query_as::<_, DeploymentEntity>(&query)
            .bind(terminal_id)
            .bind(merchant_id)
            .bind(sim_no)
            .bind(pos_device_id)
            .bind(app_id)
            .bind(status)
            .bind(workflow_id)
            .bind(application_number)
            .fetch_one(&self.pool)
            .await?;

        Ok(entity.into())
    }

    /// Find a deployment by terminal serial or SIM number.
    pub async fn find_by_terminal_or_sim(
        &self,
        identifier: &str,
    ) -> Result<Option<Deployment>, sqlx::Error> {
        let query = format!(
            r#"
            SELECT {DEPLOYMENT_COLUMNS}
            FROM deployments
            WHERE terminal_id = $1 OR sim_no = $1
            ORDER BY updated_at DESC
            LIMIT 1
            "#
        );

        let entity = sqlx::query_as::<_, DeploymentEntity>(&query)
            .bind(identifier)
            .fetch_optional(&self.pool)
            .await?;

        Ok(entity.map(Into::into))
    }
}
