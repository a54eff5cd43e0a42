//! Deployment endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{
    generate_application_number, generate_workflow_id, Deployment, RegisterDeploymentRequest,
    DEFAULT_DEPLOYMENT_STATUS,
};
use persistence::repositories::DeploymentRepository;

/// Register or update a deployment.
///
/// POST /internal/deploy
///
/// Keyed on the terminal alone. `workflowId` and `applicationNumber` are
/// generated for the first registration and preserved across updates; the
/// candidates generated here are discarded when the terminal already has a
/// deployment.
pub async fn register_deployment(
    State(state): State<AppState>,
    Json(request): Json<RegisterDeploymentRequest>,
) -> Result<Json<Deployment>, ApiError> {
    request.validate()?;

    let workflow_id = generate_workflow_id(shared::clock::epoch_millis());
    let application_number = generate_application_number();
    let status = request
        .status
        .as_deref()
        .unwrap_or(DEFAULT_DEPLOYMENT_STATUS);

    let repo = DeploymentRepository::new(state.pool.clone());
    let deployment = repo
        .upsert(
            &request.terminal_id,
            request.merchant_id.as_deref(),
            request.sim_no.as_deref(),
            request.pos_device_id.as_deref(),
            request.app_id.as_deref(),
            status,
            &workflow_id,
            &application_number,
        )
        .await?;

    info!(
        terminal_id = %deployment.terminal_id,
        workflow_id = %deployment.workflow_id,
        status = %deployment.status,
        "Deployment registered"
    );

    Ok(Json(deployment))
}

/// Fetch the deployment for a terminal serial or SIM number.
///
/// POST /:terminal_sno/deploy
///
/// Fetch-only: an unknown terminal is told to register through the internal
/// endpoint first.
pub async fn fetch_deployment(
    State(state): State<AppState>,
    Path(terminal_sno): Path<String>,
) -> Result<Json<Deployment>, ApiError> {
    let repo = DeploymentRepository::new(state.pool.clone());
    let deployment = repo.find_by_terminal_or_sim(&terminal_sno).await?.ok_or_else(|| {
        ApiError::NotFound(format!(
            "No deployment found for {}; register the terminal via /internal/deploy first",
            terminal_sno
        ))
    })?;

    info!(
        terminal_id = %deployment.terminal_id,
        workflow_id = %deployment.workflow_id,
        "Deployment fetched"
    );

    Ok(Json(deployment))
}
