//! Terminal config endpoint handlers.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{
    TerminalConfig, DEFAULT_INTEGRATION_MODE, DEFAULT_MAPPING_TYPE, DEFAULT_MODE_DISPLAY_NAME,
};
use persistence::repositories::TerminalConfigRepository;

/// Config registration payload. The terminal firmware sends the short `mid`
/// and `tid` keys here, unlike the sale endpoints.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterConfigRequest {
    #[validate(length(min = 1, max = 64, message = "mid must be 1-64 characters"))]
    pub mid: String,
    #[validate(length(min = 1, max = 64, message = "tid must be 1-64 characters"))]
    pub tid: String,
    pub integration_mode: Option<String>,
    pub integrated_mode_display_name: Option<String>,
    pub integration_mapping_type: Option<String>,
}

/// Register or update a terminal config.
///
/// POST /internal/config
///
/// Idempotent PUT semantics: absent fields fall back to the standalone
/// defaults, and a repeated registration overwrites the mode fields.
pub async fn register_config(
    State(state): State<AppState>,
    Json(request): Json<RegisterConfigRequest>,
) -> Result<Json<TerminalConfig>, ApiError> {
    request.validate()?;

    let repo = TerminalConfigRepository::new(state.pool.clone());
    let config = repo
        .upsert(
            &request.mid,
            &request.tid,
            request
                .integration_mode
                .as_deref()
                .unwrap_or(DEFAULT_INTEGRATION_MODE),
            request
                .integrated_mode_display_name
                .as_deref()
                .unwrap_or(DEFAULT_MODE_DISPLAY_NAME),
            request
                .integration_mapping_type
                .as_deref()
                .unwrap_or(DEFAULT_MAPPING_TYPE),
        )
        .await?;

    info!(
        merchant_id = %config.merchant_id,
        terminal_id = %config.terminal_id,
        integration_mode = %config.integration_mode,
        "Terminal config registered"
    );

    Ok(Json(config))
}

/// Look up the integrated-mode config for a terminal.
///
/// GET /v1/terminal/:mid/:tid/integrated-mode-config
///
/// A missing config is not an error; the terminal treats an empty object as
/// "not yet configured".
pub async fn get_config(
    State(state): State<AppState>,
    Path((mid, tid)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let repo = TerminalConfigRepository::new(state.pool.clone());
    let config = repo.find_by_pair(&mid, &tid).await?;

    let body = match config {
        Some(config) => serde_json::to_value(config)
            .map_err(|e| ApiError::Internal(format!("Serialization error: {}", e)))?,
        None => serde_json::json!({}),
    };

    Ok(Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_short_keys() {
        let request: RegisterConfigRequest = serde_json::from_str(
            r#"{"mid": "M1", "tid": "T1", "integrationMode": "INTEGRATED"}"#,
        )
        .unwrap();
        assert_eq!(request.mid, "M1");
        assert_eq!(request.integration_mode.as_deref(), Some("INTEGRATED"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_blank_mid() {
        let request: RegisterConfigRequest =
            serde_json::from_str(r#"{"mid": "", "tid": "T1"}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
