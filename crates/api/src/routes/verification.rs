//! OTP verification endpoint handlers.
//!
//! Each provisioning workflow moves NONE -> ISSUED -> VERIFIED. The code is
//! never transmitted anywhere by `send`; the terminal collects it through
//! `dispatch`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::generate_otp;
use persistence::repositories::VerificationRepository;

/// OTP issuance payload.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    #[validate(length(min = 1, max = 64, message = "workflowId must be 1-64 characters"))]
    pub workflow_id: String,
    pub app_id: Option<String>,
    pub sim_no: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

/// Issuance acknowledgement; the code itself is deliberately absent.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpSentResponse {
    pub otp_sent: bool,
}

/// Dispatch response handing the current code to the terminal.
#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    pub otp: String,
    pub status: String,
}

/// Internal verify payload.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InternalVerifyRequest {
    #[validate(length(min = 1, max = 64, message = "workflowId must be 1-64 characters"))]
    pub workflow_id: String,
}

/// Internal verify acknowledgement.
#[derive(Debug, Serialize)]
pub struct VerifiedResponse {
    pub verified: bool,
}

/// Terminal-facing verify payload. The workflow id in the path is
/// authoritative; the body echo is accepted and ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[allow(dead_code)]
    pub workflow_id: Option<String>,
    pub verification_code: String,
}

/// Issue an OTP for a workflow (NONE -> ISSUED).
///
/// POST /internal/otp/send
pub async fn send_otp(
    State(state): State<AppState>,
    Json(request): Json<SendOtpRequest>,
) -> Result<Json<OtpSentResponse>, ApiError> {
    request.validate()?;

    let otp = generate_otp(state.config.otp.digits);
    let repo = VerificationRepository::new(state.pool.clone());
    let verification = repo
        .issue(
            &request.workflow_id,
            &otp,
            request.app_id.as_deref(),
            request.sim_no.as_deref(),
            request.latitude.as_deref(),
            request.longitude.as_deref(),
        )
        .await?;

    info!(workflow_id = %verification.workflow_id, "OTP issued");

    Ok(Json(OtpSentResponse { otp_sent: true }))
}

/// Hand the current code to the terminal, issuing one lazily if `send` was
/// skipped.
///
/// POST /verification/:workflow_id/dispatch
pub async fn dispatch_otp(
    State(state): State<AppState>,
    Path(workflow_id): Path<String>,
) -> Result<Json<DispatchResponse>, ApiError> {
    let repo = VerificationRepository::new(state.pool.clone());

    let verification = match repo.find_by_workflow(&workflow_id).await? {
        Some(verification) => verification,
        None => {
            // Auto-issue so verification can proceed even when the send
            // step never ran for this workflow.
            let otp = generate_otp(state.config.otp.digits);
            info!(workflow_id = %workflow_id, "No OTP on record, auto-issuing");
            repo.issue(&workflow_id, &otp, None, None, None, None).await?
        }
    };

    Ok(Json(DispatchResponse {
        otp: verification.otp,
        status: "SENT".to_string(),
    }))
}

/// Mark a workflow verified from the internal side.
///
/// POST /internal/otp/verify
///
/// Legacy stub semantics: acknowledges even when the workflow is unknown.
pub async fn verify_internal(
    State(state): State<AppState>,
    Json(request): Json<InternalVerifyRequest>,
) -> Result<Json<VerifiedResponse>, ApiError> {
    request.validate()?;

    let repo = VerificationRepository::new(state.pool.clone());
    let updated = repo.mark_verified(&request.workflow_id).await?;

    info!(
        workflow_id = %request.workflow_id,
        record_found = updated,
        "Internal verify"
    );

    Ok(Json(VerifiedResponse { verified: true }))
}

/// Verify a submitted code (ISSUED -> VERIFIED).
///
/// POST /verification/:workflow_id/verify
pub async fn verify_otp(
    State(state): State<AppState>,
    Path(workflow_id): Path<String>,
    Json(request): Json<VerifyOtpRequest>,
) -> Result<StatusCode, ApiError> {
    let repo = VerificationRepository::new(state.pool.clone());

    let verification = repo
        .find_by_workflow(&workflow_id)
        .await?
        .ok_or_else(|| {
            ApiError::InvalidWorkflow(format!("No verification record for workflow {}", workflow_id))
        })?;

    if !verification.code_matches(&request.verification_code) {
        return Err(ApiError::InvalidOtp(
            "Submitted code does not match".to_string(),
        ));
    }

    repo.mark_verified(&workflow_id).await?;
    info!(workflow_id = %workflow_id, "Workflow verified");

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_request_requires_workflow_id() {
        let request: SendOtpRequest = serde_json::from_str(r#"{"workflowId": ""}"#).unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_otp_sent_response_shape() {
        let json = serde_json::to_value(OtpSentResponse { otp_sent: true }).unwrap();
        assert_eq!(json["otpSent"], true);
    }

    #[test]
    fn test_verify_request_accepts_body_echo() {
        let request: VerifyOtpRequest = serde_json::from_str(
            r#"{"workflowId": "WF-1", "verificationCode": "123456"}"#,
        )
        .unwrap();
        assert_eq!(request.verification_code, "123456");
    }
}
