//! Void-check endpoint handlers.
//!
//! Pure policy, no persistence: both endpoints answer from
//! `domain::services::allow_void` alone.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use domain::services::allow_void;

/// Void-check payload from the internal trigger.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVoidRequest {
    pub mid: String,
    pub tid: String,
    pub invoice_number: Option<String>,
}

/// Void-check verdict echoing the terminal identifiers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckVoidResponse {
    pub merchant_id: String,
    pub terminal_id: String,
    pub allow: bool,
}

/// Query parameters for the terminal-facing void check.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowVoidQuery {
    pub invoice_number: Option<String>,
}

/// Bare void-check verdict.
#[derive(Debug, Serialize)]
pub struct AllowVoidResponse {
    pub allow: bool,
}

/// Decide whether an invoice may be voided.
///
/// POST /internal/check-void
pub async fn check_void(
    State(_state): State<AppState>,
    Json(request): Json<CheckVoidRequest>,
) -> Json<CheckVoidResponse> {
    Json(CheckVoidResponse {
        merchant_id: request.mid,
        terminal_id: request.tid,
        allow: allow_void(request.invoice_number.as_deref()),
    })
}

/// Terminal-facing void check.
///
/// GET /v1/terminal/:mid/:tid/allow-void?invoiceNumber=
pub async fn allow_void_check(
    State(_state): State<AppState>,
    Path((_mid, _tid)): Path<(String, String)>,
    Query(query): Query<AllowVoidQuery>,
) -> Json<AllowVoidResponse> {
    Json(AllowVoidResponse {
        allow: allow_void(query.invoice_number.as_deref()),
    })
}
