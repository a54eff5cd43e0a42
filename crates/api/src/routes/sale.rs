//! Sale endpoint handlers.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{NewSale, RegisterSaleRequest, SaleResponse, TerminalPair};
use persistence::repositories::SaleRepository;
use shared::validation::has_identifier;

/// Sale lookup payload from the point of sale. Both identifiers are
/// required but arrive in either order.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLookupRequest {
    pub merchant_id: Option<String>,
    pub terminal_id: Option<String>,
}

/// Register a sale pushed by the cloud trigger.
///
/// POST /internal/sale
///
/// Replaces the open PENDING sale for the terminal pair, or creates one.
/// The pair is matched order-independently, so a registration with swapped
/// identifiers updates the same pending slot.
pub async fn register_sale(
    State(state): State<AppState>,
    Json(request): Json<RegisterSaleRequest>,
) -> Result<Json<SaleResponse>, ApiError> {
    request.validate()?;

    let sale = NewSale::from_request(request);
    info!(
        merchant_id = %sale.merchant_id,
        terminal_id = %sale.terminal_id,
        transaction_id = %sale.transaction_id,
        amount = sale.amount,
        "Registering sale"
    );

    let repo = SaleRepository::new(state.pool.clone());
    let stored = repo.upsert_pending(&sale).await?;

    info!(
        transaction_id = %stored.transaction_id,
        status = %stored.status,
        "Sale stored"
    );

    Ok(Json(SaleResponse::success(stored)))
}

/// Fetch the latest sale for a terminal pair.
///
/// POST /v1/sale-request
///
/// Validation runs before any store access: a request missing either
/// identifier is rejected without touching the database. The lookup itself
/// tolerates swapped identifiers.
pub async fn sale_request(
    State(state): State<AppState>,
    Json(request): Json<SaleLookupRequest>,
) -> Result<Json<SaleResponse>, ApiError> {
    if !has_identifier(request.merchant_id.as_deref())
        || !has_identifier(request.terminal_id.as_deref())
    {
        return Err(ApiError::Validation(
            "merchantId and terminalId are required".to_string(),
        ));
    }

    let merchant_id = request.merchant_id.unwrap_or_default();
    let terminal_id = request.terminal_id.unwrap_or_default();
    let pair = TerminalPair::new(&merchant_id, &terminal_id);

    let repo = SaleRepository::new(state.pool.clone());
    let sale = repo
        .find_latest_by_pair(&pair)
        .await?
        .ok_or_else(|| ApiError::NotFound("No sale found for this terminal".to_string()))?;

    info!(
        pair = %pair,
        transaction_id = %sale.transaction_id,
        amount = sale.amount,
        "Sale fetched"
    );

    Ok(Json(SaleResponse::success(sale)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_request_parses_partial_body() {
        let request: SaleLookupRequest =
            serde_json::from_str(r#"{"merchantId": "M1"}"#).unwrap();
        assert_eq!(request.merchant_id.as_deref(), Some("M1"));
        assert!(request.terminal_id.is_none());
    }

    #[test]
    fn test_lookup_request_blank_id_fails_identifier_check() {
        let request: SaleLookupRequest =
            serde_json::from_str(r#"{"merchantId": "M1", "terminalId": "  "}"#).unwrap();
        assert!(has_identifier(request.merchant_id.as_deref()));
        assert!(!has_identifier(request.terminal_id.as_deref()));
    }
}
