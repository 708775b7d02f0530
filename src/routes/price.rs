use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::Serialize;

use crate::models::{CryptoPrice, TRACKED_ASSETS};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PricesResponse {
    pub prices: Vec<CryptoPrice>,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub prices: Vec<CryptoPrice>,
}

/// GET /api/crypto/prices
/// Spot quotes for the tracked assets
pub async fn get_prices(
    State(state): State<AppState>,
) -> Result<Json<PricesResponse>, (StatusCode, Json<ErrorResponse>)> {
    let ids: Vec<&str> = TRACKED_ASSETS.iter().map(|asset| asset.id).collect();

    match state.api_client.fetch_markets(&ids).await {
        Ok(prices) => Ok(Json(PricesResponse {
            prices,
            timestamp: Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            tracing::error!("Error fetching crypto prices: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch crypto prices".to_string(),
                    prices: Vec::new(),
                }),
            ))
        }
    }
}
