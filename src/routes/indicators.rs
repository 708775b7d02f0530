use axum::{extract::State, http::header, Json};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{MarketIndicators, MarketSentiment};
use crate::services::indicator_service::calculate_market_report;
use crate::state::AppState;

pub const DISCLAIMER: &str =
    "These indicators are for educational purposes only. Not financial advice.";

/// Upstream data is daily, so a few minutes of edge caching is harmless
const CACHE_CONTROL: &str = "public, s-maxage=300, stale-while-revalidate=600";

#[derive(Debug, Serialize)]
pub struct IndicatorResponse {
    pub success: bool,
    pub data: BTreeMap<String, MarketIndicators>,
    pub market: MarketSentiment,
    pub timestamp: String,
    pub disclaimer: &'static str,
}

/// GET /api/crypto/indicators
/// Technical indicators for BTC, ETH and SOL
pub async fn get_indicators(
    State(state): State<AppState>,
) -> ([(header::HeaderName, &'static str); 1], Json<IndicatorResponse>) {
    let report = calculate_market_report(&state).await;

    tracing::info!("Indicator report: {}", report.market.headline);

    (
        [(header::CACHE_CONTROL, CACHE_CONTROL)],
        Json(IndicatorResponse {
            success: true,
            data: report.data,
            market: report.market,
            timestamp: Utc::now().to_rfc3339(),
            disclaimer: DISCLAIMER,
        }),
    )
}
