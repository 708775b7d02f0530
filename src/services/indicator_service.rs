use crate::indicators::{calculate_all, market_sentiment};
use crate::models::{Asset, MarketHistory, MarketIndicators, MarketSentiment, TRACKED_ASSETS};
use crate::state::AppState;
use futures_util::future::join_all;
use std::collections::BTreeMap;
use tracing::{debug, error};

/// Indicators for every tracked asset plus the market-wide vote
#[derive(Debug, Clone)]
pub struct IndicatorReport {
    pub data: BTreeMap<String, MarketIndicators>,
    pub market: MarketSentiment,
}

/// Fetch history for one asset; any failure becomes an empty history so the
/// indicator fallbacks take over instead of the error
pub async fn fetch_history(state: &AppState, asset: &Asset) -> MarketHistory {
    match state
        .api_client
        .fetch_market_history(asset.id, state.config.history_days)
        .await
    {
        Ok(history) => {
            debug!(
                "Fetched {} prices, {} volumes for {}",
                history.prices.len(),
                history.volumes.len(),
                asset.symbol
            );
            history
        }
        Err(e) => {
            error!("Error fetching historical data for {}: {}", asset.id, e);
            MarketHistory::default()
        }
    }
}

/// Indicators for one asset's history
pub fn asset_indicators(history: &MarketHistory) -> MarketIndicators {
    if history.prices.is_empty() {
        return MarketIndicators::unavailable();
    }

    calculate_all(&history.prices, &history.volumes)
}

/// Build the report from already-fetched histories, in tracked-asset order
pub fn build_report(histories: &[(Asset, MarketHistory)]) -> IndicatorReport {
    let mut data = BTreeMap::new();
    let mut sentiments = Vec::with_capacity(histories.len());

    for (asset, history) in histories {
        let indicators = asset_indicators(history);
        debug!(
            "{}: RSI {:.2} ({:?}), MACD {:?}, MA {:?}, overall {:?}",
            asset.symbol,
            indicators.rsi.value,
            indicators.rsi.signal,
            indicators.macd.signal,
            indicators.moving_averages.signal,
            indicators.overall_sentiment
        );

        sentiments.push(indicators.overall_sentiment);
        data.insert(asset.symbol.to_string(), indicators);
    }

    IndicatorReport {
        data,
        market: market_sentiment(&sentiments),
    }
}

/// Fetch all tracked assets concurrently and compute their indicators
pub async fn calculate_market_report(state: &AppState) -> IndicatorReport {
    let histories = join_all(TRACKED_ASSETS.iter().map(|asset| async move {
        (*asset, fetch_history(state, asset).await)
    }))
    .await;

    build_report(&histories)
}
