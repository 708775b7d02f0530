use crate::config::AppConfig;
use crate::models::{CryptoPrice, MarketHistory};
use serde::Deserialize;

/// `/coins/{id}/market_chart` body; each entry is [timestamp_ms, value]
#[derive(Deserialize)]
struct MarketChartResponse {
    prices: Vec<(f64, f64)>,
    #[serde(default)]
    total_volumes: Vec<(f64, f64)>,
}

/// `/coins/markets` entry; CoinGecko omits or nulls fields for thin markets
#[derive(Deserialize)]
struct CoinGeckoMarket {
    id: Option<String>,
    symbol: Option<String>,
    name: Option<String>,
    image: Option<String>,
    current_price: Option<f64>,
    price_change_percentage_24h: Option<f64>,
}

impl From<CoinGeckoMarket> for CryptoPrice {
    fn from(coin: CoinGeckoMarket) -> Self {
        Self {
            id: coin.id.unwrap_or_default(),
            symbol: coin.symbol.unwrap_or_default(),
            name: coin.name.unwrap_or_default(),
            current_price: coin.current_price.unwrap_or(0.0),
            price_change_percentage_24h: coin.price_change_percentage_24h.unwrap_or(0.0),
            image: coin.image.unwrap_or_default(),
        }
    }
}

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug)]
pub enum ApiError {
    RequestFailed(String),
    Status(u16),
    ParseError(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Status(code) => write!(f, "CoinGecko API error: {}", code),
            ApiError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .user_agent("crypto-signals/0.1")
            .build()
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.coingecko_base_url.clone(),
        })
    }

    async fn get_text(&self, url: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ApiError::ParseError(format!("Failed to get response text: {}", e)))
    }

    /// Fetch daily price and volume history for a coin, oldest first
    pub async fn fetch_market_history(
        &self,
        coin_id: &str,
        days: u32,
    ) -> Result<MarketHistory, ApiError> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency=usd&days={}&interval=daily",
            self.base_url, coin_id, days
        );

        let body = self.get_text(&url).await?;
        parse_market_chart(&body)
    }

    /// Fetch spot quotes for the given coin ids, largest market cap first
    pub async fn fetch_markets(&self, coin_ids: &[&str]) -> Result<Vec<CryptoPrice>, ApiError> {
        let url = format!(
            "{}/coins/markets?vs_currency=usd&ids={}&order=market_cap_desc&per_page={}&page=1&sparkline=false",
            self.base_url,
            coin_ids.join(","),
            coin_ids.len()
        );

        let body = self.get_text(&url).await?;
        parse_markets(&body)
    }
}

fn parse_market_chart(body: &str) -> Result<MarketHistory, ApiError> {
    let mut chart: MarketChartResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::ParseError(format!("Failed to parse market chart: {}", e)))?;

    // Sort by timestamp (ascending)
    chart.prices.sort_by(|a, b| a.0.total_cmp(&b.0));
    chart.total_volumes.sort_by(|a, b| a.0.total_cmp(&b.0));

    Ok(MarketHistory {
        prices: chart.prices.into_iter().map(|(_, price)| price).collect(),
        volumes: chart.total_volumes.into_iter().map(|(_, volume)| volume).collect(),
    })
}

fn parse_markets(body: &str) -> Result<Vec<CryptoPrice>, ApiError> {
    let markets: Vec<CoinGeckoMarket> = serde_json::from_str(body)
        .map_err(|e| ApiError::ParseError(format!("Failed to parse markets: {}", e)))?;

    Ok(markets.into_iter().map(CryptoPrice::from).collect())
}
