use serde::{Deserialize, Serialize};

/// Directional reading shared by RSI, MACD and the moving-average trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Signal {
    Bullish,
    Bearish,
    Neutral,
}

/// Volume participation reading. Deliberately separate from `Signal`:
/// it carries no direction and never takes part in the sentiment vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeSignal {
    High,
    Low,
    Normal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorResult {
    pub value: f64,
    pub signal: Signal,
    pub description: String,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacdResult {
    pub macd_line: f64,
    pub signal_line: f64,
    pub histogram: f64,
    pub signal: Signal,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovingAverageResult {
    pub sma20: f64,
    pub sma50: f64,
    pub current_price: f64,
    pub signal: Signal,
    pub interpretation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeTrendResult {
    pub current: f64,
    pub average: f64,
    pub signal: VolumeSignal,
    pub interpretation: String,
}

/// Full indicator report for one asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndicators {
    pub rsi: IndicatorResult,
    pub macd: MacdResult,
    pub moving_averages: MovingAverageResult,
    pub volume_trend: VolumeTrendResult,
    pub overall_sentiment: Signal,
}

impl MarketIndicators {
    /// Placeholder report used when no price history could be fetched
    pub fn unavailable() -> Self {
        const UNAVAILABLE: &str = "Data unavailable";

        Self {
            rsi: IndicatorResult {
                value: 50.0,
                signal: Signal::Neutral,
                description: "RSI (14)".to_string(),
                interpretation: UNAVAILABLE.to_string(),
            },
            macd: MacdResult {
                macd_line: 0.0,
                signal_line: 0.0,
                histogram: 0.0,
                signal: Signal::Neutral,
                interpretation: UNAVAILABLE.to_string(),
            },
            moving_averages: MovingAverageResult {
                sma20: 0.0,
                sma50: 0.0,
                current_price: 0.0,
                signal: Signal::Neutral,
                interpretation: UNAVAILABLE.to_string(),
            },
            volume_trend: VolumeTrendResult {
                current: 0.0,
                average: 0.0,
                signal: VolumeSignal::Normal,
                interpretation: UNAVAILABLE.to_string(),
            },
            overall_sentiment: Signal::Neutral,
        }
    }
}

/// Sentiment across all tracked assets
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSentiment {
    pub sentiment: Signal,
    pub bullish_count: usize,
    pub bearish_count: usize,
    pub headline: String,
}

/// Asset tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// CoinGecko coin id
    pub id: &'static str,
    pub symbol: &'static str,
}

pub const TRACKED_ASSETS: [Asset; 3] = [
    Asset { id: "bitcoin", symbol: "BTC" },
    Asset { id: "ethereum", symbol: "ETH" },
    Asset { id: "solana", symbol: "SOL" },
];

/// Daily price and volume history, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketHistory {
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CryptoPrice {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub price_change_percentage_24h: f64,
    pub image: String,
}
