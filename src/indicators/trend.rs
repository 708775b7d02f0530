use super::{round2, SMA};
use crate::models::{MovingAverageResult, Signal};

/// Compare the latest close against SMA20 and SMA50
/// - Price above both: uptrend
/// - Price below both: downtrend
/// - Mixed: consolidation
pub fn analyze_moving_averages(prices: &[f64]) -> MovingAverageResult {
    let current_price = prices.last().copied().unwrap_or(0.0);
    let sma20 = SMA::new(20).calculate(prices);
    let sma50 = SMA::new(50).calculate(prices);

    let (signal, interpretation) = if prices.is_empty() {
        (
            Signal::Neutral,
            "Insufficient data for moving average analysis",
        )
    } else if current_price > sma20 && current_price > sma50 {
        (
            Signal::Bullish,
            "Price above both moving averages - uptrend confirmed",
        )
    } else if current_price < sma20 && current_price < sma50 {
        (
            Signal::Bearish,
            "Price below both moving averages - downtrend confirmed",
        )
    } else {
        (
            Signal::Neutral,
            "Mixed signals - market may be consolidating",
        )
    };

    MovingAverageResult {
        sma20: round2(sma20),
        sma50: round2(sma50),
        current_price: round2(current_price),
        signal,
        interpretation: interpretation.to_string(),
    }
}
