// Technical indicators module
// Point-in-time indicator calculations over daily price and volume series

pub mod macd;
pub mod moving_averages;
pub mod rsi;
pub mod sentiment;
pub mod trend;
pub mod volume;

pub use macd::MACD;
pub use moving_averages::{EMA, SMA};
pub use rsi::RSI;
pub use sentiment::{market_sentiment, overall_sentiment};
pub use trend::analyze_moving_averages;
pub use volume::analyze_volume;

use crate::models::MarketIndicators;

/// Round to 2 decimal places, half away from zero
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Calculate every indicator for one asset and vote on its sentiment
///
/// Prices and volumes are independent series (oldest first) and may differ
/// in length or be empty; short inputs yield neutral placeholder readings.
pub fn calculate_all(prices: &[f64], volumes: &[f64]) -> MarketIndicators {
    let rsi = RSI::default().calculate(prices);
    let macd = MACD::default().calculate(prices);
    let moving_averages = analyze_moving_averages(prices);
    let volume_trend = analyze_volume(volumes);

    let overall_sentiment =
        overall_sentiment(&[rsi.signal, macd.signal, moving_averages.signal]);

    MarketIndicators {
        rsi,
        macd,
        moving_averages,
        volume_trend,
        overall_sentiment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Signal, VolumeSignal};

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.235_1), 1.24);
        assert_eq!(round2(-0.004), 0.0);
        assert_eq!(round2(50.0), 50.0);
    }

    #[test]
    fn test_uptrend_end_to_end() {
        // 60 daily closes from 100 to 159, flat volume
        let prices: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let volumes = vec![1_000_000.0; 60];

        let result = calculate_all(&prices, &volumes);

        // No losses at all: RS is huge and RSI lands in the overbought band
        assert!(result.rsi.value > 99.0, "got {}", result.rsi.value);
        assert_eq!(result.rsi.signal, Signal::Bearish);

        assert!(result.macd.histogram > 0.0);
        assert!(result.macd.macd_line > 0.0);
        assert_eq!(result.macd.signal, Signal::Bullish);

        assert_eq!(result.moving_averages.current_price, 159.0);
        assert_eq!(result.moving_averages.sma20, 149.5);
        assert_eq!(result.moving_averages.sma50, 134.5);
        assert_eq!(result.moving_averages.signal, Signal::Bullish);

        assert_eq!(result.volume_trend.signal, VolumeSignal::Normal);
        assert_eq!(result.volume_trend.current, 1_000_000.0);
        assert_eq!(result.volume_trend.average, 1_000_000.0);

        assert_eq!(result.overall_sentiment, Signal::Bullish);
    }

    #[test]
    fn test_downtrend_end_to_end() {
        let prices: Vec<f64> = (0..60).map(|i| 200.0 - i as f64).collect();
        let volumes = vec![500.0; 60];

        let result = calculate_all(&prices, &volumes);

        // All losses: RSI is 0 and reads as oversold (bullish)
        assert_eq!(result.rsi.value, 0.0);
        assert_eq!(result.rsi.signal, Signal::Bullish);
        assert_eq!(result.macd.signal, Signal::Bearish);
        assert_eq!(result.moving_averages.signal, Signal::Bearish);
        assert_eq!(result.overall_sentiment, Signal::Bearish);
    }

    #[test]
    fn test_empty_inputs() {
        let result = calculate_all(&[], &[]);

        assert_eq!(result.rsi.value, 50.0);
        assert_eq!(result.rsi.signal, Signal::Neutral);
        assert!(result.rsi.interpretation.contains("Insufficient data"));
        assert!(result.macd.interpretation.contains("Insufficient data"));
        assert_eq!(result.moving_averages.current_price, 0.0);
        assert_eq!(result.moving_averages.signal, Signal::Neutral);
        assert!(result.moving_averages.interpretation.contains("Insufficient data"));
        assert!(result.volume_trend.interpretation.contains("No volume data"));
        assert_eq!(result.volume_trend.signal, VolumeSignal::Normal);
        assert_eq!(result.overall_sentiment, Signal::Neutral);
    }

    #[test]
    fn test_calculation_is_repeatable() {
        let prices: Vec<f64> = (0..45)
            .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0 + i as f64 * 0.1)
            .collect();
        let volumes: Vec<f64> = (0..30).map(|i| 1_000.0 + (i * 37 % 11) as f64).collect();

        let first = calculate_all(&prices, &volumes);
        let second = calculate_all(&prices, &volumes);

        assert_eq!(first, second);
        assert_eq!(first.rsi.value.to_bits(), second.rsi.value.to_bits());
    }
}
