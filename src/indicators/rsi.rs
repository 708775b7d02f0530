use super::round2;
use crate::models::{IndicatorResult, Signal};

/// Floor applied to a zero average loss so RS stays finite
const MIN_AVG_LOSS: f64 = 0.001;

/// Relative Strength Index (RSI)
/// Measures momentum by comparing magnitude of recent gains to recent losses
/// Returns values between 0-100:
/// - Above 70: Overbought (potential reversal down)
/// - Below 30: Oversold (potential reversal up)
pub struct RSI {
    period: usize,
}

impl Default for RSI {
    fn default() -> Self {
        Self::new(14)
    }
}

impl RSI {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Raw RSI at the most recent price using Wilder's smoothing
    /// None while fewer than `period + 1` prices are available
    pub fn value(&self, prices: &[f64]) -> Option<f64> {
        if self.period == 0 || prices.len() < self.period + 1 {
            return None;
        }

        let period = self.period as f64;
        let mut deltas = prices.windows(2).map(|w| w[1] - w[0]);

        // First average gain and loss (simple average)
        let (gains, losses) = deltas
            .by_ref()
            .take(self.period)
            .fold((0.0, 0.0), |(g, l), change| {
                (g + change.max(0.0), l + (-change).max(0.0))
            });
        let mut avg_gain = gains / period;
        let mut avg_loss = losses / period;

        // avg = ((prev_avg * (period - 1)) + current) / period
        for change in deltas {
            avg_gain = (avg_gain * (period - 1.0) + change.max(0.0)) / period;
            avg_loss = (avg_loss * (period - 1.0) + (-change).max(0.0)) / period;
        }

        let divisor = if avg_loss == 0.0 { MIN_AVG_LOSS } else { avg_loss };
        let rs = avg_gain / divisor;

        Some(100.0 - 100.0 / (1.0 + rs))
    }

    /// Classify the latest RSI reading
    pub fn calculate(&self, prices: &[f64]) -> IndicatorResult {
        let Some(rsi) = self.value(prices) else {
            return IndicatorResult {
                value: 50.0,
                signal: Signal::Neutral,
                description: "Insufficient data".to_string(),
                interpretation:
                    "Insufficient data - need more price history for accurate RSI calculation"
                        .to_string(),
            };
        };

        let (signal, interpretation) = classify(rsi);

        IndicatorResult {
            value: round2(rsi),
            signal,
            description: format!("RSI ({})", self.period),
            interpretation: interpretation.to_string(),
        }
    }
}

/// Ordered threshold chain, first match wins. Extremes read contrarian
/// (overbought is bearish), the 50-70 band reads as momentum.
fn classify(rsi: f64) -> (Signal, &'static str) {
    if rsi > 70.0 {
        (
            Signal::Bearish,
            "Overbought zone - price may be due for a pullback",
        )
    } else if rsi < 30.0 {
        (
            Signal::Bullish,
            "Oversold zone - price may be due for a bounce",
        )
    } else if rsi >= 50.0 {
        (
            Signal::Bullish,
            "Bullish momentum - buyers are in control",
        )
    } else {
        (
            Signal::Neutral,
            "Neutral zone - no strong momentum detected",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_basic() {
        // Mostly gains with a few pullbacks
        let prices = vec![
            100.0, 102.0, 104.0, 103.0, 105.0, 107.0, 106.0, 108.0, 110.0, 109.0,
            111.0, 113.0, 112.0, 114.0, 116.0, 115.0, 117.0, 119.0, 118.0, 120.0,
        ];
        let result = RSI::new(14).calculate(&prices);

        assert!(result.value >= 0.0 && result.value <= 100.0);
        assert!(result.value > 50.0, "RSI should be high with mostly gains");
        assert_eq!(result.description, "RSI (14)");
    }

    #[test]
    fn test_rsi_downtrend() {
        let prices = vec![
            120.0, 118.0, 116.0, 117.0, 115.0, 113.0, 114.0, 112.0, 110.0, 111.0,
            109.0, 107.0, 108.0, 106.0, 104.0, 105.0, 103.0, 101.0, 102.0, 100.0,
        ];
        let result = RSI::new(14).calculate(&prices);

        assert!(result.value < 50.0, "RSI should be low with mostly losses");
    }

    #[test]
    fn test_rsi_insufficient_data() {
        // Anything shorter than period + 1 is the neutral placeholder
        for len in 0..15 {
            let prices: Vec<f64> = (0..len).map(|i| 100.0 + i as f64).collect();
            let result = RSI::new(14).calculate(&prices);

            assert_eq!(result.value, 50.0, "len {}", len);
            assert_eq!(result.signal, Signal::Neutral, "len {}", len);
            assert!(result.interpretation.contains("Insufficient data"));
        }

        assert!(RSI::new(14).value(&[100.0; 15]).is_some());
    }

    #[test]
    fn test_rsi_all_gains() {
        let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
        let result = RSI::new(14).calculate(&prices);

        // avg_loss floored at 0.001: rs = 1000, rsi = 100 - 100/1001
        assert!((result.value - 99.9).abs() < 0.001, "got {}", result.value);
        assert_eq!(result.signal, Signal::Bearish);
        assert!(result.interpretation.starts_with("Overbought"));
    }

    #[test]
    fn test_rsi_all_losses() {
        let prices: Vec<f64> = (0..20).map(|i| 120.0 - i as f64).collect();
        let result = RSI::new(14).calculate(&prices);

        assert_eq!(result.value, 0.0);
        assert_eq!(result.signal, Signal::Bullish);
        assert!(result.interpretation.starts_with("Oversold"));
    }

    #[test]
    fn test_rsi_no_change() {
        // Flat prices: no gains, no losses, rs = 0
        let result = RSI::new(14).calculate(&[100.0; 20]);

        assert_eq!(result.value, 0.0);
        assert_eq!(result.signal, Signal::Bullish);
    }

    #[test]
    fn test_rsi_bounded() {
        let mut prices = vec![100.0];
        for i in 1..60 {
            let change = if i % 3 == 0 { -2.5 } else { 1.75 };
            prices.push(prices[i - 1] + change);
        }

        for end in 15..=prices.len() {
            let rsi = RSI::new(14).value(&prices[..end]).unwrap_or(f64::NAN);
            assert!((0.0..=100.0).contains(&rsi), "RSI at {} out of range: {}", end, rsi);
        }
    }

    #[test]
    fn test_rsi_classification_chain() {
        assert_eq!(classify(70.01).0, Signal::Bearish);
        // 70 itself is not overbought, it falls through to momentum
        assert_eq!(classify(70.0).0, Signal::Bullish);
        assert_eq!(classify(50.0).0, Signal::Bullish);
        assert_eq!(classify(49.99).0, Signal::Neutral);
        assert_eq!(classify(30.0).0, Signal::Neutral);
        assert_eq!(classify(29.99).0, Signal::Bullish);
        assert_eq!(classify(0.0).0, Signal::Bullish);
    }
}
