use super::{round2, EMA};
use crate::models::{MacdResult, Signal};

/// Signal line as a fixed fraction of the MACD line. No MACD history is
/// kept between calls, so this stands in for the EMA-of-MACD.
const SIGNAL_LINE_RATIO: f64 = 0.9;

/// Moving Average Convergence Divergence (MACD)
/// Difference between a fast and a slow EMA of closing prices
/// - Positive histogram: Bullish momentum
/// - Negative histogram: Bearish momentum
pub struct MACD {
    fast_period: usize,
    slow_period: usize,
    #[allow(dead_code)]
    signal_period: usize,
}

impl Default for MACD {
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}

impl MACD {
    /// `signal_period` is accepted for the conventional (12, 26, 9) shape
    /// but the signal line uses `SIGNAL_LINE_RATIO` instead
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }

    pub fn calculate(&self, prices: &[f64]) -> MacdResult {
        if prices.len() < self.slow_period {
            return MacdResult {
                macd_line: 0.0,
                signal_line: 0.0,
                histogram: 0.0,
                signal: Signal::Neutral,
                interpretation: "Insufficient data for MACD calculation".to_string(),
            };
        }

        let fast_ema = EMA::new(self.fast_period).calculate(prices);
        let slow_ema = EMA::new(self.slow_period).calculate(prices);
        let macd_line = fast_ema - slow_ema;

        let signal_line = macd_line * SIGNAL_LINE_RATIO;
        let histogram = macd_line - signal_line;

        let (signal, interpretation) = if histogram > 0.0 && macd_line > 0.0 {
            (
                Signal::Bullish,
                "Strong bullish momentum - MACD above signal line",
            )
        } else if histogram < 0.0 && macd_line < 0.0 {
            (
                Signal::Bearish,
                "Strong bearish momentum - MACD below signal line",
            )
        } else {
            (
                Signal::Neutral,
                "Weak momentum - watch for crossover signals",
            )
        };

        MacdResult {
            macd_line: round2(macd_line),
            signal_line: round2(signal_line),
            histogram: round2(histogram),
            signal,
            interpretation: interpretation.to_string(),
        }
    }
}
