/// Simple Moving Average (SMA)
/// Arithmetic mean of the last N prices
pub struct SMA {
    period: usize,
}

impl SMA {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculate the SMA at the most recent price
    /// With fewer than `period` prices this degrades to the latest price
    /// (0.0 for an empty series)
    pub fn calculate(&self, prices: &[f64]) -> f64 {
        if prices.len() < self.period || self.period == 0 {
            return prices.last().copied().unwrap_or(0.0);
        }

        let window = &prices[prices.len() - self.period..];
        window.iter().sum::<f64>() / self.period as f64
    }
}

/// Exponential Moving Average (EMA)
/// Gives more weight to recent prices using exponential smoothing
pub struct EMA {
    period: usize,
}

impl EMA {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Smoothing factor (k) for EMA calculation
    /// k = 2 / (period + 1)
    fn smoothing_factor(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }

    /// Calculate the EMA at the most recent price
    /// Seeded with the SMA of the first `period` prices; falls back to the
    /// latest price (or 0.0) when the series is shorter than `period`
    pub fn calculate(&self, prices: &[f64]) -> f64 {
        if prices.len() < self.period || self.period == 0 {
            return prices.last().copied().unwrap_or(0.0);
        }

        let k = self.smoothing_factor();
        let mut ema = SMA::new(self.period).calculate(&prices[..self.period]);

        // EMA(t) = (Price(t) - EMA(t-1)) * k + EMA(t-1)
        for &price in &prices[self.period..] {
            ema = (price - ema) * k + ema;
        }

        ema
    }
}
