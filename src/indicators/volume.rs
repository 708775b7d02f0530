use crate::models::{VolumeSignal, VolumeTrendResult};

const HIGH_VOLUME_RATIO: f64 = 1.5;
const LOW_VOLUME_RATIO: f64 = 0.5;

/// Compare the latest traded volume against the mean of the whole series
/// Thresholds are strict: exactly 1.5x or 0.5x the average reads as normal
pub fn analyze_volume(volumes: &[f64]) -> VolumeTrendResult {
    let Some(&current) = volumes.last() else {
        return VolumeTrendResult {
            current: 0.0,
            average: 0.0,
            signal: VolumeSignal::Normal,
            interpretation: "No volume data available".to_string(),
        };
    };

    let average = volumes.iter().sum::<f64>() / volumes.len() as f64;

    let (signal, interpretation) = if current > average * HIGH_VOLUME_RATIO {
        (
            VolumeSignal::High,
            "High trading volume - strong market participation",
        )
    } else if current < average * LOW_VOLUME_RATIO {
        (
            VolumeSignal::Low,
            "Low trading volume - weak market interest",
        )
    } else {
        (
            VolumeSignal::Normal,
            "Normal trading volume - typical market activity",
        )
    };

    VolumeTrendResult {
        current: current.round(),
        average: average.round(),
        signal,
        interpretation: interpretation.to_string(),
    }
}
