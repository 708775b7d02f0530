use crate::models::{MarketSentiment, Signal};

/// Votes needed for a bullish or bearish verdict
const MAJORITY: usize = 2;

/// Tally of bullish and bearish votes
fn tally(signals: &[Signal]) -> (usize, usize) {
    signals.iter().fold((0, 0), |(bull, bear), signal| match signal {
        Signal::Bullish => (bull + 1, bear),
        Signal::Bearish => (bull, bear + 1),
        Signal::Neutral => (bull, bear),
    })
}

fn majority(bullish: usize, bearish: usize) -> Signal {
    if bullish >= MAJORITY {
        Signal::Bullish
    } else if bearish >= MAJORITY {
        Signal::Bearish
    } else {
        Signal::Neutral
    }
}

/// Per-asset sentiment from the directional indicators (RSI, MACD, moving
/// averages). Volume has no direction and is not passed in.
pub fn overall_sentiment(signals: &[Signal]) -> Signal {
    let (bullish, bearish) = tally(signals);
    majority(bullish, bearish)
}

/// Market-wide sentiment from each asset's overall sentiment
pub fn market_sentiment(asset_sentiments: &[Signal]) -> MarketSentiment {
    let (bullish, bearish) = tally(asset_sentiments);
    let total = asset_sentiments.len();
    let sentiment = majority(bullish, bearish);

    let headline = match sentiment {
        Signal::Bullish => format!(
            "Bullish Market Sentiment ({}/{} assets showing bullish indicators)",
            bullish, total
        ),
        Signal::Bearish => format!(
            "Bearish Market Sentiment ({}/{} assets showing bearish indicators)",
            bearish, total
        ),
        Signal::Neutral => "Mixed Market Signals - No clear trend".to_string(),
    };

    MarketSentiment {
        sentiment,
        bullish_count: bullish,
        bearish_count: bearish,
        headline,
    }
}
