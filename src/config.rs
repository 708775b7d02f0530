use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

const DEFAULT_COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_HISTORY_DAYS: u32 = 60;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration, read from the environment (and `.env` if present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub coingecko_base_url: String,
    /// Daily candles requested per asset
    pub history_days: u32,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            coingecko_base_url: DEFAULT_COINGECKO_BASE_URL.to_string(),
            history_days: DEFAULT_HISTORY_DAYS,
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparseable values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = parse_or(&lookup, "BIND_ADDR", defaults.bind_addr);
        let coingecko_base_url = lookup("COINGECKO_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.coingecko_base_url);
        let history_days = parse_or(&lookup, "HISTORY_DAYS", defaults.history_days);
        let timeout_secs = parse_or(&lookup, "HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            bind_addr,
            coingecko_base_url,
            history_days,
            http_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Invalid {}={:?}, using default {}", key, raw, default);
                default
            }
        },
        None => default,
    }
}
