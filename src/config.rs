/// Daily candles requested for the historical range.
pub const RANGE_DAYS: u32 = 30;

/// Candidates with a current gain (last/low * 100) below this are
/// dropped from the report. The comparison is exclusive, so a symbol
/// sitting at exactly 200.00% is kept.
pub const MIN_CURRENT_GAIN_PCT: f64 = 200.0;

/// The ranked gainer list is capped here.
pub const MAX_GAINERS: usize = 30;

/// Only symbols quoted in this asset are considered.
pub const QUOTE_SUFFIX: &str = "USDT";

/// Fixed pause between per-symbol fetches, to stay under request limits.
pub const SYMBOL_PAUSE_MS: u64 = 200;

#[derive(Clone)]
pub struct Config {
    pub fapi_base: String,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            fapi_base: std::env::var("BINANCE_FAPI_BASE")
                .unwrap_or_else(|_| "https://fapi.binance.com".to_string()),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_is_futures_api() {
        let cfg = Config {
            fapi_base: "https://fapi.binance.com".to_string(),
            http_timeout_secs: 10,
        };
        assert!(cfg.fapi_base.starts_with("https://"));
        assert!(cfg.fapi_base.contains("fapi"));
    }

    #[test]
    fn test_scan_constants() {
        assert_eq!(RANGE_DAYS, 30);
        assert_eq!(MAX_GAINERS, 30);
        assert_eq!(MIN_CURRENT_GAIN_PCT, 200.0);
    }
}
