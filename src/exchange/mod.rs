use std::collections::HashSet;

use async_trait::async_trait;
use serde::Deserialize;

mod binance;

pub use binance::BinanceFutures;

/// 24h ticker statistics as the exchange reports them. Numeric fields
/// arrive as strings; the accessors parse and fall back to 0.0.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker24h {
    pub symbol: String,
    pub last_price: String,
    pub price_change_percent: String,
    pub quote_volume: String,
}

impl Ticker24h {
    pub fn last_price_f64(&self) -> f64 {
        self.last_price.parse().unwrap_or(0.0)
    }

    pub fn change_percent_f64(&self) -> f64 {
        self.price_change_percent.parse().unwrap_or(0.0)
    }

    pub fn quote_volume_f64(&self) -> f64 {
        self.quote_volume.parse().unwrap_or(0.0)
    }
}

/// One daily kline, reduced to the fields the scan consumes.
#[derive(Debug, Clone, Copy)]
pub struct DailyCandle {
    pub high: f64,
    pub low: f64,
}

/// Max high / min low over a candle window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub high: f64,
    pub low: f64,
}

impl PriceRange {
    pub fn from_candles(candles: &[DailyCandle]) -> Option<Self> {
        let first = candles.first()?;
        let mut high = first.high;
        let mut low = first.low;
        for c in &candles[1..] {
            if c.high > high {
                high = c.high;
            }
            if c.low < low {
                low = c.low;
            }
        }
        Some(Self { high, low })
    }
}

/// Read side of the futures market-data API.
///
/// Implementations convert every failure to the neutral value after
/// logging it; callers treat an empty set/list or `None` as "skip",
/// never as an error to propagate.
#[async_trait]
pub trait MarketData {
    /// Symbols currently open for trading.
    async fn tradable_symbols(&self) -> HashSet<String>;

    /// 24h statistics for every symbol.
    async fn ticker_all(&self) -> Vec<Ticker24h>;

    /// 24h statistics for one symbol.
    async fn ticker(&self, symbol: &str) -> Option<Ticker24h>;

    /// High/low over the last 30 daily candles.
    async fn daily_range(&self, symbol: &str) -> Option<PriceRange>;
}
