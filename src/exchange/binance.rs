use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::{Config, RANGE_DAYS};
use crate::error::FetchError;
use crate::exchange::{DailyCandle, MarketData, PriceRange, Ticker24h};
use crate::logging::{log, obj, v_str, Level};

/// REST client for the USDT-margined futures public API.
pub struct BinanceFutures {
    client: Client,
    base: String,
}

#[derive(Deserialize)]
struct ExchangeInfo {
    symbols: Vec<SymbolInfo>,
}

#[derive(Deserialize)]
struct SymbolInfo {
    symbol: String,
    status: String,
}

impl BinanceFutures {
    pub fn new(cfg: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.http_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base: cfg.fapi_base.clone(),
        }
    }

    async fn fetch_exchange_info(&self) -> Result<HashSet<String>, FetchError> {
        let url = format!("{}/fapi/v1/exchangeInfo", self.base);
        let resp = self.client.get(&url).send().await?;
        let info: ExchangeInfo = resp.json().await?;
        Ok(info
            .symbols
            .into_iter()
            .filter(|s| s.status == "TRADING")
            .map(|s| s.symbol)
            .collect())
    }

    async fn fetch_ticker_all(&self) -> Result<Vec<Ticker24h>, FetchError> {
        let url = format!("{}/fapi/v1/ticker/24hr", self.base);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.json().await?)
    }

    async fn fetch_ticker(&self, symbol: &str) -> Result<Ticker24h, FetchError> {
        let url = format!("{}/fapi/v1/ticker/24hr?symbol={}", self.base, symbol);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.json().await?)
    }

    async fn fetch_daily_range(&self, symbol: &str) -> Result<PriceRange, FetchError> {
        let url = format!(
            "{}/fapi/v1/klines?symbol={}&interval=1d&limit={}",
            self.base, symbol, RANGE_DAYS
        );
        let resp = self.client.get(&url).send().await?;
        let rows: Vec<Vec<serde_json::Value>> = resp.json().await?;
        if rows.is_empty() {
            return Err(FetchError::EmptyResponse);
        }
        let mut candles = Vec::with_capacity(rows.len());
        for row in &rows {
            let high = kline_price(row, 2).ok_or(FetchError::MissingField("high"))?;
            let low = kline_price(row, 3).ok_or(FetchError::MissingField("low"))?;
            candles.push(DailyCandle { high, low });
        }
        PriceRange::from_candles(&candles).ok_or(FetchError::EmptyResponse)
    }

    fn log_failure(&self, event: &str, symbol: Option<&str>, err: &FetchError) {
        let mut fields = obj(&[
            ("kind", v_str(err.kind())),
            ("cause", v_str(&err.to_string())),
        ]);
        if let Some(sym) = symbol {
            fields.insert("symbol".to_string(), v_str(sym));
        }
        log(Level::Error, "exchange", event, fields);
    }
}

/// Kline rows are arrays; index 2 is high, index 3 is low, both as
/// JSON strings.
fn kline_price(row: &[serde_json::Value], idx: usize) -> Option<f64> {
    row.get(idx)?.as_str()?.parse().ok()
}

#[async_trait]
impl MarketData for BinanceFutures {
    async fn tradable_symbols(&self) -> HashSet<String> {
        match self.fetch_exchange_info().await {
            Ok(set) => set,
            Err(err) => {
                self.log_failure("exchange_info", None, &err);
                HashSet::new()
            }
        }
    }

    async fn ticker_all(&self) -> Vec<Ticker24h> {
        match self.fetch_ticker_all().await {
            Ok(tickers) => tickers,
            Err(err) => {
                self.log_failure("ticker_all", None, &err);
                Vec::new()
            }
        }
    }

    async fn ticker(&self, symbol: &str) -> Option<Ticker24h> {
        match self.fetch_ticker(symbol).await {
            Ok(ticker) => Some(ticker),
            Err(err) => {
                self.log_failure("ticker", Some(symbol), &err);
                None
            }
        }
    }

    async fn daily_range(&self, symbol: &str) -> Option<PriceRange> {
        match self.fetch_daily_range(symbol).await {
            Ok(range) => Some(range),
            Err(err) => {
                self.log_failure("klines", Some(symbol), &err);
                None
            }
        }
    }
}
