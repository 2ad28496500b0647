//! Ranking of 24h gainers against the tradable universe.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::config::{MAX_GAINERS, QUOTE_SUFFIX};
use crate::exchange::{MarketData, Ticker24h};

/// USDT-quoted tickers sorted by 24h percent change descending,
/// restricted to tradable symbols, capped at `MAX_GAINERS`.
pub fn top_tradable_gainers(
    tickers: Vec<Ticker24h>,
    tradable: &HashSet<String>,
) -> Vec<Ticker24h> {
    let mut quoted: Vec<Ticker24h> = tickers
        .into_iter()
        .filter(|t| t.symbol.ends_with(QUOTE_SUFFIX))
        .collect();
    quoted.sort_by(|a, b| {
        b.change_percent_f64()
            .partial_cmp(&a.change_percent_f64())
            .unwrap_or(Ordering::Equal)
    });
    quoted
        .into_iter()
        .filter(|t| tradable.contains(&t.symbol))
        .take(MAX_GAINERS)
        .collect()
}

/// Fetch the tradable universe and the bulk tickers, then rank. The
/// universe is fetched once per run; it cannot change mid-run.
pub async fn tradable_gainers(client: &dyn MarketData) -> Vec<Ticker24h> {
    let tradable = client.tradable_symbols().await;
    top_tradable_gainers(client.ticker_all().await, &tradable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker(symbol: &str, pct: &str) -> Ticker24h {
        Ticker24h {
            symbol: symbol.to_string(),
            last_price: "1.0".to_string(),
            price_change_percent: pct.to_string(),
            quote_volume: "100000.0".to_string(),
        }
    }

    fn tradable(symbols: &[&str]) -> HashSet<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sorted_descending_by_change() {
        let tickers = vec![
            ticker("AUSDT", "5.0"),
            ticker("BUSDT", "50.0"),
            ticker("CUSDT", "-3.0"),
            ticker("DUSDT", "12.5"),
        ];
        let out = top_tradable_gainers(tickers, &tradable(&["AUSDT", "BUSDT", "CUSDT", "DUSDT"]));
        let symbols: Vec<&str> = out.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["BUSDT", "DUSDT", "AUSDT", "CUSDT"]);
    }

    #[test]
    fn test_non_usdt_quotes_dropped() {
        let tickers = vec![
            ticker("AUSDT", "5.0"),
            ticker("ABUSD", "80.0"),
            ticker("ABTC", "90.0"),
        ];
        let out = top_tradable_gainers(tickers, &tradable(&["AUSDT", "ABUSD", "ABTC"]));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].symbol, "AUSDT");
    }

    #[test]
    fn test_untradable_symbols_dropped_but_order_kept() {
        let tickers = vec![
            ticker("AUSDT", "30.0"),
            ticker("BUSDT", "20.0"),
            ticker("CUSDT", "10.0"),
        ];
        let out = top_tradable_gainers(tickers, &tradable(&["AUSDT", "CUSDT"]));
        let symbols: Vec<&str> = out.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AUSDT", "CUSDT"]);
    }

    #[test]
    fn test_capped_at_thirty() {
        let tickers: Vec<Ticker24h> = (0..45)
            .map(|i| ticker(&format!("S{}USDT", i), &format!("{}.0", i)))
            .collect();
        let all: HashSet<String> = tickers.iter().map(|t| t.symbol.clone()).collect();
        let out = top_tradable_gainers(tickers, &all);
        assert_eq!(out.len(), 30);
        // the cap keeps the largest gainers
        assert_eq!(out[0].symbol, "S44USDT");
        assert_eq!(out[29].symbol, "S15USDT");
    }

    #[test]
    fn test_empty_tradable_set_yields_empty() {
        let tickers = vec![ticker("AUSDT", "5.0")];
        let out = top_tradable_gainers(tickers, &HashSet::new());
        assert!(out.is_empty());
    }

    #[test]
    fn test_output_is_subsequence_of_sorted_input() {
        let tickers = vec![
            ticker("AUSDT", "1.0"),
            ticker("BUSDT", "9.0"),
            ticker("CUSDT", "4.0"),
            ticker("DUSDT", "7.0"),
            ticker("EUSDT", "2.0"),
        ];
        let out = top_tradable_gainers(tickers, &tradable(&["BUSDT", "CUSDT", "EUSDT"]));
        let changes: Vec<f64> = out.iter().map(|t| t.change_percent_f64()).collect();
        let mut sorted = changes.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(changes, sorted);
        assert!(out.iter().all(|t| t.symbol.ends_with("USDT")));
        assert!(out.len() <= 30);
    }
}
