//! Report assembly: gain ratios, volume formatting, the per-symbol
//! scan loop and text rendering.

use tokio::time::{sleep, Duration};

use crate::config::{MIN_CURRENT_GAIN_PCT, SYMBOL_PAUSE_MS};
use crate::exchange::{MarketData, Ticker24h};
use crate::logging::{log, obj, v_str, Level};

/// One qualifying symbol, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolReport {
    pub symbol: String,
    pub high: f64,
    pub low: f64,
    pub last_price: f64,
    pub day_change_pct: f64,
    pub peak_gain_pct: f64,
    pub current_gain_pct: f64,
    pub quote_volume: f64,
}

/// `value / low * 100`, with 0.0 substituted when `low` is zero.
pub fn gain_pct(value: f64, low: f64) -> f64 {
    if low != 0.0 {
        value / low * 100.0
    } else {
        0.0
    }
}

/// Scale a raw quote volume into a readable magnitude string.
pub fn format_volume(volume: f64) -> String {
    if volume >= 100_000_000.0 {
        format!("{:.2}亿", volume / 100_000_000.0)
    } else if volume >= 10_000.0 {
        format!("{:.2}万", volume / 10_000.0)
    } else {
        format!("{:.2}", volume)
    }
}

/// Walk the ranked gainers and keep those whose current price is at
/// least `MIN_CURRENT_GAIN_PCT` of their 30-day low. A symbol whose
/// range or ticker fetch comes back absent is skipped, never fatal.
pub async fn scan(client: &dyn MarketData, gainers: &[Ticker24h]) -> Vec<SymbolReport> {
    let mut reports = Vec::new();
    for gainer in gainers {
        let Some(range) = client.daily_range(&gainer.symbol).await else {
            log(
                Level::Warn,
                "report",
                "range_unavailable",
                obj(&[("symbol", v_str(&gainer.symbol))]),
            );
            continue;
        };
        let Some(ticker) = client.ticker(&gainer.symbol).await else {
            log(
                Level::Warn,
                "report",
                "ticker_unavailable",
                obj(&[("symbol", v_str(&gainer.symbol))]),
            );
            continue;
        };

        let last_price = gainer.last_price_f64();
        let current_gain_pct = gain_pct(last_price, range.low);
        if current_gain_pct < MIN_CURRENT_GAIN_PCT {
            continue;
        }

        reports.push(SymbolReport {
            symbol: gainer.symbol.clone(),
            high: range.high,
            low: range.low,
            last_price,
            day_change_pct: ticker.change_percent_f64(),
            peak_gain_pct: gain_pct(range.high, range.low),
            current_gain_pct,
            quote_volume: ticker.quote_volume_f64(),
        });
        sleep(Duration::from_millis(SYMBOL_PAUSE_MS)).await;
    }
    reports
}

/// Render the report body, or the no-results line when nothing
/// qualified.
pub fn render(reports: &[SymbolReport]) -> String {
    if reports.is_empty() {
        return "no symbols currently up more than 200% off their 30-day low\n".to_string();
    }
    let mut out = String::new();
    for r in reports {
        out.push_str(&format!("symbol: {}\n", r.symbol));
        out.push_str(&format!("  30d high: {}\n", r.high));
        out.push_str(&format!("  30d low: {}\n", r.low));
        out.push_str(&format!("  last price: {}\n", r.last_price));
        out.push_str(&format!("  24h change: {:.2}%\n", r.day_change_pct));
        out.push_str(&format!("  peak gain (high/low): {:.2}%\n", r.peak_gain_pct));
        out.push_str(&format!(
            "  current gain (last/low): {:.2}%\n",
            r.current_gain_pct
        ));
        out.push_str(&format!(
            "  24h quote volume: {}\n",
            format_volume(r.quote_volume)
        ));
    }
    out
}
