//! Scans Binance USDT-margined futures for symbols trading far above
//! their 30-day low and prints a short-candidate report.

pub mod config;
pub mod error;
pub mod exchange;
pub mod logging;
pub mod report;
pub mod scanner;
