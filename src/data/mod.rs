//! Market data ingestion
//!
//! Fetches historical candlestick data from the Binance REST API and
//! writes it to CSV for offline model fitting. Not part of the inference
//! path.

pub mod binance;
pub mod export;
