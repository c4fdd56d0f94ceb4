//! Binance API client for fetching cryptocurrency market data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{PredictionError, Result};

/// Kline (candlestick) data from Binance
///
/// Carries the full feature set of a kline row. Binance also returns a
/// trailing `ignore` field, which is dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kline {
    /// Open timestamp
    pub timestamp: DateTime<Utc>,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Base asset volume
    pub volume: f64,
    /// Close timestamp
    pub close_time: DateTime<Utc>,
    /// Quote asset volume
    pub quote_asset_volume: f64,
    /// Number of trades in the interval
    pub number_of_trades: u64,
    /// Taker buy base asset volume
    pub taker_buy_base_volume: f64,
    /// Taker buy quote asset volume
    pub taker_buy_quote_volume: f64,
}

impl Kline {
    /// Parse one raw kline row from the API response
    ///
    /// Binance encodes prices and volumes as strings and timestamps and
    /// trade counts as numbers. Rows that do not match are skipped by the
    /// caller.
    pub fn from_row(row: &[Value]) -> Option<Self> {
        if row.len() < 11 {
            return None;
        }

        Some(Self {
            timestamp: DateTime::from_timestamp_millis(row[0].as_i64()?)?,
            open: parse_f64(&row[1])?,
            high: parse_f64(&row[2])?,
            low: parse_f64(&row[3])?,
            close: parse_f64(&row[4])?,
            volume: parse_f64(&row[5])?,
            close_time: DateTime::from_timestamp_millis(row[6].as_i64()?)?,
            quote_asset_volume: parse_f64(&row[7])?,
            number_of_trades: row[8].as_u64()?,
            taker_buy_base_volume: parse_f64(&row[9])?,
            taker_buy_quote_volume: parse_f64(&row[10])?,
        })
    }

    /// Calculate return from open to close
    pub fn return_pct(&self) -> f64 {
        if self.open > 0.0 {
            (self.close - self.open) / self.open
        } else {
            0.0
        }
    }
}

fn parse_f64(value: &Value) -> Option<f64> {
    value.as_str()?.parse().ok()
}

/// Binance API client
#[derive(Debug, Clone)]
pub struct BinanceClient {
    base_url: String,
    client: reqwest::Client,
}

impl BinanceClient {
    /// Create a new Binance client
    pub fn new() -> Self {
        Self {
            base_url: "https://api.binance.com".to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client with a custom base URL
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch historical klines (candlesticks) from Binance
    ///
    /// # Arguments
    /// * `symbol` - Trading pair symbol (e.g., "BTCUSDT")
    /// * `interval` - Time interval (e.g., "1m", "1h", "1d")
    /// * `limit` - Number of candles to fetch (max 1000)
    /// * `start_time` - Optional start timestamp in milliseconds
    /// * `end_time` - Optional end timestamp in milliseconds
    ///
    /// # Returns
    /// Vector of Kline data sorted by timestamp (oldest first)
    pub async fn get_klines(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<Kline>> {
        let url = format!("{}/api/v3/klines", self.base_url);

        let mut params = vec![
            ("symbol".to_string(), symbol.to_string()),
            ("interval".to_string(), interval.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];

        if let Some(start) = start_time {
            params.push(("startTime".to_string(), start.to_string()));
        }
        if let Some(end) = end_time {
            params.push(("endTime".to_string(), end.to_string()));
        }

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| PredictionError::ApiError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(PredictionError::ApiError(format!(
                "Binance returned status {}",
                response.status()
            )));
        }

        let rows: Vec<Vec<Value>> = response
            .json()
            .await
            .map_err(|e| PredictionError::ApiError(e.to_string()))?;

        let mut klines: Vec<Kline> = rows
            .iter()
            .filter_map(|row| Kline::from_row(row))
            .collect();

        klines.sort_by_key(|k| k.timestamp);

        Ok(klines)
    }
}

impl Default for BinanceClient {
    fn default() -> Self {
        Self::new()
    }
}
