//! # Crypto Price Prediction Service
//!
//! This crate serves pre-fitted linear regression models over HTTP for
//! predicting cryptocurrency prices, and fetches historical candlestick
//! data from the Binance API.
//!
//! ## Modules
//!
//! - `features` - Feature vector parsing and validation
//! - `models` - Min-max scaler and linear model adapters, artifact loading
//! - `pipeline` - Inference pipeline (scale, then score with both models)
//! - `server` - HTTP endpoints (HTML form and JSON API)
//! - `data` - Binance klines client and CSV export
//! - `config` - TOML configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crypto_prediction::{InferencePipeline, ModelBundle};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bundle = ModelBundle::load("artifacts")?;
//!     let pipeline = InferencePipeline::new(bundle);
//!     crypto_prediction::server::run(pipeline, "0.0.0.0:8080").await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod features;
pub mod models;
pub mod pipeline;
pub mod server;

pub use config::Config;
pub use data::binance::BinanceClient;
pub use features::FeatureVector;
pub use models::bundle::ModelBundle;
pub use models::linear::LinearModel;
pub use models::scaler::MinMaxScaler;
pub use pipeline::{InferencePipeline, Prediction};

/// Error types for the crate
#[derive(thiserror::Error, Debug)]
pub enum PredictionError {
    #[error("Shape mismatch: expected {expected} features, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Load error: {0}")]
    LoadError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

pub type Result<T> = std::result::Result<T, PredictionError>;
