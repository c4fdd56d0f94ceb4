//! Crypto Price Prediction CLI
//!
//! A command-line tool that serves the prediction endpoints or fetches
//! historical kline data from Binance for offline model fitting.

use anyhow::Result;
use clap::{Parser, Subcommand};
use crypto_prediction::{BinanceClient, Config, InferencePipeline, ModelBundle};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "crypto-prediction")]
#[command(about = "Crypto price prediction service", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Verbosity level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the prediction endpoints over HTTP
    Serve {
        /// Bind address, overrides the configured host:port
        #[arg(long)]
        addr: Option<String>,

        /// Directory with the model artifacts, overrides the config
        #[arg(long)]
        artifacts: Option<String>,
    },

    /// Fetch kline data from Binance and write it to CSV
    Fetch {
        /// Trading pair symbol (e.g., BTCUSDT)
        #[arg(short, long)]
        symbol: Option<String>,

        /// Interval (e.g., 1m, 1h, 1d)
        #[arg(short, long)]
        interval: Option<String>,

        /// Number of candles to fetch (max 1000)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Start timestamp in milliseconds
        #[arg(long)]
        start_time: Option<i64>,

        /// End timestamp in milliseconds
        #[arg(long)]
        end_time: Option<i64>,

        /// Output CSV path
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Commands::Serve { addr, artifacts } => {
            let artifacts = artifacts.unwrap_or_else(|| config.models.artifacts_dir.clone());
            let addr = addr.unwrap_or_else(|| config.bind_addr());

            info!(artifacts = %artifacts, "loading model artifacts");

            // Refuse to serve without successfully loaded parameters
            let bundle = ModelBundle::load(&artifacts)?;
            let pipeline = InferencePipeline::new(bundle);
            crypto_prediction::server::run(pipeline, &addr).await?;
        }

        Commands::Fetch {
            symbol,
            interval,
            limit,
            start_time,
            end_time,
            output,
        } => {
            let symbol = symbol.unwrap_or_else(|| config.data.symbol.clone());
            let interval = interval.unwrap_or_else(|| config.data.interval.clone());
            let limit = limit.unwrap_or(config.data.limit);
            let output = output.unwrap_or_else(|| config.data.output.clone());

            info!(symbol = %symbol, interval = %interval, limit, "fetching klines from Binance");

            let client = BinanceClient::new();
            let klines = client
                .get_klines(&symbol, &interval, limit, start_time, end_time)
                .await?;

            crypto_prediction::data::export::write_csv(&klines, &output)?;

            println!(
                "Saved {} rows with full features to {}",
                klines.len(),
                output
            );
        }
    }

    Ok(())
}
