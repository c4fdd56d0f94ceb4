//! CSV export of fetched klines

use std::path::Path;

use anyhow::Result;
use csv::Writer;

use crate::data::binance::Kline;

/// Save klines to a CSV file with the full feature set
pub fn write_csv<P: AsRef<Path>>(klines: &[Kline], path: P) -> Result<()> {
    let mut writer = Writer::from_path(path)?;

    writer.write_record([
        "timestamp",
        "open",
        "high",
        "low",
        "close",
        "volume",
        "close_time",
        "quote_asset_volume",
        "number_of_trades",
        "taker_buy_base_volume",
        "taker_buy_quote_volume",
    ])?;

    for kline in klines {
        writer.write_record([
            kline.timestamp.to_rfc3339(),
            kline.open.to_string(),
            kline.high.to_string(),
            kline.low.to_string(),
            kline.close.to_string(),
            kline.volume.to_string(),
            kline.close_time.to_rfc3339(),
            kline.quote_asset_volume.to_string(),
            kline.number_of_trades.to_string(),
            kline.taker_buy_base_volume.to_string(),
            kline.taker_buy_quote_volume.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
