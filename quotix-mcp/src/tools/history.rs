//! Historical OHLCV bars.

use quotix_core::{BarInterval, HistoryPeriod, MarketDataProvider};
use serde_json::{Value, json};

use super::normalize_symbol;

/// Build the `get_historical_data` envelope.
///
/// Bars are re-emitted in provider order. An empty result is a symbol-level
/// error, unlike the sparse categories; existing callers depend on that
/// distinction.
pub async fn historical_data(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    period: &str,
    interval: &str,
) -> Value {
    let symbol = normalize_symbol(symbol);

    let parsed_period: HistoryPeriod = match period.parse() {
        Ok(p) => p,
        Err(e) => {
            return json!({
                "symbol": symbol,
                "error": format!("Failed to get historical data for {symbol}: {e}"),
            });
        }
    };
    let parsed_interval: BarInterval = match interval.parse() {
        Ok(i) => i,
        Err(e) => {
            return json!({
                "symbol": symbol,
                "error": format!("Failed to get historical data for {symbol}: {e}"),
            });
        }
    };

    let bars = match provider.history(&symbol, parsed_period, parsed_interval).await {
        Ok(bars) => bars,
        Err(e) => {
            tracing::error!(symbol = %symbol, error = %e, "history lookup failed");
            return json!({
                "symbol": symbol,
                "error": format!("Failed to get historical data for {symbol}: {e}"),
            });
        }
    };

    if bars.is_empty() {
        return json!({
            "symbol": symbol,
            "error": format!("No data found for symbol {symbol}"),
        });
    }

    let data: Vec<Value> = bars
        .iter()
        .map(|bar| {
            json!({
                "date": bar.ts.format("%Y-%m-%d").to_string(),
                "open": bar.open,
                "high": bar.high,
                "low": bar.low,
                "close": bar.close,
                "volume": bar.volume,
            })
        })
        .collect();

    json!({
        "symbol": symbol,
        "period": period,
        "interval": interval,
        "data": data,
        "count": data.len(),
    })
}
