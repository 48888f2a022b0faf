//! Batch quotes with per-symbol failure isolation.

use quotix_core::{MarketDataProvider, TickerQuote};
use serde_json::{Map, Value, json};

use super::normalize_symbol;

/// One batch entry. The previous close shown to the caller zero-defaults,
/// but the change arithmetic divides by a previous close defaulted to 1 so
/// an absent value never divides by zero.
fn quote_entry(symbol: &str, quote: &TickerQuote) -> Value {
    let current = quote.price.unwrap_or(0.0);
    let previous = quote.previous_close.unwrap_or(1.0);
    let change = current - previous;
    json!({
        "symbol": symbol,
        "name": quote.name.as_deref().unwrap_or_default(),
        "current_price": current,
        "previous_close": quote.previous_close.unwrap_or(0.0),
        "change": change,
        "change_percent": change / previous * 100.0,
        "volume": quote.volume.unwrap_or(0),
        "market_cap": Value::Null,
        "pe_ratio": Value::Null,
    })
}

/// Build the `get_multiple_quotes` envelope.
///
/// Symbols are queried concurrently; every requested symbol gets exactly one
/// slot in the output, a quote on success or an error record on failure.
pub async fn multiple_quotes(provider: &dyn MarketDataProvider, symbols: &[String]) -> Value {
    let symbols: Vec<String> = symbols.iter().map(|s| normalize_symbol(s)).collect();

    let lookups = symbols.iter().map(|symbol| async move {
        let res = provider.quote(symbol).await;
        (symbol.clone(), res)
    });
    let results = futures::future::join_all(lookups).await;

    let mut quotes = Map::new();
    for (symbol, res) in results {
        let entry = match res {
            Ok(q) => quote_entry(&symbol, &q),
            Err(e) => {
                tracing::warn!(symbol = %symbol, error = %e, "batch quote entry failed");
                json!({ "error": format!("Failed to get data for {symbol}: {e}") })
            }
        };
        quotes.insert(symbol, entry);
    }

    json!({
        "symbols": symbols,
        "quotes": quotes,
        "count": symbols.len(),
    })
}
