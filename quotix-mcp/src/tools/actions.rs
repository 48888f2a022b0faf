//! Dividend and split histories, the two sparse corporate-action categories.

use quotix_core::MarketDataProvider;
use serde_json::{Value, json};

use super::normalize_symbol;

/// Build the `get_dividends` envelope. Zero rows is a success with a note.
pub async fn dividends(provider: &dyn MarketDataProvider, symbol: &str) -> Value {
    let symbol = normalize_symbol(symbol);
    let events = match provider.dividends(&symbol).await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!(symbol = %symbol, error = %e, "dividend lookup failed");
            return json!({
                "symbol": symbol,
                "error": format!("Failed to get dividends for {symbol}: {e}"),
            });
        }
    };

    if events.is_empty() {
        return json!({
            "symbol": symbol,
            "dividends": [],
            "message": "No dividend data available",
            "count": 0,
        });
    }

    let rows: Vec<Value> = events
        .iter()
        .map(|d| {
            json!({
                "date": d.ts.format("%Y-%m-%d").to_string(),
                "dividend": d.amount,
            })
        })
        .collect();

    json!({
        "symbol": symbol,
        "dividends": rows,
        "count": rows.len(),
    })
}

/// Build the `get_splits` envelope. Zero rows is a success with a note.
pub async fn splits(provider: &dyn MarketDataProvider, symbol: &str) -> Value {
    let symbol = normalize_symbol(symbol);
    let events = match provider.splits(&symbol).await {
        Ok(events) => events,
        Err(e) => {
            tracing::error!(symbol = %symbol, error = %e, "split lookup failed");
            return json!({
                "symbol": symbol,
                "error": format!("Failed to get splits for {symbol}: {e}"),
            });
        }
    };

    if events.is_empty() {
        return json!({
            "symbol": symbol,
            "splits": [],
            "message": "No split data available",
            "count": 0,
        });
    }

    let rows: Vec<Value> = events
        .iter()
        .map(|s| {
            json!({
                "date": s.ts.format("%Y-%m-%d").to_string(),
                "split_ratio": s.ratio(),
            })
        })
        .collect();

    json!({
        "symbol": symbol,
        "splits": rows,
        "count": rows.len(),
    })
}
