//! Analyst recommendation counts by period and rating bucket.

use quotix_core::MarketDataProvider;
use serde_json::{Value, json};

use super::normalize_symbol;

/// Build the `get_recommendations` envelope. A missing bucket counts as zero
/// both in its own slot and in the derived total.
pub async fn recommendations(provider: &dyn MarketDataProvider, symbol: &str) -> Value {
    let symbol = normalize_symbol(symbol);
    let periods = match provider.recommendations(&symbol).await {
        Ok(periods) => periods,
        Err(e) => {
            tracing::error!(symbol = %symbol, error = %e, "recommendations lookup failed");
            return json!({
                "symbol": symbol,
                "error": format!("Failed to get recommendations for {symbol}: {e}"),
            });
        }
    };

    if periods.is_empty() {
        return json!({
            "symbol": symbol,
            "recommendations": [],
            "message": "No recommendations available",
            "count": 0,
        });
    }

    let rows: Vec<Value> = periods
        .iter()
        .map(|p| {
            json!({
                "period": p.period,
                "strong_buy": p.strong_buy.unwrap_or(0),
                "buy": p.buy.unwrap_or(0),
                "hold": p.hold.unwrap_or(0),
                "sell": p.sell.unwrap_or(0),
                "strong_sell": p.strong_sell.unwrap_or(0),
                "total": p.total(),
            })
        })
        .collect();

    json!({
        "symbol": symbol,
        "recommendations": rows,
        "count": rows.len(),
        "note": "Recommendations show analyst count by rating for different time periods",
    })
}
