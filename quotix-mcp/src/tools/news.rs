//! Recent news articles for a symbol.

use quotix_core::MarketDataProvider;
use serde_json::{Value, json};

use super::normalize_symbol;

/// Build the `get_news` envelope with up to `count` articles.
///
/// Publish time is emitted as numeric epoch seconds, zero when the provider
/// carries none. Absent string fields flatten to `""`; callers of the
/// original surface expect strings, not nulls, in these slots.
pub async fn news(provider: &dyn MarketDataProvider, symbol: &str, count: usize) -> Value {
    let symbol = normalize_symbol(symbol);
    let items = match provider.news(&symbol, count).await {
        Ok(items) => items,
        Err(e) => {
            tracing::error!(symbol = %symbol, error = %e, "news lookup failed");
            return json!({
                "symbol": symbol,
                "error": format!("Failed to get news for {symbol}: {e}"),
            });
        }
    };

    if items.is_empty() {
        return json!({
            "symbol": symbol,
            "news": [],
            "message": "No news available",
            "count": 0,
        });
    }

    let rows: Vec<Value> = items
        .iter()
        .take(count)
        .map(|a| {
            json!({
                "title": a.title,
                "link": a.link.as_deref().unwrap_or_default(),
                "publisher": a.publisher.as_deref().unwrap_or_default(),
                "providerPublishTime": a.published_at.map_or(0, |t| t.timestamp()),
                "type": a.content_type.as_deref().unwrap_or_default(),
                "thumbnail": a.thumbnail.as_deref().unwrap_or_default(),
                "summary": a.summary.as_deref().unwrap_or_default(),
            })
        })
        .collect();

    json!({
        "symbol": symbol,
        "news": rows,
        "count": rows.len(),
    })
}
