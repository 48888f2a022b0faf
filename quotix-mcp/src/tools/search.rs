//! Free-text instrument search.

use quotix_core::MarketDataProvider;
use serde_json::{Value, json};

/// Build the `search_stocks` envelope. The query echoes back verbatim; hits
/// are capped at `limit` even if the provider returns more.
pub async fn search_stocks(provider: &dyn MarketDataProvider, query: &str, limit: usize) -> Value {
    let hits = match provider.search(query, limit).await {
        Ok(hits) => hits,
        Err(e) => {
            tracing::error!(query = %query, error = %e, "search failed");
            return json!({
                "query": query,
                "error": format!("Failed to search stocks for query '{query}': {e}"),
            });
        }
    };

    if hits.is_empty() {
        return json!({
            "query": query,
            "results": [],
            "message": "No results found",
            "count": 0,
        });
    }

    let results: Vec<Value> = hits
        .iter()
        .take(limit)
        .map(|h| {
            json!({
                "symbol": h.symbol,
                "name": h.name.as_deref().unwrap_or_default(),
                "type": h.kind.as_deref().unwrap_or_default(),
                "exchange": h.exchange.as_deref().unwrap_or_default(),
                "sector": h.sector.as_deref().unwrap_or_default(),
                "industry": h.industry.as_deref().unwrap_or_default(),
                "score": h.score.unwrap_or(0.0),
                "is_yahoo_finance": h.provider_listed,
            })
        })
        .collect();

    json!({
        "query": query,
        "results": results,
        "count": results.len(),
    })
}
