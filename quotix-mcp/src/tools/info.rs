//! Stock snapshot: quote and profile composed into one flat record.

use quotix_core::MarketDataProvider;
use serde_json::{Value, json};

use super::{normalize_symbol, truncate_summary};

const SUMMARY_LIMIT: usize = 500;

/// Build the `get_stock_info` envelope.
///
/// The quote is the authoritative half; if it fails the whole call answers
/// with the error envelope. The profile is best effort: a profile fault only
/// leaves the descriptive fields absent.
pub async fn stock_info(provider: &dyn MarketDataProvider, symbol: &str) -> Value {
    let symbol = normalize_symbol(symbol);
    let (quote, profile) = tokio::join!(provider.quote(&symbol), provider.profile(&symbol));

    let quote = match quote {
        Ok(q) => q,
        Err(e) => {
            tracing::error!(symbol = %symbol, error = %e, "stock info lookup failed");
            return json!({
                "symbol": symbol,
                "error": format!("Failed to get stock info for {symbol}: {e}"),
            });
        }
    };
    let profile = profile.unwrap_or_default();

    let name = quote
        .name
        .or_else(|| profile.name.clone())
        .unwrap_or_default();
    let summary = profile.summary.as_deref().unwrap_or_default();

    json!({
        "symbol": symbol,
        "name": name,
        "current_price": quote.price.unwrap_or(0.0),
        "market_cap": Value::Null,
        "pe_ratio": Value::Null,
        "dividend_yield": Value::Null,
        "52_week_high": Value::Null,
        "52_week_low": Value::Null,
        "volume": quote.volume,
        "avg_volume": Value::Null,
        "beta": Value::Null,
        "earnings_per_share": Value::Null,
        "price_to_book": Value::Null,
        "debt_to_equity": Value::Null,
        "return_on_equity": Value::Null,
        "sector": profile.sector,
        "industry": profile.industry,
        "country": profile.country,
        "website": profile.website,
        "business_summary": truncate_summary(summary, SUMMARY_LIMIT),
    })
}
