//! Earnings derived from the net-income line of the income statement.
//!
//! The provider's dedicated earnings endpoint is deprecated upstream, so the
//! figures come from the annual and quarterly income statements instead,
//! located through the canonical line-item table.

use quotix_core::{CanonicalItem, MarketDataProvider, StatementKind, StatementTable};
use serde_json::{Map, Value, json};

use super::normalize_symbol;

/// Net-income values keyed by period date; `{}` when the statement carries
/// no matching row.
pub(crate) fn net_income_json(table: &StatementTable) -> Value {
    let Some(item) = table.find(CanonicalItem::NetIncome) else {
        return json!({});
    };
    let mut out = Map::new();
    for (period, value) in &item.values {
        out.insert(period.clone(), json!(value));
    }
    Value::Object(out)
}

/// Build the `get_earnings` envelope from the two income-statement variants.
pub async fn earnings(provider: &dyn MarketDataProvider, symbol: &str) -> Value {
    let symbol = normalize_symbol(symbol);
    let (annual, quarterly) = tokio::join!(
        provider.statement(&symbol, StatementKind::Income, false),
        provider.statement(&symbol, StatementKind::Income, true),
    );

    let (annual, quarterly) = match (annual, quarterly) {
        (Ok(a), Ok(q)) => (a, q),
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!(symbol = %symbol, error = %e, "earnings lookup failed");
            return json!({
                "symbol": symbol,
                "error": format!("Failed to get earnings for {symbol}: {e}"),
            });
        }
    };

    json!({
        "symbol": symbol,
        "annual_earnings": net_income_json(&annual),
        "quarterly_earnings": net_income_json(&quarterly),
        "note": "Earnings data extracted from income statements (Net Income)",
    })
}
