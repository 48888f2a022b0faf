//! Financial statements re-exported as nested line-item mappings.

use quotix_core::{MarketDataProvider, QuotixError, StatementKind, StatementTable};
use serde_json::{Map, Value, json};

use super::normalize_symbol;

/// Serialize a statement table as `{ label: { period: value } }`. Empty
/// tables collapse to `{}` rather than erroring.
pub(crate) fn table_json(table: &StatementTable) -> Value {
    let mut out = Map::new();
    for item in &table.items {
        let mut by_period = Map::new();
        for (period, value) in &item.values {
            by_period.insert(period.clone(), json!(value));
        }
        out.insert(item.label.clone(), Value::Object(by_period));
    }
    Value::Object(out)
}

async fn fetch_all(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    quarterly: bool,
) -> Result<(StatementTable, StatementTable, StatementTable), QuotixError> {
    let income = provider
        .statement(symbol, StatementKind::Income, quarterly)
        .await?;
    let balance = provider
        .statement(symbol, StatementKind::BalanceSheet, quarterly)
        .await?;
    let cash = provider
        .statement(symbol, StatementKind::CashFlow, quarterly)
        .await?;
    Ok((income, balance, cash))
}

/// Build the `get_financials` envelope: three statement tables at annual or
/// quarterly granularity.
pub async fn financials(
    provider: &dyn MarketDataProvider,
    symbol: &str,
    quarterly: bool,
) -> Value {
    let symbol = normalize_symbol(symbol);
    match fetch_all(provider, &symbol, quarterly).await {
        Ok((income, balance, cash)) => json!({
            "symbol": symbol,
            "quarterly": quarterly,
            "income_statement": table_json(&income),
            "balance_sheet": table_json(&balance),
            "cash_flow": table_json(&cash),
        }),
        Err(e) => {
            tracing::error!(symbol = %symbol, error = %e, "financials lookup failed");
            json!({
                "symbol": symbol,
                "error": format!("Failed to get financials for {symbol}: {e}"),
            })
        }
    }
}
