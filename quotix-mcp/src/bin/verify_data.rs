//! Cross-check facade envelopes against direct provider-client calls for one
//! or more live symbols. Network access required; intended for manual runs:
//!
//! ```text
//! verify-data AAPL MSFT
//! ```

use quotix_core::MarketDataProvider;
use quotix_mcp::tools;
use quotix_yfinance::YfProvider;
use serde_json::Value;

fn print_match(field: &str, facade: &Value, direct: impl std::fmt::Debug, matched: bool) {
    let mark = if matched { "match" } else { "DIFF " };
    println!("  [{mark}] {field}: facade={facade} direct={direct:?}");
}

async fn verify_symbol(provider: &YfProvider, symbol: &str) {
    println!("{}", "=".repeat(60));
    println!("Verifying {symbol}");
    println!("{}", "=".repeat(60));

    let envelope = tools::info::stock_info(provider, symbol).await;
    if envelope.get("error").is_some() {
        println!("  stock_info errored: {}", envelope["error"]);
        return;
    }

    match provider.quote(symbol).await {
        Ok(direct) => {
            let facade_price = envelope["current_price"].as_f64().unwrap_or(0.0);
            let direct_price = direct.price.unwrap_or(0.0);
            print_match(
                "current_price",
                &envelope["current_price"],
                direct.price,
                (facade_price - direct_price).abs() < 1e-9,
            );
            print_match(
                "name",
                &envelope["name"],
                direct.name.as_deref(),
                envelope["name"].as_str() == direct.name.as_deref(),
            );
        }
        Err(e) => println!("  direct quote failed: {e}"),
    }

    let hist = tools::history::historical_data(provider, symbol, "5d", "1d").await;
    match provider
        .history(
            symbol,
            quotix_core::HistoryPeriod::D5,
            quotix_core::BarInterval::D1,
        )
        .await
    {
        Ok(bars) => {
            let facade_count = hist["count"].as_u64().unwrap_or(0) as usize;
            print_match("history count", &hist["count"], bars.len(), facade_count == bars.len());
        }
        Err(e) => println!("  direct history failed: {e}"),
    }

    let recs = tools::recommendations::recommendations(provider, symbol).await;
    match provider.recommendations(symbol).await {
        Ok(periods) => {
            let facade_count = recs["count"].as_u64().unwrap_or(0) as usize;
            print_match(
                "recommendation periods",
                &recs["count"],
                periods.len(),
                facade_count == periods.len(),
            );
        }
        Err(e) => println!("  direct recommendations failed: {e}"),
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let symbols: Vec<String> = std::env::args().skip(1).collect();
    let symbols = if symbols.is_empty() {
        vec!["AAPL".to_string()]
    } else {
        symbols
    };

    let provider = YfProvider::new_default();
    for symbol in &symbols {
        verify_symbol(&provider, symbol).await;
    }
}
