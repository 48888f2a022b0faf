use quotix_core::{BarInterval, HistoryPeriod, QuotixError};
use quotix_mcp::tools;

use crate::helpers::{AAPL, StubProvider, bar};

#[tokio::test]
async fn history_emits_bars_in_provider_order_with_count() {
    let provider = StubProvider::new().with_history(|_, period, interval| {
        assert_eq!(period, HistoryPeriod::M1);
        assert_eq!(interval, BarInterval::D1);
        Ok(vec![
            bar(2024, 1, 2, 185.5, 1_000),
            bar(2024, 1, 3, 186.0, 2_000),
        ])
    });

    let out = tools::history::historical_data(&provider, "aapl", "1mo", "1d").await;

    assert_eq!(out["symbol"], AAPL);
    assert_eq!(out["period"], "1mo");
    assert_eq!(out["interval"], "1d");
    assert_eq!(out["count"], 2);
    let data = out["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["date"], "2024-01-02");
    assert_eq!(data[0]["close"], 185.5);
    assert_eq!(data[0]["volume"], 1_000);
    assert_eq!(data[1]["date"], "2024-01-03");
}

#[tokio::test]
async fn history_empty_result_is_an_error() {
    let provider = StubProvider::new().with_history(|_, _, _| Ok(vec![]));

    let out = tools::history::historical_data(&provider, AAPL, "1mo", "1d").await;
    assert_eq!(out["error"], "No data found for symbol AAPL");
    assert!(out.get("data").is_none());
}

#[tokio::test]
async fn history_rejects_unknown_period_token() {
    let provider = StubProvider::new().with_history(|_, _, _| Ok(vec![bar(2024, 1, 2, 1.0, 1)]));

    let out = tools::history::historical_data(&provider, AAPL, "2w", "1d").await;
    let msg = out["error"].as_str().unwrap();
    assert!(msg.starts_with("Failed to get historical data for AAPL:"));
    assert!(msg.contains("invalid period '2w'"));
}

#[tokio::test]
async fn history_rejects_unknown_interval_token() {
    let provider = StubProvider::new().with_history(|_, _, _| Ok(vec![bar(2024, 1, 2, 1.0, 1)]));

    let out = tools::history::historical_data(&provider, AAPL, "1mo", "7m").await;
    let msg = out["error"].as_str().unwrap();
    assert!(msg.starts_with("Failed to get historical data for AAPL:"));
    assert!(msg.contains("invalid interval '7m'"));
}

#[tokio::test]
async fn history_provider_failure_yields_error_envelope() {
    let provider = StubProvider::new()
        .with_history(|_, _, _| Err(QuotixError::provider("stub", "timeout")));

    let out = tools::history::historical_data(&provider, AAPL, "5d", "1h").await;
    assert_eq!(
        out["error"],
        "Failed to get historical data for AAPL: stub failed: timeout"
    );
}
