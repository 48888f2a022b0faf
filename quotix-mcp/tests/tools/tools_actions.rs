use quotix_core::{DividendEvent, QuotixError, SplitEvent};
use quotix_mcp::tools;

use crate::helpers::{AAPL, StubProvider, dt};

#[tokio::test]
async fn dividends_emit_date_and_amount_rows() {
    let provider = StubProvider::new().with_dividends(|_| {
        Ok(vec![
            DividendEvent {
                ts: dt(2024, 2, 9),
                amount: 0.24,
            },
            DividendEvent {
                ts: dt(2024, 5, 10),
                amount: 0.25,
            },
        ])
    });

    let out = tools::actions::dividends(&provider, "aapl").await;

    assert_eq!(out["symbol"], AAPL);
    assert_eq!(out["count"], 2);
    let rows = out["dividends"].as_array().unwrap();
    assert_eq!(rows[0]["date"], "2024-02-09");
    assert_eq!(rows[0]["dividend"], 0.24);
    assert_eq!(rows[1]["date"], "2024-05-10");
    assert!(out.get("message").is_none());
}

#[tokio::test]
async fn dividends_empty_is_success_with_note() {
    let provider = StubProvider::new().with_dividends(|_| Ok(vec![]));

    let out = tools::actions::dividends(&provider, AAPL).await;

    assert!(out.get("error").is_none());
    assert_eq!(out["message"], "No dividend data available");
    assert_eq!(out["count"], 0);
    assert_eq!(out["dividends"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn dividends_provider_failure_yields_error_envelope() {
    let provider =
        StubProvider::new().with_dividends(|_| Err(QuotixError::provider("stub", "boom")));

    let out = tools::actions::dividends(&provider, AAPL).await;
    assert_eq!(
        out["error"],
        "Failed to get dividends for AAPL: stub failed: boom"
    );
}

#[tokio::test]
async fn splits_emit_ratio_rows() {
    let provider = StubProvider::new().with_splits(|_| {
        Ok(vec![SplitEvent {
            ts: dt(2020, 8, 31),
            numerator: 4,
            denominator: 1,
        }])
    });

    let out = tools::actions::splits(&provider, " aapl ").await;

    assert_eq!(out["symbol"], AAPL);
    assert_eq!(out["count"], 1);
    let rows = out["splits"].as_array().unwrap();
    assert_eq!(rows[0]["date"], "2020-08-31");
    assert_eq!(rows[0]["split_ratio"], 4.0);
}

#[tokio::test]
async fn splits_empty_is_success_with_note() {
    let provider = StubProvider::new().with_splits(|_| Ok(vec![]));

    let out = tools::actions::splits(&provider, AAPL).await;

    assert!(out.get("error").is_none());
    assert_eq!(out["message"], "No split data available");
    assert_eq!(out["count"], 0);
}
