use quotix_core::QuotixError;
use quotix_mcp::tools;

use crate::helpers::{AAPL, MSFT, StubProvider, quote_fixture};

#[tokio::test]
async fn multiple_quotes_key_entries_by_uppercased_symbol() {
    let provider = StubProvider::new().with_quote(|sym| match sym {
        "AAPL" => Ok(quote_fixture(sym, 190.0, Some(188.0))),
        "MSFT" => Ok(quote_fixture(sym, 420.0, Some(418.0))),
        other => Err(QuotixError::not_found(other)),
    });

    let symbols = vec!["aapl".to_string(), " msft ".to_string()];
    let out = tools::quotes::multiple_quotes(&provider, &symbols).await;

    assert_eq!(out["count"], 2);
    assert_eq!(out["symbols"][0], AAPL);
    assert_eq!(out["symbols"][1], MSFT);
    assert_eq!(out["quotes"][AAPL]["current_price"], 190.0);
    assert_eq!(out["quotes"][MSFT]["current_price"], 420.0);
}

#[tokio::test]
async fn multiple_quotes_compute_change_against_previous_close() {
    let provider = StubProvider::new().with_quote(|sym| Ok(quote_fixture(sym, 150.0, Some(148.0))));

    let out = tools::quotes::multiple_quotes(&provider, &[AAPL.to_string()]).await;
    let entry = &out["quotes"][AAPL];

    assert_eq!(entry["previous_close"], 148.0);
    let change = entry["change"].as_f64().unwrap();
    let pct = entry["change_percent"].as_f64().unwrap();
    assert!((change - 2.0).abs() < 1e-9);
    assert!((pct - 100.0 * 2.0 / 148.0).abs() < 1e-9);
}

#[tokio::test]
async fn multiple_quotes_absent_previous_close_divides_by_one() {
    let provider = StubProvider::new().with_quote(|sym| Ok(quote_fixture(sym, 150.0, None)));

    let out = tools::quotes::multiple_quotes(&provider, &[AAPL.to_string()]).await;
    let entry = &out["quotes"][AAPL];

    assert_eq!(entry["previous_close"], 0.0);
    assert_eq!(entry["change"], 149.0);
    assert_eq!(entry["change_percent"], 14900.0);
}

#[tokio::test]
async fn multiple_quotes_isolate_per_symbol_failures() {
    let provider = StubProvider::new().with_quote(|sym| match sym {
        "FAIL" => Err(QuotixError::provider("stub", "boom")),
        other => Ok(quote_fixture(other, 10.0, Some(10.0))),
    });

    let symbols = vec![AAPL.to_string(), "fail".to_string(), MSFT.to_string()];
    let out = tools::quotes::multiple_quotes(&provider, &symbols).await;

    assert_eq!(out["count"], 3);
    assert_eq!(out["quotes"][AAPL]["current_price"], 10.0);
    assert_eq!(
        out["quotes"]["FAIL"]["error"],
        "Failed to get data for FAIL: stub failed: boom"
    );
    assert_eq!(out["quotes"][MSFT]["current_price"], 10.0);
}

#[tokio::test]
async fn multiple_quotes_default_missing_fields() {
    let provider = StubProvider::new().with_quote(|sym| {
        Ok(quotix_core::TickerQuote::empty(sym))
    });

    let out = tools::quotes::multiple_quotes(&provider, &[AAPL.to_string()]).await;
    let entry = &out["quotes"][AAPL];

    assert_eq!(entry["name"], "");
    assert_eq!(entry["current_price"], 0.0);
    assert_eq!(entry["volume"], 0);
    assert!(entry["market_cap"].is_null());
    assert!(entry["pe_ratio"].is_null());
}

#[tokio::test]
async fn multiple_quotes_empty_input_is_empty_envelope() {
    let provider = StubProvider::new().with_quote(|sym| Ok(quote_fixture(sym, 1.0, None)));

    let out = tools::quotes::multiple_quotes(&provider, &[]).await;

    assert_eq!(out["count"], 0);
    assert!(out["quotes"].as_object().unwrap().is_empty());
    assert!(out["symbols"].as_array().unwrap().is_empty());
}
