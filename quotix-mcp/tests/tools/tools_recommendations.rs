use quotix_core::{QuotixError, RecommendationPeriod};
use quotix_mcp::tools;

use crate::helpers::{AAPL, StubProvider};

#[tokio::test]
async fn recommendations_emit_bucket_counts_and_totals() {
    let provider = StubProvider::new().with_recommendations(|_| {
        Ok(vec![RecommendationPeriod {
            period: "0m".into(),
            strong_buy: Some(7),
            buy: Some(21),
            hold: Some(6),
            sell: Some(2),
            strong_sell: Some(1),
        }])
    });

    let out = tools::recommendations::recommendations(&provider, "aapl").await;

    assert_eq!(out["symbol"], AAPL);
    assert_eq!(out["count"], 1);
    let row = &out["recommendations"][0];
    assert_eq!(row["period"], "0m");
    assert_eq!(row["strong_buy"], 7);
    assert_eq!(row["total"], 37);
    assert_eq!(
        out["note"],
        "Recommendations show analyst count by rating for different time periods"
    );
}

#[tokio::test]
async fn recommendations_treat_missing_buckets_as_zero() {
    let provider = StubProvider::new().with_recommendations(|_| {
        Ok(vec![RecommendationPeriod {
            period: "-1m".into(),
            strong_buy: Some(5),
            buy: None,
            hold: Some(3),
            sell: None,
            strong_sell: None,
        }])
    });

    let out = tools::recommendations::recommendations(&provider, AAPL).await;
    let row = &out["recommendations"][0];
    assert_eq!(row["buy"], 0);
    assert_eq!(row["sell"], 0);
    assert_eq!(row["total"], 8);
}

#[tokio::test]
async fn recommendations_empty_is_success_with_note() {
    let provider = StubProvider::new().with_recommendations(|_| Ok(vec![]));

    let out = tools::recommendations::recommendations(&provider, AAPL).await;

    assert!(out.get("error").is_none());
    assert_eq!(out["message"], "No recommendations available");
    assert_eq!(out["count"], 0);
}

#[tokio::test]
async fn recommendations_provider_failure_yields_error_envelope() {
    let provider = StubProvider::new()
        .with_recommendations(|_| Err(QuotixError::provider("stub", "no coverage")));

    let out = tools::recommendations::recommendations(&provider, AAPL).await;
    assert_eq!(
        out["error"],
        "Failed to get recommendations for AAPL: stub failed: no coverage"
    );
}
