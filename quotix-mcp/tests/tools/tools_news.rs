use quotix_core::{NewsItem, QuotixError};
use quotix_mcp::tools;

use crate::helpers::{AAPL, StubProvider, dt};

fn article(title: &str) -> NewsItem {
    NewsItem {
        title: title.to_string(),
        link: Some("https://example.com/a".into()),
        publisher: Some("Newswire".into()),
        published_at: Some(dt(2024, 3, 1)),
        content_type: Some("STORY".into()),
        thumbnail: None,
        summary: Some("Short summary.".into()),
    }
}

#[tokio::test]
async fn news_emit_rows_with_epoch_publish_time() {
    let provider =
        StubProvider::new().with_news(|_, _| Ok(vec![article("First"), article("Second")]));

    let out = tools::news::news(&provider, "aapl", 10).await;

    assert_eq!(out["symbol"], AAPL);
    assert_eq!(out["count"], 2);
    let rows = out["news"].as_array().unwrap();
    assert_eq!(rows[0]["title"], "First");
    assert_eq!(rows[0]["publisher"], "Newswire");
    assert_eq!(rows[0]["providerPublishTime"], dt(2024, 3, 1).timestamp());
    assert_eq!(rows[0]["type"], "STORY");
    assert_eq!(rows[0]["thumbnail"], "");
}

#[tokio::test]
async fn news_absent_fields_flatten_to_empty_strings_and_zero() {
    let provider = StubProvider::new().with_news(|_, _| {
        Ok(vec![NewsItem {
            title: "Bare".into(),
            link: None,
            publisher: None,
            published_at: None,
            content_type: None,
            thumbnail: None,
            summary: None,
        }])
    });

    let out = tools::news::news(&provider, AAPL, 5).await;
    let row = &out["news"][0];
    assert_eq!(row["link"], "");
    assert_eq!(row["publisher"], "");
    assert_eq!(row["providerPublishTime"], 0);
    assert_eq!(row["summary"], "");
}

#[tokio::test]
async fn news_are_capped_at_requested_count() {
    let provider = StubProvider::new().with_news(|_, count| {
        assert_eq!(count, 2);
        Ok(vec![article("a"), article("b"), article("c")])
    });

    let out = tools::news::news(&provider, AAPL, 2).await;
    assert_eq!(out["count"], 2);
    assert_eq!(out["news"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn news_empty_is_success_with_note() {
    let provider = StubProvider::new().with_news(|_, _| Ok(vec![]));

    let out = tools::news::news(&provider, AAPL, 10).await;

    assert!(out.get("error").is_none());
    assert_eq!(out["message"], "No news available");
    assert_eq!(out["count"], 0);
}

#[tokio::test]
async fn news_provider_failure_yields_error_envelope() {
    let provider = StubProvider::new().with_news(|_, _| Err(QuotixError::not_found("AAPL")));

    let out = tools::news::news(&provider, AAPL, 10).await;
    let msg = out["error"].as_str().unwrap();
    assert!(msg.starts_with("Failed to get news for AAPL:"));
}
