use chrono::{TimeZone, Utc};
use quotix_core::NewsItem;

pub fn by_symbol(s: &str) -> Vec<NewsItem> {
    if s == "EMPTY" {
        return vec![];
    }
    vec![
        NewsItem {
            title: format!("{s} announces quarterly results"),
            link: Some(format!("https://news.example.com/{s}/results")),
            publisher: Some("Newswire".to_string()),
            published_at: Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
            content_type: Some("STORY".to_string()),
            thumbnail: None,
            summary: Some(format!("{s} reported earnings ahead of expectations.")),
        },
        NewsItem {
            title: format!("{s} unveils new product line"),
            link: Some(format!("https://news.example.com/{s}/products")),
            publisher: Some("Market Daily".to_string()),
            published_at: Some(Utc.timestamp_opt(1_700_086_400, 0).unwrap()),
            content_type: Some("STORY".to_string()),
            thumbnail: Some(format!("https://img.example.com/{s}.jpg")),
            summary: None,
        },
        NewsItem {
            title: format!("Analysts weigh in on {s}"),
            link: None,
            publisher: None,
            published_at: None,
            content_type: None,
            thumbnail: None,
            summary: None,
        },
    ]
}
