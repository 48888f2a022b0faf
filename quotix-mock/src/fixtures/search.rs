use quotix_core::SearchHit;

pub fn search(query: &str) -> Vec<SearchHit> {
    let q = query.to_lowercase();
    let mut hits = Vec::new();
    if q.contains("apple") || q.contains("aapl") {
        hits.push(hit("AAPL", "Apple Inc.", "NASDAQ"));
    }
    if q.contains("micro") || q.contains("msft") {
        hits.push(hit("MSFT", "Microsoft Corp", "NASDAQ"));
    }
    if q.contains("tesla") || q.contains("tsla") {
        hits.push(hit("TSLA", "Tesla Inc", "NASDAQ"));
    }
    hits
}

fn hit(symbol: &str, name: &str, exchange: &str) -> SearchHit {
    SearchHit {
        symbol: symbol.to_string(),
        name: Some(name.to_string()),
        kind: Some("EQUITY".to_string()),
        exchange: Some(exchange.to_string()),
        sector: Some("Technology".to_string()),
        industry: None,
        score: Some(1.0),
        provider_listed: true,
    }
}
