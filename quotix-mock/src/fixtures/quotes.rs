use quotix_core::TickerQuote;

pub fn by_symbol(s: &str) -> Option<TickerQuote> {
    match s {
        "AAPL" => Some(q("AAPL", "Apple Inc.", 190.0, 188.0, 50_000_000)),
        "MSFT" => Some(q("MSFT", "Microsoft Corp", 420.0, 418.0, 22_000_000)),
        "GOOGL" => Some(q("GOOGL", "Alphabet Inc. Class A", 150.0, 148.0, 18_000_000)),
        "KO" => Some(q("KO", "Coca-Cola", 60.0, 59.5, 12_000_000)),
        // Price known but no previous close reported.
        "IPOX" => Some(TickerQuote {
            symbol: "IPOX".to_string(),
            name: Some("Freshly Listed Corp".to_string()),
            price: Some(150.0),
            previous_close: None,
            volume: None,
        }),
        "EMPTY" => Some(TickerQuote::empty("EMPTY")),
        _ => None,
    }
}

fn q(sym: &str, name: &str, px: f64, prev: f64, vol: u64) -> TickerQuote {
    TickerQuote {
        symbol: sym.to_string(),
        name: Some(name.to_string()),
        price: Some(px),
        previous_close: Some(prev),
        volume: Some(vol),
    }
}
