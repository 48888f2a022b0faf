//! Exercise every facade tool against the deterministic mock provider and
//! print a pass/fail summary per tool. Useful as a quick offline smoke run.

use quotix_core::MarketDataProvider;
use quotix_mcp::tools;
use quotix_mock::MockProvider;
use serde_json::Value;

struct Outcome {
    tool: &'static str,
    passed: usize,
    total: usize,
}

fn is_error(v: &Value) -> bool {
    v.get("error").is_some()
}

fn check(outcomes: &mut Vec<Outcome>, tool: &'static str, cases: &[(&str, bool)]) {
    let passed = cases.iter().filter(|&&(_, ok)| ok).count();
    for (case, ok) in cases {
        let mark = if *ok { "ok  " } else { "FAIL" };
        println!("  [{mark}] {tool}: {case}");
    }
    outcomes.push(Outcome {
        tool,
        passed,
        total: cases.len(),
    });
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let provider = MockProvider::new();
    let p: &dyn MarketDataProvider = &provider;
    let mut outcomes = Vec::new();

    println!("quotix tool exercise (mock provider)");
    println!("{}", "=".repeat(50));

    let info = tools::info::stock_info(p, "aapl").await;
    let info_missing = tools::info::stock_info(p, "ZZZZ").await;
    check(
        &mut outcomes,
        "get_stock_info",
        &[
            ("known symbol succeeds", !is_error(&info)),
            ("symbol echoed upper-cased", info["symbol"] == "AAPL"),
            ("unknown symbol yields error envelope", is_error(&info_missing)),
        ],
    );

    let hist = tools::history::historical_data(p, "AAPL", "1mo", "1d").await;
    let hist_empty = tools::history::historical_data(p, "EMPTY", "1mo", "1d").await;
    let hist_bad = tools::history::historical_data(p, "AAPL", "13mo", "1d").await;
    check(
        &mut outcomes,
        "get_historical_data",
        &[
            ("bars returned with count", hist["count"].as_u64().is_some()),
            ("empty history is an error", is_error(&hist_empty)),
            ("invalid period is an error", is_error(&hist_bad)),
        ],
    );

    let divs = tools::actions::dividends(p, "AAPL").await;
    let divs_none = tools::actions::dividends(p, "MSFT").await;
    check(
        &mut outcomes,
        "get_dividends",
        &[
            ("dividend rows returned", divs["count"].as_u64().unwrap_or(0) > 0),
            (
                "no dividends is success with count 0",
                !is_error(&divs_none) && divs_none["count"] == 0,
            ),
        ],
    );

    let splits = tools::actions::splits(p, "AAPL").await;
    check(
        &mut outcomes,
        "get_splits",
        &[("split rows returned", splits["count"].as_u64().unwrap_or(0) > 0)],
    );

    let fin = tools::financials::financials(p, "AAPL", false).await;
    let finq = tools::financials::financials(p, "AAPL", true).await;
    check(
        &mut outcomes,
        "get_financials",
        &[
            (
                "annual statements present",
                fin["income_statement"].as_object().is_some_and(|m| !m.is_empty()),
            ),
            ("quarterly flag echoed", finq["quarterly"] == true),
        ],
    );

    let earn = tools::earnings::earnings(p, "AAPL").await;
    check(
        &mut outcomes,
        "get_earnings",
        &[(
            "annual net income extracted",
            earn["annual_earnings"].as_object().is_some_and(|m| !m.is_empty()),
        )],
    );

    let news = tools::news::news(p, "AAPL", 2).await;
    check(
        &mut outcomes,
        "get_news",
        &[("article count capped", news["count"] == 2)],
    );

    let recs = tools::recommendations::recommendations(p, "AAPL").await;
    check(
        &mut outcomes,
        "get_recommendations",
        &[(
            "totals derived per period",
            recs["recommendations"][0]["total"].as_u64().is_some(),
        )],
    );

    let found = tools::search::search_stocks(p, "apple", 5).await;
    let not_found = tools::search::search_stocks(p, "zzzz", 5).await;
    check(
        &mut outcomes,
        "search_stocks",
        &[
            ("query matches return hits", found["count"].as_u64().unwrap_or(0) > 0),
            (
                "no matches is success with count 0",
                !is_error(&not_found) && not_found["count"] == 0,
            ),
        ],
    );

    let batch = tools::quotes::multiple_quotes(
        p,
        &["aapl".to_string(), "FAIL".to_string(), "msft".to_string()],
    )
    .await;
    check(
        &mut outcomes,
        "get_multiple_quotes",
        &[
            ("one entry per requested symbol", batch["count"] == 3),
            (
                "failed symbol isolated",
                batch["quotes"]["FAIL"].get("error").is_some(),
            ),
            (
                "survivors unaffected",
                batch["quotes"]["AAPL"].get("error").is_none(),
            ),
        ],
    );

    println!("{}", "=".repeat(50));
    let tools_passed = outcomes.iter().filter(|o| o.passed == o.total).count();
    for o in &outcomes {
        println!("{:<22} {}/{}", o.tool, o.passed, o.total);
    }
    println!("{}", "=".repeat(50));
    println!("{tools_passed}/{} tools fully passing", outcomes.len());

    if tools_passed != outcomes.len() {
        std::process::exit(1);
    }
}
