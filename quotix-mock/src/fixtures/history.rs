use chrono::{DateTime, NaiveDate, Utc};
use quotix_core::{DividendEvent, PriceBar, SplitEvent};

fn day(date: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .expect("valid fixture date")
        .and_hms_opt(0, 0, 0)
        .expect("valid fixture time")
        .and_utc()
}

pub fn by_symbol(s: &str) -> Option<Vec<PriceBar>> {
    match s {
        "AAPL" => Some(build(&[
            ("2023-01-02", 140.0, 142.0, 139.0, 141.0, 10_000_000),
            ("2023-01-03", 141.0, 143.0, 140.0, 142.0, 11_000_000),
        ])),
        "MSFT" => Some(build(&[
            ("2023-01-02", 240.0, 245.0, 238.0, 244.0, 9_000_000),
            ("2023-01-03", 244.0, 246.0, 243.0, 245.0, 9_500_000),
        ])),
        "GOOGL" => Some(build(&[
            ("2023-01-02", 100.0, 110.0, 95.0, 105.0, 5_000_000),
            ("2023-01-03", 105.0, 112.0, 102.0, 110.0, 5_500_000),
        ])),
        "EMPTY" => Some(vec![]),
        _ => None,
    }
}

fn build(rows: &[(&str, f64, f64, f64, f64, u64)]) -> Vec<PriceBar> {
    rows.iter()
        .map(|&(date, open, high, low, close, volume)| PriceBar {
            ts: day(date),
            open,
            high,
            low,
            close,
            volume,
        })
        .collect()
}

pub fn dividends_by_symbol(s: &str) -> Vec<DividendEvent> {
    match s {
        "AAPL" => vec![
            DividendEvent {
                ts: day("2023-02-10"),
                amount: 0.23,
            },
            DividendEvent {
                ts: day("2023-05-12"),
                amount: 0.24,
            },
        ],
        _ => vec![],
    }
}

pub fn splits_by_symbol(s: &str) -> Vec<SplitEvent> {
    match s {
        "AAPL" => vec![SplitEvent {
            ts: day("2020-08-31"),
            numerator: 4,
            denominator: 1,
        }],
        _ => vec![],
    }
}
