//! Mapping from `yfinance-rs`/`paft` values to the plain facade records.

use chrono::{Datelike, TimeZone, Utc};
use paft::market::action::Action;
use paft::money::Money;
use rust_decimal::prelude::ToPrimitive;
use yfinance_rs as yf;

use quotix_core::{
    BarInterval, CompanyProfile, DividendEvent, HistoryPeriod, LineItem, NewsItem, PriceBar,
    RecommendationPeriod, SearchHit, SplitEvent, StatementTable, TickerQuote,
};

pub(crate) fn money_f64(m: &Money) -> Option<f64> {
    m.amount().to_f64()
}

pub(crate) const fn interval(i: BarInterval) -> paft::market::requests::history::Interval {
    use paft::market::requests::history::Interval as I;
    match i {
        BarInterval::I1m => I::I1m,
        BarInterval::I2m => I::I2m,
        BarInterval::I5m => I::I5m,
        BarInterval::I15m => I::I15m,
        BarInterval::I30m => I::I30m,
        BarInterval::I1h => I::I1h,
        BarInterval::I90m => I::I90m,
        BarInterval::D1 => I::D1,
        BarInterval::D5 => I::D5,
        BarInterval::W1 => I::W1,
        BarInterval::M1 => I::M1,
        BarInterval::M3 => I::M3,
    }
}

/// Epoch-second `(start, end)` bounds for a named lookback period, anchored
/// at `now`. Calendar months and years are approximated in whole days, which
/// matches how the upstream range endpoints behave.
pub(crate) fn period_bounds(
    p: HistoryPeriod,
    now: chrono::DateTime<Utc>,
) -> (i64, i64) {
    let end = now.timestamp();
    let days = match p {
        HistoryPeriod::D1 => 1,
        HistoryPeriod::D5 => 5,
        HistoryPeriod::M1 => 30,
        HistoryPeriod::M3 => 91,
        HistoryPeriod::M6 => 182,
        HistoryPeriod::Y1 => 365,
        HistoryPeriod::Y2 => 730,
        HistoryPeriod::Y5 => 1826,
        HistoryPeriod::Y10 => 3652,
        HistoryPeriod::Ytd => {
            let jan1 = Utc
                .with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0)
                .single()
                .map_or(0, |d| d.timestamp());
            return (jan1, end);
        }
        HistoryPeriod::Max => return (0, end),
    };
    (end - days * 86_400, end)
}

pub(crate) fn quote(symbol: &str, q: yf::core::Quote) -> TickerQuote {
    TickerQuote {
        symbol: symbol.to_string(),
        name: q.shortname,
        price: q.price.as_ref().and_then(money_f64),
        previous_close: q.previous_close.as_ref().and_then(money_f64),
        volume: q.day_volume.and_then(|v| u64::try_from(v).ok()),
    }
}

pub(crate) fn profile(p: yf::profile::Profile) -> CompanyProfile {
    match p {
        yf::profile::Profile::Company(c) => CompanyProfile {
            name: Some(c.name),
            sector: c.sector,
            industry: c.industry,
            country: None,
            website: c.website,
            summary: c.summary,
        },
        yf::profile::Profile::Fund(f) => CompanyProfile {
            name: Some(f.name),
            ..CompanyProfile::default()
        },
    }
}

pub(crate) fn candle(c: yf::Candle) -> PriceBar {
    PriceBar {
        ts: c.ts,
        open: money_f64(&c.open).unwrap_or_default(),
        high: money_f64(&c.high).unwrap_or_default(),
        low: money_f64(&c.low).unwrap_or_default(),
        close: money_f64(&c.close).unwrap_or_default(),
        volume: c.volume.unwrap_or(0),
    }
}

pub(crate) fn dividends(actions: Vec<Action>) -> Vec<DividendEvent> {
    actions
        .into_iter()
        .filter_map(|a| match a {
            Action::Dividend { ts, amount } => Some(DividendEvent {
                ts,
                amount: money_f64(&amount).unwrap_or_default(),
            }),
            _ => None,
        })
        .collect()
}

pub(crate) fn splits(actions: Vec<Action>) -> Vec<SplitEvent> {
    actions
        .into_iter()
        .filter_map(|a| match a {
            Action::Split {
                ts,
                numerator,
                denominator,
            } => Some(SplitEvent {
                ts,
                numerator,
                denominator,
            }),
            _ => None,
        })
        .collect()
}

pub(crate) fn news_item(a: yf::news::NewsArticle) -> NewsItem {
    NewsItem {
        title: a.title,
        link: a.link,
        publisher: a.publisher,
        published_at: Some(a.published_at),
        content_type: None,
        thumbnail: None,
        summary: None,
    }
}

pub(crate) fn recommendation(r: yf::analysis::RecommendationRow) -> RecommendationPeriod {
    RecommendationPeriod {
        period: r.period.to_string(),
        strong_buy: r.strong_buy,
        buy: r.buy,
        hold: r.hold,
        sell: r.sell,
        strong_sell: r.strong_sell,
    }
}

pub(crate) fn search_hit(r: paft::market::responses::search::SearchResult) -> SearchHit {
    SearchHit {
        symbol: r.symbol.as_str().to_string(),
        name: r.name,
        kind: Some(format!("{:?}", r.kind).to_uppercase()),
        exchange: r.exchange.map(|e| e.to_string()),
        sector: None,
        industry: None,
        score: None,
        provider_listed: true,
    }
}

/// Pivot provider statement rows (one struct per period) into labeled line
/// items keyed by period date string. Labels whose value is absent in every
/// period are dropped, matching how the upstream tabulates statements.
fn pivot<R>(
    rows: &[R],
    period_of: fn(&R) -> String,
    fields: &[(&str, fn(&R) -> Option<f64>)],
) -> StatementTable {
    let mut items = Vec::new();
    for (label, get) in fields {
        let mut line = LineItem::new(*label);
        let mut any = false;
        for r in rows {
            let v = get(r);
            any |= v.is_some();
            line.values.insert(period_of(r), v);
        }
        if any {
            items.push(line);
        }
    }
    StatementTable { items }
}

fn opt_money(m: Option<&Money>) -> Option<f64> {
    m.and_then(money_f64)
}

pub(crate) fn income_table(rows: Vec<yf::fundamentals::IncomeStatementRow>) -> StatementTable {
    pivot(
        &rows,
        |r| r.period.to_string(),
        &[
            ("Total Revenue", |r| opt_money(r.total_revenue.as_ref())),
            ("Gross Profit", |r| opt_money(r.gross_profit.as_ref())),
            ("Operating Income", |r| {
                opt_money(r.operating_income.as_ref())
            }),
            ("Net Income", |r| opt_money(r.net_income.as_ref())),
        ],
    )
}

pub(crate) fn balance_table(rows: Vec<yf::fundamentals::BalanceSheetRow>) -> StatementTable {
    pivot(
        &rows,
        |r| r.period.to_string(),
        &[
            ("Total Assets", |r| opt_money(r.total_assets.as_ref())),
            ("Total Liabilities", |r| {
                opt_money(r.total_liabilities.as_ref())
            }),
            ("Total Equity", |r| opt_money(r.total_equity.as_ref())),
            ("Cash", |r| opt_money(r.cash.as_ref())),
            ("Long Term Debt", |r| opt_money(r.long_term_debt.as_ref())),
        ],
    )
}

pub(crate) fn cashflow_table(rows: Vec<yf::fundamentals::CashflowRow>) -> StatementTable {
    pivot(
        &rows,
        |r| r.period.to_string(),
        &[
            ("Operating Cash Flow", |r| {
                opt_money(r.operating_cashflow.as_ref())
            }),
            ("Capital Expenditures", |r| {
                opt_money(r.capital_expenditures.as_ref())
            }),
            ("Free Cash Flow", |r| opt_money(r.free_cash_flow.as_ref())),
            ("Net Income", |r| opt_money(r.net_income.as_ref())),
        ],
    )
}
