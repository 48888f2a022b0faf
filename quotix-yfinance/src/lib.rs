//! quotix-yfinance
//!
//! Yahoo Finance provider that implements `MarketDataProvider` on top of the
//! `yfinance-rs` client library. Exposes quotes, history, corporate actions,
//! financial statements, analyst recommendations, news, and search.
#![warn(missing_docs)]

mod convert;

use async_trait::async_trait;
use yf::core::HistoryService;
use yfinance_rs as yf;

use quotix_core::{
    BarInterval, CompanyProfile, DividendEvent, HistoryPeriod, MarketDataProvider, NewsItem,
    PriceBar, QuotixError, RecommendationPeriod, SearchHit, SplitEvent, StatementKind,
    StatementTable, TickerQuote,
};

/// Provider backed by a single `YfClient` instance.
/// `YfClient` is `Clone + Send + Sync`, so no external locking is needed.
#[derive(Clone)]
pub struct YfProvider {
    client: yf::YfClient,
}

impl YfProvider {
    /// Build a default `YfClient` with a recommended user agent.
    ///
    /// # Panics
    /// Panics if building the underlying `YfClient` fails, which is unexpected
    /// in normal environments (invalid user agent configuration).
    #[must_use]
    pub fn new_default() -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .expect("Failed to build reqwest client for YfClient");
        Self {
            client: yf::YfClient::builder()
                .custom_client(http)
                .user_agent("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36")
                .build()
                .expect("Failed to build YfClient with user agent"),
        }
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }

    async fn fetch_history(
        &self,
        symbol: &str,
        period: (i64, i64),
        interval: BarInterval,
        include_actions: bool,
    ) -> Result<yf::HistoryResponse, QuotixError> {
        let req = yf::core::services::HistoryRequest {
            range: None,
            period: Some(period),
            interval: convert::interval(interval),
            include_prepost: false,
            include_actions,
            auto_adjust: true,
            keepna: false,
        };
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }

    async fn fetch_actions(
        &self,
        symbol: &str,
    ) -> Result<Vec<paft::market::action::Action>, QuotixError> {
        let now = chrono::Utc::now();
        let resp = self
            .fetch_history(symbol, (0, now.timestamp()), BarInterval::D1, true)
            .await?;
        Ok(resp.actions)
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> QuotixError {
    match e {
        yf::YfError::NotFound { .. } => QuotixError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            QuotixError::provider("yfinance", format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => {
            QuotixError::provider("yfinance", format!("server error {status}: {context}"))
        }
        yf::YfError::Status { status, .. } => {
            QuotixError::provider("yfinance", format!("status {status}: {context}"))
        }
        other => QuotixError::provider("yfinance", other.to_string()),
    }
}

#[async_trait]
impl MarketDataProvider for YfProvider {
    fn name(&self) -> &'static str {
        "yfinance"
    }

    async fn quote(&self, symbol: &str) -> Result<TickerQuote, QuotixError> {
        let raw = yf::quote::quotes(&self.client, std::iter::once(symbol.to_string()))
            .await
            .map_err(|e| map_yf_err(&e, &format!("quote for {symbol}")))?;
        let first = raw
            .into_iter()
            .next()
            .ok_or_else(|| QuotixError::not_found(format!("quote for {symbol}")))?;
        Ok(convert::quote(symbol, first))
    }

    async fn profile(&self, symbol: &str) -> Result<CompanyProfile, QuotixError> {
        let p = yf::profile::load_profile(&self.client, symbol)
            .await
            .map_err(|e| map_yf_err(&e, &format!("profile for {symbol}")))?;
        Ok(convert::profile(p))
    }

    async fn history(
        &self,
        symbol: &str,
        period: HistoryPeriod,
        interval: BarInterval,
    ) -> Result<Vec<PriceBar>, QuotixError> {
        let bounds = convert::period_bounds(period, chrono::Utc::now());
        let resp = self.fetch_history(symbol, bounds, interval, false).await?;
        Ok(resp.candles.into_iter().map(convert::candle).collect())
    }

    async fn dividends(&self, symbol: &str) -> Result<Vec<DividendEvent>, QuotixError> {
        let actions = self.fetch_actions(symbol).await?;
        Ok(convert::dividends(actions))
    }

    async fn splits(&self, symbol: &str) -> Result<Vec<SplitEvent>, QuotixError> {
        let actions = self.fetch_actions(symbol).await?;
        Ok(convert::splits(actions))
    }

    async fn statement(
        &self,
        symbol: &str,
        kind: StatementKind,
        quarterly: bool,
    ) -> Result<StatementTable, QuotixError> {
        let fb = yf::fundamentals::FundamentalsBuilder::new(&self.client, symbol.to_string());
        match kind {
            StatementKind::Income => {
                let rows = fb
                    .income_statement(quarterly, None)
                    .await
                    .map_err(|e| map_yf_err(&e, &format!("income statement for {symbol}")))?;
                Ok(convert::income_table(rows))
            }
            StatementKind::BalanceSheet => {
                let rows = fb
                    .balance_sheet(quarterly, None)
                    .await
                    .map_err(|e| map_yf_err(&e, &format!("balance sheet for {symbol}")))?;
                Ok(convert::balance_table(rows))
            }
            StatementKind::CashFlow => {
                let rows = fb
                    .cashflow(quarterly, None)
                    .await
                    .map_err(|e| map_yf_err(&e, &format!("cashflow for {symbol}")))?;
                Ok(convert::cashflow_table(rows))
            }
        }
    }

    async fn news(&self, symbol: &str, count: usize) -> Result<Vec<NewsItem>, QuotixError> {
        let count = u32::try_from(count)
            .map_err(|_| QuotixError::InvalidArg("count too large for provider".into()))?;
        let articles = yf::news::NewsBuilder::new(&self.client, symbol)
            .count(count)
            .tab(yf::news::NewsTab::News)
            .fetch()
            .await
            .map_err(|e| map_yf_err(&e, &format!("news for {symbol}")))?;
        Ok(articles.into_iter().map(convert::news_item).collect())
    }

    async fn recommendations(
        &self,
        symbol: &str,
    ) -> Result<Vec<RecommendationPeriod>, QuotixError> {
        let rows = yf::analysis::AnalysisBuilder::new(&self.client, symbol.to_string())
            .recommendations()
            .await
            .map_err(|e| map_yf_err(&e, &format!("recommendations for {symbol}")))?;
        Ok(rows.into_iter().map(convert::recommendation).collect())
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, QuotixError> {
        let count = u32::try_from(limit)
            .map_err(|_| QuotixError::InvalidArg("limit too large for provider".into()))?;
        let resp = yf::search::SearchBuilder::new(&self.client, query)
            .quotes_count(count)
            .fetch()
            .await
            .map_err(|e| map_yf_err(&e, &format!("search for {query:?}")))?;
        Ok(resp.results.into_iter().map(convert::search_hit).collect())
    }
}
