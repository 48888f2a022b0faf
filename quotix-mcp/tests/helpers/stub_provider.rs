#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;

use async_trait::async_trait;
use quotix_core::{
    BarInterval, CompanyProfile, DividendEvent, HistoryPeriod, MarketDataProvider, NewsItem,
    PriceBar, QuotixError, RecommendationPeriod, SearchHit, SplitEvent, StatementKind,
    StatementTable, TickerQuote,
};

/// Scriptable in-memory provider used by the facade tests.
///
/// Every endpoint is an optional closure; endpoints a test does not script
/// answer `Unsupported`, matching the trait defaults.
#[derive(Default)]
pub struct StubProvider {
    pub quote_fn: Option<Arc<dyn Fn(&str) -> Result<TickerQuote, QuotixError> + Send + Sync>>,
    pub profile_fn: Option<Arc<dyn Fn(&str) -> Result<CompanyProfile, QuotixError> + Send + Sync>>,
    pub history_fn: Option<
        Arc<
            dyn Fn(&str, HistoryPeriod, BarInterval) -> Result<Vec<PriceBar>, QuotixError>
                + Send
                + Sync,
        >,
    >,
    pub dividends_fn:
        Option<Arc<dyn Fn(&str) -> Result<Vec<DividendEvent>, QuotixError> + Send + Sync>>,
    pub splits_fn: Option<Arc<dyn Fn(&str) -> Result<Vec<SplitEvent>, QuotixError> + Send + Sync>>,
    pub statement_fn: Option<
        Arc<dyn Fn(&str, StatementKind, bool) -> Result<StatementTable, QuotixError> + Send + Sync>,
    >,
    pub news_fn: Option<Arc<dyn Fn(&str, usize) -> Result<Vec<NewsItem>, QuotixError> + Send + Sync>>,
    pub recommendations_fn:
        Option<Arc<dyn Fn(&str) -> Result<Vec<RecommendationPeriod>, QuotixError> + Send + Sync>>,
    pub search_fn:
        Option<Arc<dyn Fn(&str, usize) -> Result<Vec<SearchHit>, QuotixError> + Send + Sync>>,
}

impl StubProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(
        mut self,
        f: impl Fn(&str) -> Result<TickerQuote, QuotixError> + Send + Sync + 'static,
    ) -> Self {
        self.quote_fn = Some(Arc::new(f));
        self
    }

    pub fn with_profile(
        mut self,
        f: impl Fn(&str) -> Result<CompanyProfile, QuotixError> + Send + Sync + 'static,
    ) -> Self {
        self.profile_fn = Some(Arc::new(f));
        self
    }

    pub fn with_history(
        mut self,
        f: impl Fn(&str, HistoryPeriod, BarInterval) -> Result<Vec<PriceBar>, QuotixError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.history_fn = Some(Arc::new(f));
        self
    }

    pub fn with_dividends(
        mut self,
        f: impl Fn(&str) -> Result<Vec<DividendEvent>, QuotixError> + Send + Sync + 'static,
    ) -> Self {
        self.dividends_fn = Some(Arc::new(f));
        self
    }

    pub fn with_splits(
        mut self,
        f: impl Fn(&str) -> Result<Vec<SplitEvent>, QuotixError> + Send + Sync + 'static,
    ) -> Self {
        self.splits_fn = Some(Arc::new(f));
        self
    }

    pub fn with_statement(
        mut self,
        f: impl Fn(&str, StatementKind, bool) -> Result<StatementTable, QuotixError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.statement_fn = Some(Arc::new(f));
        self
    }

    pub fn with_news(
        mut self,
        f: impl Fn(&str, usize) -> Result<Vec<NewsItem>, QuotixError> + Send + Sync + 'static,
    ) -> Self {
        self.news_fn = Some(Arc::new(f));
        self
    }

    pub fn with_recommendations(
        mut self,
        f: impl Fn(&str) -> Result<Vec<RecommendationPeriod>, QuotixError> + Send + Sync + 'static,
    ) -> Self {
        self.recommendations_fn = Some(Arc::new(f));
        self
    }

    pub fn with_search(
        mut self,
        f: impl Fn(&str, usize) -> Result<Vec<SearchHit>, QuotixError> + Send + Sync + 'static,
    ) -> Self {
        self.search_fn = Some(Arc::new(f));
        self
    }
}

#[async_trait]
impl MarketDataProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn quote(&self, symbol: &str) -> Result<TickerQuote, QuotixError> {
        match &self.quote_fn {
            Some(f) => f(symbol),
            None => Err(QuotixError::unsupported("quote")),
        }
    }

    async fn profile(&self, symbol: &str) -> Result<CompanyProfile, QuotixError> {
        match &self.profile_fn {
            Some(f) => f(symbol),
            None => Err(QuotixError::unsupported("profile")),
        }
    }

    async fn history(
        &self,
        symbol: &str,
        period: HistoryPeriod,
        interval: BarInterval,
    ) -> Result<Vec<PriceBar>, QuotixError> {
        match &self.history_fn {
            Some(f) => f(symbol, period, interval),
            None => Err(QuotixError::unsupported("history")),
        }
    }

    async fn dividends(&self, symbol: &str) -> Result<Vec<DividendEvent>, QuotixError> {
        match &self.dividends_fn {
            Some(f) => f(symbol),
            None => Err(QuotixError::unsupported("dividends")),
        }
    }

    async fn splits(&self, symbol: &str) -> Result<Vec<SplitEvent>, QuotixError> {
        match &self.splits_fn {
            Some(f) => f(symbol),
            None => Err(QuotixError::unsupported("splits")),
        }
    }

    async fn statement(
        &self,
        symbol: &str,
        kind: StatementKind,
        quarterly: bool,
    ) -> Result<StatementTable, QuotixError> {
        match &self.statement_fn {
            Some(f) => f(symbol, kind, quarterly),
            None => Err(QuotixError::unsupported("statement")),
        }
    }

    async fn news(&self, symbol: &str, count: usize) -> Result<Vec<NewsItem>, QuotixError> {
        match &self.news_fn {
            Some(f) => f(symbol, count),
            None => Err(QuotixError::unsupported("news")),
        }
    }

    async fn recommendations(
        &self,
        symbol: &str,
    ) -> Result<Vec<RecommendationPeriod>, QuotixError> {
        match &self.recommendations_fn {
            Some(f) => f(symbol),
            None => Err(QuotixError::unsupported("recommendations")),
        }
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, QuotixError> {
        match &self.search_fn {
            Some(f) => f(query, limit),
            None => Err(QuotixError::unsupported("search")),
        }
    }
}
