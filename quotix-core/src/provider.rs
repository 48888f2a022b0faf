use async_trait::async_trait;

use crate::request::{BarInterval, HistoryPeriod};
use crate::statements::StatementTable;
use crate::types::{
    CompanyProfile, DividendEvent, NewsItem, PriceBar, RecommendationPeriod, SearchHit,
    SplitEvent, TickerQuote,
};
use crate::QuotixError;

/// Which of the three financial statements to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// Income statement.
    Income,
    /// Balance sheet.
    BalanceSheet,
    /// Cash flow statement.
    CashFlow,
}

impl StatementKind {
    /// Stable lower-snake label, used in capability strings and envelopes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income_statement",
            Self::BalanceSheet => "balance_sheet",
            Self::CashFlow => "cash_flow",
        }
    }
}

/// Read-only market-data backend the facade operations call into.
///
/// Every method is a single-shot request with no retry and no shared state;
/// implementations must be safe to share behind an `Arc` across concurrent
/// requests. Methods default to `Unsupported` so test doubles can override
/// only the endpoints a test exercises.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Short provider name used in error messages and logs.
    fn name(&self) -> &'static str;

    /// Fetch a point-in-time quote for `symbol`.
    async fn quote(&self, _symbol: &str) -> Result<TickerQuote, QuotixError> {
        Err(QuotixError::unsupported("quote"))
    }

    /// Fetch the descriptive profile for `symbol`.
    async fn profile(&self, _symbol: &str) -> Result<CompanyProfile, QuotixError> {
        Err(QuotixError::unsupported("profile"))
    }

    /// Fetch OHLCV bars for `symbol` over `period` at `interval`, in
    /// provider-determined (chronological) order.
    async fn history(
        &self,
        _symbol: &str,
        _period: HistoryPeriod,
        _interval: BarInterval,
    ) -> Result<Vec<PriceBar>, QuotixError> {
        Err(QuotixError::unsupported("history"))
    }

    /// Fetch the full dividend history for `symbol`.
    async fn dividends(&self, _symbol: &str) -> Result<Vec<DividendEvent>, QuotixError> {
        Err(QuotixError::unsupported("dividends"))
    }

    /// Fetch the full split history for `symbol`.
    async fn splits(&self, _symbol: &str) -> Result<Vec<SplitEvent>, QuotixError> {
        Err(QuotixError::unsupported("splits"))
    }

    /// Fetch one financial statement for `symbol`, annual or quarterly.
    async fn statement(
        &self,
        _symbol: &str,
        _kind: StatementKind,
        _quarterly: bool,
    ) -> Result<StatementTable, QuotixError> {
        Err(QuotixError::unsupported("statement"))
    }

    /// Fetch up to `count` recent news items for `symbol`.
    async fn news(&self, _symbol: &str, _count: usize) -> Result<Vec<NewsItem>, QuotixError> {
        Err(QuotixError::unsupported("news"))
    }

    /// Fetch the period-bucketed analyst recommendation table for `symbol`.
    async fn recommendations(
        &self,
        _symbol: &str,
    ) -> Result<Vec<RecommendationPeriod>, QuotixError> {
        Err(QuotixError::unsupported("recommendations"))
    }

    /// Run a free-text instrument search, returning at most `limit` hits.
    async fn search(&self, _query: &str, _limit: usize) -> Result<Vec<SearchHit>, QuotixError> {
        Err(QuotixError::unsupported("search"))
    }
}
