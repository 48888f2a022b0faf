//! Mock provider for CI-safe demos and facade tests. Provides deterministic
//! data from static fixtures.
//!
//! Reserved symbols steer behavior: `FAIL` forces a provider error on every
//! operation, and `EMPTY` resolves but carries no dividends, splits, news,
//! recommendations, history, or statements.

use async_trait::async_trait;

use quotix_core::{
    BarInterval, CompanyProfile, DividendEvent, HistoryPeriod, MarketDataProvider, NewsItem,
    PriceBar, QuotixError, RecommendationPeriod, SearchHit, SplitEvent, StatementKind,
    StatementTable, TickerQuote,
};

mod fixtures;

/// Provider that serves static fixture data instead of hitting the network.
pub struct MockProvider;

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    /// A new fixture-backed provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> QuotixError {
        QuotixError::not_found(what.to_string())
    }

    fn maybe_fail(symbol: &str, capability: &'static str) -> Result<(), QuotixError> {
        if symbol == "FAIL" {
            return Err(QuotixError::provider(
                "quotix-mock",
                format!("forced failure: {capability}"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MarketDataProvider for MockProvider {
    fn name(&self) -> &'static str {
        "quotix-mock"
    }

    async fn quote(&self, symbol: &str) -> Result<TickerQuote, QuotixError> {
        Self::maybe_fail(symbol, "quote")?;
        fixtures::quotes::by_symbol(symbol)
            .ok_or_else(|| Self::not_found(&format!("quote for {symbol}")))
    }

    async fn profile(&self, symbol: &str) -> Result<CompanyProfile, QuotixError> {
        Self::maybe_fail(symbol, "profile")?;
        fixtures::profile::by_symbol(symbol)
            .ok_or_else(|| Self::not_found(&format!("profile for {symbol}")))
    }

    async fn history(
        &self,
        symbol: &str,
        _period: HistoryPeriod,
        _interval: BarInterval,
    ) -> Result<Vec<PriceBar>, QuotixError> {
        Self::maybe_fail(symbol, "history")?;
        fixtures::history::by_symbol(symbol)
            .ok_or_else(|| Self::not_found(&format!("history for {symbol}")))
    }

    async fn dividends(&self, symbol: &str) -> Result<Vec<DividendEvent>, QuotixError> {
        Self::maybe_fail(symbol, "dividends")?;
        Ok(fixtures::history::dividends_by_symbol(symbol))
    }

    async fn splits(&self, symbol: &str) -> Result<Vec<SplitEvent>, QuotixError> {
        Self::maybe_fail(symbol, "splits")?;
        Ok(fixtures::history::splits_by_symbol(symbol))
    }

    async fn statement(
        &self,
        symbol: &str,
        kind: StatementKind,
        quarterly: bool,
    ) -> Result<StatementTable, QuotixError> {
        Self::maybe_fail(symbol, "statement")?;
        Ok(fixtures::statements::by_symbol(symbol, kind, quarterly))
    }

    async fn news(&self, symbol: &str, count: usize) -> Result<Vec<NewsItem>, QuotixError> {
        Self::maybe_fail(symbol, "news")?;
        let mut items = fixtures::news::by_symbol(symbol);
        items.truncate(count);
        Ok(items)
    }

    async fn recommendations(
        &self,
        symbol: &str,
    ) -> Result<Vec<RecommendationPeriod>, QuotixError> {
        Self::maybe_fail(symbol, "recommendations")?;
        Ok(fixtures::analysis::by_symbol(symbol))
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, QuotixError> {
        let mut hits = fixtures::search::search(query);
        hits.truncate(limit);
        Ok(hits)
    }
}
