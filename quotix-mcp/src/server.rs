//! MCP tool registration over the facade operations.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;

use quotix_core::MarketDataProvider;

use crate::tools;

/// Parameters for single-symbol lookups.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SymbolParams {
    /// Stock ticker symbol (e.g. 'AAPL', 'GOOGL').
    pub symbol: String,
}

/// Parameters for the historical-data lookup.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct HistoryParams {
    /// Stock ticker symbol (e.g. 'AAPL', 'GOOGL').
    pub symbol: String,
    /// Time period: 1d, 5d, 1mo, 3mo, 6mo, 1y, 2y, 5y, 10y, ytd, max.
    pub period: Option<String>,
    /// Data interval: 1m, 2m, 5m, 15m, 30m, 60m, 90m, 1h, 1d, 5d, 1wk, 1mo, 3mo.
    pub interval: Option<String>,
}

/// Parameters for the financial-statement lookup.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct FinancialsParams {
    /// Stock ticker symbol (e.g. 'AAPL', 'GOOGL').
    pub symbol: String,
    /// True for quarterly statements, false (default) for annual.
    pub quarterly: Option<bool>,
}

/// Parameters for the news lookup.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct NewsParams {
    /// Stock ticker symbol (e.g. 'AAPL', 'GOOGL').
    pub symbol: String,
    /// Number of news articles to return (default 10).
    pub count: Option<usize>,
}

/// Parameters for free-text search.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchParams {
    /// Search query: company name or ticker symbol (e.g. 'Microsoft', 'AAPL').
    pub query: String,
    /// Maximum number of results to return (default 10).
    pub limit: Option<usize>,
}

/// Parameters for the batch quote lookup.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct MultiQuoteParams {
    /// Stock ticker symbols (e.g. ['AAPL', 'GOOGL', 'MSFT']).
    pub symbols: Vec<String>,
}

const DEFAULT_PERIOD: &str = "1mo";
const DEFAULT_INTERVAL: &str = "1d";
const DEFAULT_NEWS_COUNT: usize = 10;
const DEFAULT_SEARCH_LIMIT: usize = 10;

/// The MCP server: one registered tool per facade operation, all sharing a
/// single provider handle.
#[derive(Clone)]
pub struct QuotixServer {
    provider: Arc<dyn MarketDataProvider>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl QuotixServer {
    /// A server over the given provider.
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self {
            provider,
            tool_router: Self::tool_router(),
        }
    }

    fn reply(value: serde_json::Value) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::json(value)?]))
    }

    #[tool(
        description = "Get basic stock information including current price and key classification fields"
    )]
    async fn get_stock_info(
        &self,
        Parameters(p): Parameters<SymbolParams>,
    ) -> Result<CallToolResult, McpError> {
        Self::reply(tools::info::stock_info(self.provider.as_ref(), &p.symbol).await)
    }

    #[tool(description = "Get historical stock price data for a period and interval")]
    async fn get_historical_data(
        &self,
        Parameters(p): Parameters<HistoryParams>,
    ) -> Result<CallToolResult, McpError> {
        let period = p.period.as_deref().unwrap_or(DEFAULT_PERIOD);
        let interval = p.interval.as_deref().unwrap_or(DEFAULT_INTERVAL);
        Self::reply(
            tools::history::historical_data(self.provider.as_ref(), &p.symbol, period, interval)
                .await,
        )
    }

    #[tool(description = "Get dividend history for a stock")]
    async fn get_dividends(
        &self,
        Parameters(p): Parameters<SymbolParams>,
    ) -> Result<CallToolResult, McpError> {
        Self::reply(tools::actions::dividends(self.provider.as_ref(), &p.symbol).await)
    }

    #[tool(description = "Get stock split history for a stock")]
    async fn get_splits(
        &self,
        Parameters(p): Parameters<SymbolParams>,
    ) -> Result<CallToolResult, McpError> {
        Self::reply(tools::actions::splits(self.provider.as_ref(), &p.symbol).await)
    }

    #[tool(description = "Get financial statements (income, balance sheet, cash flow)")]
    async fn get_financials(
        &self,
        Parameters(p): Parameters<FinancialsParams>,
    ) -> Result<CallToolResult, McpError> {
        Self::reply(
            tools::financials::financials(
                self.provider.as_ref(),
                &p.symbol,
                p.quarterly.unwrap_or(false),
            )
            .await,
        )
    }

    #[tool(
        description = "Get earnings data extracted from income statements (the dedicated earnings endpoint is deprecated upstream)"
    )]
    async fn get_earnings(
        &self,
        Parameters(p): Parameters<SymbolParams>,
    ) -> Result<CallToolResult, McpError> {
        Self::reply(tools::earnings::earnings(self.provider.as_ref(), &p.symbol).await)
    }

    #[tool(description = "Get recent news for a stock")]
    async fn get_news(
        &self,
        Parameters(p): Parameters<NewsParams>,
    ) -> Result<CallToolResult, McpError> {
        let count = p.count.unwrap_or(DEFAULT_NEWS_COUNT);
        Self::reply(tools::news::news(self.provider.as_ref(), &p.symbol, count).await)
    }

    #[tool(description = "Get analyst recommendations for a stock")]
    async fn get_recommendations(
        &self,
        Parameters(p): Parameters<SymbolParams>,
    ) -> Result<CallToolResult, McpError> {
        Self::reply(
            tools::recommendations::recommendations(self.provider.as_ref(), &p.symbol).await,
        )
    }

    #[tool(description = "Search for stocks by company name or ticker symbol")]
    async fn search_stocks(
        &self,
        Parameters(p): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = p.limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        Self::reply(tools::search::search_stocks(self.provider.as_ref(), &p.query, limit).await)
    }

    #[tool(description = "Get current quotes for multiple stocks at once")]
    async fn get_multiple_quotes(
        &self,
        Parameters(p): Parameters<MultiQuoteParams>,
    ) -> Result<CallToolResult, McpError> {
        Self::reply(tools::quotes::multiple_quotes(self.provider.as_ref(), &p.symbols).await)
    }
}

#[tool_handler]
impl ServerHandler for QuotixServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Market-data tools over Yahoo Finance: quotes, history, corporate actions, \
                 financial statements, earnings, news, recommendations, and search."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
