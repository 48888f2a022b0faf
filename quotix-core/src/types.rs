//! Transient result records produced by providers and reshaped by the facade.
//!
//! All of these are plain, owned, `serde`-serializable values with no identity
//! beyond the request that produced them. Numeric fields absent upstream stay
//! `None`; the facade decides per field whether `None` becomes `null` or a
//! zero default when building the response envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time quote for a single symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerQuote {
    /// Upper-cased ticker symbol.
    pub symbol: String,
    /// Display name, when the provider supplies one.
    pub name: Option<String>,
    /// Last traded price.
    pub price: Option<f64>,
    /// Previous session close.
    pub previous_close: Option<f64>,
    /// Day volume.
    pub volume: Option<u64>,
}

impl TickerQuote {
    /// A quote with only the symbol set; all market fields absent.
    pub fn empty(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            price: None,
            previous_close: None,
            volume: None,
        }
    }
}

/// Descriptive company (or fund) profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Legal or display name.
    pub name: Option<String>,
    /// GICS-style sector classification.
    pub sector: Option<String>,
    /// Industry classification.
    pub industry: Option<String>,
    /// Country of domicile.
    pub country: Option<String>,
    /// Corporate website URL.
    pub website: Option<String>,
    /// Long business description.
    pub summary: Option<String>,
}

/// One OHLCV bar from a history query.
///
/// Volume is zero when the provider omits it; open/high/low/close are always
/// present in a provider-returned bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Bar timestamp (UTC).
    pub ts: DateTime<Utc>,
    /// Opening price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Traded volume, zero when absent upstream.
    pub volume: u64,
}

/// A single cash dividend payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendEvent {
    /// Ex-dividend date.
    pub ts: DateTime<Utc>,
    /// Cash amount per share.
    pub amount: f64,
}

/// A single share split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitEvent {
    /// Effective date.
    pub ts: DateTime<Utc>,
    /// New share count per old share (e.g. 4 in a 4-for-1 split).
    pub numerator: u32,
    /// Old share count (e.g. 1 in a 4-for-1 split).
    pub denominator: u32,
}

impl SplitEvent {
    /// The split expressed as a single ratio, e.g. `4.0` for a 4-for-1 split.
    ///
    /// A zero denominator (malformed provider data) yields `0.0` rather than
    /// an infinity leaking into serialized output.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.denominator == 0 {
            0.0
        } else {
            f64::from(self.numerator) / f64::from(self.denominator)
        }
    }
}

/// One news article attached to a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline.
    pub title: String,
    /// Canonical article URL.
    pub link: Option<String>,
    /// Publisher display name.
    pub publisher: Option<String>,
    /// Publish time, when the provider supplies one.
    pub published_at: Option<DateTime<Utc>>,
    /// Content type label (e.g. "STORY").
    pub content_type: Option<String>,
    /// Best-available thumbnail URL.
    pub thumbnail: Option<String>,
    /// Article summary.
    pub summary: Option<String>,
}

/// Analyst recommendation counts for one reporting period.
///
/// Buckets the provider omits stay `None`; consumers that need a total are
/// expected to treat a missing bucket as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationPeriod {
    /// Period label, e.g. "0m", "-1m", or "2024-08".
    pub period: String,
    /// Strong-buy analyst count.
    pub strong_buy: Option<u32>,
    /// Buy analyst count.
    pub buy: Option<u32>,
    /// Hold analyst count.
    pub hold: Option<u32>,
    /// Sell analyst count.
    pub sell: Option<u32>,
    /// Strong-sell analyst count.
    pub strong_sell: Option<u32>,
}

impl RecommendationPeriod {
    /// Sum of the five rating buckets, counting a missing bucket as zero.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.strong_buy.unwrap_or(0)
            + self.buy.unwrap_or(0)
            + self.hold.unwrap_or(0)
            + self.sell.unwrap_or(0)
            + self.strong_sell.unwrap_or(0)
    }
}

/// One hit from a free-text instrument search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Ticker symbol.
    pub symbol: String,
    /// Display name, long form preferred over short.
    pub name: Option<String>,
    /// Instrument kind label (e.g. "EQUITY", "ETF").
    pub kind: Option<String>,
    /// Exchange code.
    pub exchange: Option<String>,
    /// Sector classification, when the provider includes it.
    pub sector: Option<String>,
    /// Industry classification, when the provider includes it.
    pub industry: Option<String>,
    /// Provider-assigned relevance score.
    pub score: Option<f64>,
    /// Whether the hit comes from the provider's own listing index.
    pub provider_listed: bool,
}
