//! quotix-core
//!
//! Core types and traits shared across the quotix workspace.
//!
//! - `types`: transient, request-scoped result records (quotes, bars,
//!   corporate actions, news, recommendations, search hits).
//! - `request`: the enumerated period/interval token sets accepted by the
//!   history operation.
//! - `statements`: labeled financial-statement tables and the canonical
//!   line-item lookup used by the earnings derivation.
//! - `provider`: the `MarketDataProvider` trait every data backend implements.
//!
//! Every record here is produced fresh per request and owned by the caller;
//! nothing in this crate caches or persists.
#![warn(missing_docs)]

pub mod error;
/// The `MarketDataProvider` trait and its capability surface.
pub mod provider;
/// Period and interval token enums for history queries.
pub mod request;
/// Labeled statement tables and canonical line-item lookup.
pub mod statements;
pub mod types;

pub use error::QuotixError;
pub use provider::{MarketDataProvider, StatementKind};
pub use request::{BarInterval, HistoryPeriod};
pub use statements::{CanonicalItem, LineItem, StatementTable};
pub use types::*;
