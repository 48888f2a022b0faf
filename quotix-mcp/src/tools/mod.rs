//! Facade operations, one module per data category.
//!
//! Every operation takes the provider by reference, returns a single JSON
//! envelope, and never fails: provider faults become `{ "symbol": ..,
//! "error": .. }` payloads at this boundary.

pub mod actions;
pub mod earnings;
pub mod financials;
pub mod history;
pub mod info;
pub mod news;
pub mod quotes;
pub mod recommendations;
pub mod search;

/// Upper-case a requested symbol the way every operation echoes it back.
#[must_use]
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Truncate a business summary to `max` characters, appending a continuation
/// marker whenever the source text is non-empty.
#[must_use]
pub fn truncate_summary(summary: &str, max: usize) -> String {
    if summary.is_empty() {
        return String::new();
    }
    let cut: String = summary.chars().take(max).collect();
    format!("{cut}...")
}
