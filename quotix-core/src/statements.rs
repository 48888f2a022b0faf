use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One labeled financial-statement line item across reporting periods.
///
/// Values are keyed by period date string (e.g. "2023-09-30"); `None` marks a
/// period where the provider reported the row but carried no figure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Provider-facing row label, e.g. "Net Income".
    pub label: String,
    /// Period date string to reported value.
    pub values: BTreeMap<String, Option<f64>>,
}

impl LineItem {
    /// A line item with the given label and no values yet.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: BTreeMap::new(),
        }
    }
}

/// One financial statement (income, balance sheet, or cash flow) as an
/// ordered list of labeled line items.
///
/// Issuer taxonomies vary; consumers locate rows through [`CanonicalItem`]
/// rather than matching labels ad hoc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    /// Line items in provider row order.
    pub items: Vec<LineItem>,
}

impl StatementTable {
    /// True when the provider returned no rows for this statement.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Locate a line item by canonical name.
    ///
    /// Resolution is two-stage: first an exact (case-insensitive) match
    /// against the canonical item's known label variants, then a
    /// case-insensitive substring probe, so issuers whose taxonomy deviates
    /// from the known variants still resolve. Returns the first match in row
    /// order.
    #[must_use]
    pub fn find(&self, item: CanonicalItem) -> Option<&LineItem> {
        let variants = item.label_variants();
        self.items
            .iter()
            .find(|li| {
                variants
                    .iter()
                    .any(|v| li.label.eq_ignore_ascii_case(v))
            })
            .or_else(|| {
                let probe = item.probe();
                self.items
                    .iter()
                    .find(|li| li.label.to_ascii_lowercase().contains(probe))
            })
    }
}

/// Canonical statement line items the facade derives figures from.
///
/// Each canonical item carries the historically observed provider label
/// variants, so matching stays explicit and testable across provider schema
/// changes instead of relying on ad hoc substring search alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanonicalItem {
    /// Bottom-line net income, used by the earnings derivation.
    NetIncome,
}

impl CanonicalItem {
    /// Known provider label spellings for this item, most common first.
    #[must_use]
    pub const fn label_variants(self) -> &'static [&'static str] {
        match self {
            Self::NetIncome => &[
                "Net Income",
                "Net Income Common Stockholders",
                "Net Income Continuous Operations",
                "Net Income From Continuing Operations",
            ],
        }
    }

    /// Lower-case substring fallback probe for unrecognized label variants.
    #[must_use]
    pub const fn probe(self) -> &'static str {
        match self {
            Self::NetIncome => "net income",
        }
    }
}
