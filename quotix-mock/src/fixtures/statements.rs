use std::collections::BTreeMap;

use quotix_core::{LineItem, StatementKind, StatementTable};

fn line(label: &str, values: &[(&str, f64)]) -> LineItem {
    LineItem {
        label: label.to_string(),
        values: values
            .iter()
            .map(|&(k, v)| (k.to_string(), Some(v)))
            .collect::<BTreeMap<_, _>>(),
    }
}

pub fn by_symbol(s: &str, kind: StatementKind, quarterly: bool) -> StatementTable {
    if s == "EMPTY" {
        return StatementTable::default();
    }
    // Annual columns; quarterly swaps in quarter-end dates.
    let (p0, p1) = if quarterly {
        ("2024-06-30", "2024-09-30")
    } else {
        ("2023-09-30", "2024-09-30")
    };
    let net_income_label = if s == "VARIANT" {
        // Some issuers only report the stockholder-attributed row.
        "Net Income Common Stockholders"
    } else {
        "Net Income"
    };
    let items = match kind {
        StatementKind::Income => vec![
            line("Total Revenue", &[(p0, 383_000_000_000.0), (p1, 391_000_000_000.0)]),
            line("Gross Profit", &[(p0, 169_000_000_000.0), (p1, 180_000_000_000.0)]),
            line("Operating Income", &[(p0, 114_000_000_000.0), (p1, 123_000_000_000.0)]),
            line(net_income_label, &[(p0, 97_000_000_000.0), (p1, 93_700_000_000.0)]),
        ],
        StatementKind::BalanceSheet => vec![
            line("Total Assets", &[(p0, 352_000_000_000.0), (p1, 365_000_000_000.0)]),
            line("Total Liabilities", &[(p0, 290_000_000_000.0), (p1, 308_000_000_000.0)]),
            line("Total Equity", &[(p0, 62_000_000_000.0), (p1, 57_000_000_000.0)]),
            line("Cash", &[(p0, 30_000_000_000.0), (p1, 29_900_000_000.0)]),
        ],
        StatementKind::CashFlow => vec![
            line("Operating Cash Flow", &[(p0, 110_500_000_000.0), (p1, 118_000_000_000.0)]),
            line("Capital Expenditures", &[(p0, -10_900_000_000.0), (p1, -9_400_000_000.0)]),
            line("Free Cash Flow", &[(p0, 99_600_000_000.0), (p1, 108_600_000_000.0)]),
            line(net_income_label, &[(p0, 97_000_000_000.0), (p1, 93_700_000_000.0)]),
        ],
    };
    StatementTable { items }
}
