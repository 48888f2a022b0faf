use std::fmt;
use std::str::FromStr;

use crate::QuotixError;

/// Enumerated lookback period accepted by the history operation.
///
/// Tokens match the provider's native range vocabulary:
/// `1d 5d 1mo 3mo 6mo 1y 2y 5y 10y ytd max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryPeriod {
    /// One day.
    D1,
    /// Five days.
    D5,
    /// One month.
    M1,
    /// Three months.
    M3,
    /// Six months.
    M6,
    /// One year.
    Y1,
    /// Two years.
    Y2,
    /// Five years.
    Y5,
    /// Ten years.
    Y10,
    /// Year to date.
    Ytd,
    /// Full available history.
    Max,
}

impl HistoryPeriod {
    /// Every valid period, in ascending span order.
    pub const ALL: &'static [Self] = &[
        Self::D1,
        Self::D5,
        Self::M1,
        Self::M3,
        Self::M6,
        Self::Y1,
        Self::Y2,
        Self::Y5,
        Self::Y10,
        Self::Ytd,
        Self::Max,
    ];

    /// The canonical wire token for this period.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
            Self::M6 => "6mo",
            Self::Y1 => "1y",
            Self::Y2 => "2y",
            Self::Y5 => "5y",
            Self::Y10 => "10y",
            Self::Ytd => "ytd",
            Self::Max => "max",
        }
    }
}

impl fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HistoryPeriod {
    type Err = QuotixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1d" => Ok(Self::D1),
            "5d" => Ok(Self::D5),
            "1mo" => Ok(Self::M1),
            "3mo" => Ok(Self::M3),
            "6mo" => Ok(Self::M6),
            "1y" => Ok(Self::Y1),
            "2y" => Ok(Self::Y2),
            "5y" => Ok(Self::Y5),
            "10y" => Ok(Self::Y10),
            "ytd" => Ok(Self::Ytd),
            "max" => Ok(Self::Max),
            other => Err(QuotixError::InvalidArg(format!(
                "invalid period '{other}' (expected one of 1d,5d,1mo,3mo,6mo,1y,2y,5y,10y,ytd,max)"
            ))),
        }
    }
}

/// Enumerated bar interval accepted by the history operation.
///
/// `60m` and `1h` are aliases for the same hourly cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarInterval {
    /// One minute.
    I1m,
    /// Two minutes.
    I2m,
    /// Five minutes.
    I5m,
    /// Fifteen minutes.
    I15m,
    /// Thirty minutes.
    I30m,
    /// One hour (also accepted as `60m`).
    I1h,
    /// Ninety minutes.
    I90m,
    /// One day.
    D1,
    /// Five days.
    D5,
    /// One week.
    W1,
    /// One month.
    M1,
    /// Three months.
    M3,
}

impl BarInterval {
    /// Every valid interval, from finest to coarsest.
    pub const ALL: &'static [Self] = &[
        Self::I1m,
        Self::I2m,
        Self::I5m,
        Self::I15m,
        Self::I30m,
        Self::I1h,
        Self::I90m,
        Self::D1,
        Self::D5,
        Self::W1,
        Self::M1,
        Self::M3,
    ];

    /// The canonical wire token for this interval.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I1m => "1m",
            Self::I2m => "2m",
            Self::I5m => "5m",
            Self::I15m => "15m",
            Self::I30m => "30m",
            Self::I1h => "1h",
            Self::I90m => "90m",
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::W1 => "1wk",
            Self::M1 => "1mo",
            Self::M3 => "3mo",
        }
    }
}

impl fmt::Display for BarInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarInterval {
    type Err = QuotixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1m" => Ok(Self::I1m),
            "2m" => Ok(Self::I2m),
            "5m" => Ok(Self::I5m),
            "15m" => Ok(Self::I15m),
            "30m" => Ok(Self::I30m),
            "60m" | "1h" => Ok(Self::I1h),
            "90m" => Ok(Self::I90m),
            "1d" => Ok(Self::D1),
            "5d" => Ok(Self::D5),
            "1wk" => Ok(Self::W1),
            "1mo" => Ok(Self::M1),
            "3mo" => Ok(Self::M3),
            other => Err(QuotixError::InvalidArg(format!(
                "invalid interval '{other}' (expected one of 1m,2m,5m,15m,30m,60m,90m,1h,1d,5d,1wk,1mo,3mo)"
            ))),
        }
    }
}
