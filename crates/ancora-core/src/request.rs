//! Request assembly and boundary validation.
//!
//! A [`MomentumRequest`] is the only entry point into the engine. All input
//! validation happens in its constructor, before any window calculation, so
//! the downstream components can assume well-formed values and express their
//! failure modes purely as data.

use std::fmt;

use crate::error::{AncoraError, Result};
use crate::types::{Date, Symbol, Unit};

/// Maximum number of tickers accepted in a single request.
pub const MAX_TICKERS: usize = 5;

/// The point in time a request is evaluated against.
///
/// Month-unit requests reference a year-month; week- and day-unit requests
/// reference a full calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferencePeriod {
    /// A year-month, held as the first day of that month.
    Month(Date),
    /// A full calendar date.
    Date(Date),
}

impl ReferencePeriod {
    /// Parses the reference string for the given unit.
    ///
    /// `Month` expects `YYYY-MM`; `Week` and `Day` expect `YYYY-MM-DD`.
    pub fn parse(unit: Unit, as_of: &str) -> Result<Self> {
        match unit {
            Unit::Month => {
                let parsed = as_of.split_once('-').and_then(|(y, m)| {
                    let year: i32 = y.parse().ok()?;
                    let month: u32 = m.parse().ok()?;
                    Date::from_ymd_opt(year, month, 1)
                });
                parsed.map(Self::Month).ok_or_else(|| {
                    AncoraError::InvalidPeriod(format!("'{as_of}' (expected YYYY-MM)"))
                })
            }
            Unit::Week | Unit::Day => Date::parse_from_str(as_of, "%Y-%m-%d")
                .map(Self::Date)
                .map_err(|_| {
                    AncoraError::InvalidPeriod(format!("'{as_of}' (expected YYYY-MM-DD)"))
                }),
        }
    }

    /// Returns the reference as a concrete date.
    ///
    /// For a year-month this is the first day of the month; the month-unit
    /// calendar logic only ever reads the year and month from it.
    #[must_use]
    pub const fn as_date(&self) -> Date {
        match self {
            Self::Month(d) | Self::Date(d) => *d,
        }
    }
}

impl fmt::Display for ReferencePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month(d) => write!(f, "{}", d.format("%Y-%m")),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// A validated momentum request.
///
/// Construction normalizes ticker symbols to uppercase and rejects malformed
/// input with a descriptive [`AncoraError`]. Once built, the request is
/// immutable.
///
/// # Example
///
/// ```
/// use ancora_core::request::MomentumRequest;
/// use ancora_core::types::Unit;
///
/// let request = MomentumRequest::new(
///     vec!["aapl".to_string(), "msft".to_string()],
///     Unit::Month,
///     3,
///     "2025-09",
/// )
/// .unwrap();
/// assert_eq!(request.tickers(), ["AAPL", "MSFT"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MomentumRequest {
    tickers: Vec<Symbol>,
    unit: Unit,
    periods: u32,
    reference: ReferencePeriod,
}

impl MomentumRequest {
    /// Builds a request from raw inputs, failing fast on malformed ones.
    ///
    /// Accepts 1 to [`MAX_TICKERS`] symbols (order is significant and
    /// preserved through to the results), a positive period count, and a
    /// reference string matching the unit's expected format.
    pub fn new(tickers: Vec<String>, unit: Unit, periods: u32, as_of: &str) -> Result<Self> {
        if periods == 0 {
            return Err(AncoraError::InvalidCount(periods));
        }
        if tickers.is_empty() {
            return Err(AncoraError::InvalidTickers(
                "at least one ticker is required".to_string(),
            ));
        }
        if tickers.len() > MAX_TICKERS {
            return Err(AncoraError::InvalidTickers(format!(
                "got {}, maximum is {MAX_TICKERS}",
                tickers.len()
            )));
        }
        let mut normalized = Vec::with_capacity(tickers.len());
        for ticker in tickers {
            let symbol = ticker.trim().to_uppercase();
            if symbol.is_empty() {
                return Err(AncoraError::InvalidTickers(
                    "ticker symbols must be non-empty".to_string(),
                ));
            }
            normalized.push(symbol);
        }
        let reference = ReferencePeriod::parse(unit, as_of)?;

        Ok(Self {
            tickers: normalized,
            unit,
            periods,
            reference,
        })
    }

    /// Requested tickers, uppercase, in the caller's original order.
    #[must_use]
    pub fn tickers(&self) -> &[Symbol] {
        &self.tickers
    }

    /// The time unit of the request.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Number of periods to look back.
    #[must_use]
    pub const fn periods(&self) -> u32 {
        self.periods
    }

    /// The validated reference period.
    #[must_use]
    pub const fn reference(&self) -> ReferencePeriod {
        self.reference
    }
}
